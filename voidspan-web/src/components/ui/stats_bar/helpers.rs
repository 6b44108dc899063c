use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

pub(super) fn one_arg(key: &str, name: &str, value: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert(name, value);
    i18n::tr(key, Some(&vars))
}

pub(super) const fn money_class(money: i64) -> Option<&'static str> {
    if money < 0 { Some("money-negative") } else { None }
}

/// Bar width for a percentage; out-of-range values are pinned to the track.
pub(super) fn bar_width(pct: f64) -> String {
    let pct = if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 };
    format!("width: {pct:.1}%")
}

pub(super) fn meter(
    id: &'static str,
    label: String,
    value: String,
    pct: f64,
    class: Classes,
    caption: Option<String>,
) -> Html {
    let label_id = format!("stat-{id}-label");
    html! {
        <div class={classes!("stat-meter", class)} role="meter" aria-labelledby={label_id.clone()}
            aria-valuemin="0" aria-valuemax="100" aria-valuenow={format!("{:.0}", pct.clamp(0.0, 100.0))}>
            <span id={label_id} class="meter-label">{ label }</span>
            <div class="meter-value">{ value }</div>
            <div class="bar-wrap slim">
                <div class="bar-fill" style={bar_width(pct)}></div>
            </div>
            { caption.map_or_else(Html::default, |text| html! { <p class="muted">{ text }</p> }) }
        </div>
    }
}
