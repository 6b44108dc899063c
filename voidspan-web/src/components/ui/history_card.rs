use crate::game::HistoryItem;
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: HistoryItem,
    /// 1-based position in the feed.
    pub index: usize,
    pub on_open_image: Callback<AttrValue>,
}

#[must_use]
pub fn signed_pct(change: i32) -> String {
    if change > 0 {
        format!("+{change}%")
    } else {
        format!("{change}%")
    }
}

#[function_component(HistoryCard)]
pub fn history_card(p: &Props) -> Html {
    let item = &p.item;
    let open = {
        let cb = p.on_open_image.clone();
        let url = AttrValue::from(item.image_url.clone());
        Callback::from(move |_| cb.emit(url.clone()))
    };
    let cost = i18n::fmt_int(i128::from(item.cost));
    let years = i18n::fmt_int(i128::from(item.time_killed));
    let index = p.index.to_string();
    let entry = {
        let mut vars = BTreeMap::new();
        vars.insert("n", index.as_str());
        i18n::tr("void.entry", Some(&vars))
    };
    let cost_text = {
        let mut vars = BTreeMap::new();
        vars.insert("money", cost.as_str());
        format!("-{}", i18n::tr("stats.yen", Some(&vars)))
    };
    let years_text = {
        let mut vars = BTreeMap::new();
        vars.insert("years", years.as_str());
        i18n::tr("stats.years", Some(&vars))
    };
    let sanity_class = if item.sanity_change >= 0 {
        "delta-up"
    } else {
        "delta-down"
    };

    html! {
        <article class="panel history-card" id={format!("entry-{}", item.id)} aria-label={entry}>
            <button class="history-image" onclick={open} aria-label={i18n::t("lightbox.label")}>
                <img src={item.image_url.clone()} alt={item.item_name.clone()} loading="lazy" />
            </button>
            <div class="history-body">
                <header class="history-head">
                    <h3 class="item-name">{ item.item_name.clone() }</h3>
                    <div class="item-cost">
                        <span class="meter-label">{ i18n::t("void.cost") }</span>
                        <span class="cost-value">{ cost_text }</span>
                    </div>
                </header>
                <p class="item-story">{ format!("「{}」", item.story) }</p>
                <dl class="history-stats">
                    <div>
                        <dt>{ i18n::t("void.killed") }</dt>
                        <dd class="years-value">{ years_text }</dd>
                    </div>
                    <div>
                        <dt>{ i18n::t("void.sanity_change") }</dt>
                        <dd class={sanity_class}>{ signed_pct(item.sanity_change) }</dd>
                    </div>
                </dl>
                {
                    if item.synergy_analysis.trim().is_empty() {
                        Html::default()
                    } else {
                        html! {
                            <details class="synergy">
                                <summary>{ i18n::t("void.synergy") }</summary>
                                <p>{ item.synergy_analysis.clone() }</p>
                            </details>
                        }
                    }
                }
            </div>
        </article>
    }
}
