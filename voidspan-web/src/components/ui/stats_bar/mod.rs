mod helpers;
#[cfg(test)]
mod tests;

use crate::game::{GameState, SanityBand};
use crate::i18n;
use helpers::{meter, money_class, one_arg};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub remaining_time: u64,
    pub remaining_money: i64,
    pub sanity: i32,
    /// Percent of the span already gone.
    pub time_pct: f64,
    /// Percent of the starting budget left.
    pub money_pct: f64,
}

impl Props {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            remaining_time: state.remaining_time,
            remaining_money: state.remaining_money,
            sanity: state.sanity,
            time_pct: state.time_progress_pct(),
            money_pct: state.money_pct(),
        }
    }
}

#[function_component(StatsBar)]
pub fn stats_bar(p: &Props) -> Html {
    let years = i18n::fmt_int(i128::from(p.remaining_time));
    let money = i18n::fmt_int(i128::from(p.remaining_money));
    let band = SanityBand::from_sanity(p.sanity);
    let progress = one_arg("stats.progress", "pct", &i18n::fmt_pct(p.time_pct));

    html! {
        <section aria-label={i18n::t("stats.region")} class="panel stats-panel" role="region">
            { meter(
                "time",
                i18n::t("stats.time"),
                one_arg("stats.years", "years", &years),
                p.time_pct,
                classes!("meter-time"),
                Some(progress),
            ) }
            { meter(
                "money",
                i18n::t("stats.money"),
                one_arg("stats.yen", "money", &money),
                p.money_pct,
                classes!("meter-money", money_class(p.remaining_money)),
                None,
            ) }
            { meter(
                "sanity",
                i18n::t("stats.sanity"),
                format!("{}%", p.sanity),
                f64::from(p.sanity),
                classes!("meter-sanity", band.css_class()),
                None,
            ) }
        </section>
    }
}
