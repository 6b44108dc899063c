use super::*;
use crate::game::Difficulty;
use futures::executor::block_on;
use yew::LocalServerRenderer;

#[test]
fn stats_bar_renders_core_fields() {
    crate::i18n::set_lang("en");
    let mut state = GameState::start(Difficulty::Easy);
    state.remaining_time = 250_000_000;
    state.remaining_money = 40_000_000;
    state.sanity = 35;

    let html = block_on(LocalServerRenderer::<StatsBar>::with_props(Props::from_state(&state)).render());
    assert!(html.contains("250,000,000 years"), "time left should render: {html}");
    assert!(html.contains("¥40,000,000"), "funds should render: {html}");
    assert!(html.contains("35%"), "sanity should render: {html}");
    assert!(html.contains("sanity-strained"), "sanity band class should apply: {html}");
    assert!(html.contains("50.0% elapsed"), "progress caption should render: {html}");
}

#[test]
fn stats_bar_flags_debt() {
    crate::i18n::set_lang("en");
    let mut state = GameState::start(Difficulty::Normal);
    state.remaining_money = -5_000;
    let html = block_on(LocalServerRenderer::<StatsBar>::with_props(Props::from_state(&state)).render());
    assert!(html.contains("money-negative"), "{html}");
    assert!(html.contains("width: 0.0%"), "negative funds pin the bar: {html}");
}

#[test]
fn bar_width_clamps() {
    assert_eq!(helpers::bar_width(150.0), "width: 100.0%");
    assert_eq!(helpers::bar_width(f64::NAN), "width: 0.0%");
    assert_eq!(helpers::bar_width(42.0), "width: 42.0%");
}
