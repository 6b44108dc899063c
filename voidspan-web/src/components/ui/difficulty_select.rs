use crate::game::Difficulty;
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_select: Callback<Difficulty>,
}

/// One card per difficulty: label, starting funds and a short description.
#[function_component(DifficultySelect)]
pub fn difficulty_select(p: &Props) -> Html {
    html! {
        <section class="difficulty-grid" aria-labelledby="difficulty-title">
            <h2 id="difficulty-title" class="sr-only">{ i18n::t("start.choose") }</h2>
            { for Difficulty::ALL.iter().map(|difficulty| difficulty_card(*difficulty, &p.on_select)) }
        </section>
    }
}

fn difficulty_card(difficulty: Difficulty, on_select: &Callback<Difficulty>) -> Html {
    let key = difficulty.key();
    let money = i18n::fmt_int(i128::from(difficulty.starting_money()));
    let mut vars = BTreeMap::new();
    vars.insert("money", money.as_str());
    let onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_| on_select.emit(difficulty))
    };
    html! {
        <button
            id={format!("difficulty-{key}")}
            class={classes!("difficulty-card", format!("difficulty-{key}"))}
            data-testid={format!("difficulty-{key}")}
            {onclick}
        >
            <div class="difficulty-label pixel-font">{ i18n::t(&format!("difficulty.{key}.label")) }</div>
            <div class="difficulty-money">{ i18n::tr("start.starting_money", Some(&vars)) }</div>
            <p class="muted">{ i18n::t(&format!("difficulty.{key}.desc")) }</p>
        </button>
    }
}
