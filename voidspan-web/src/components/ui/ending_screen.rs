use crate::game::{EndingResult, GameStatus, HistoryItem};
use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub ending: EndingResult,
    pub status: GameStatus,
    pub history: Vec<HistoryItem>,
    pub on_restart: Callback<()>,
    pub on_open_image: Callback<AttrValue>,
}

#[must_use]
pub const fn status_key(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Completed => "ending.status.completed",
        GameStatus::LostSanity => "ending.status.lost_sanity",
        GameStatus::Bankrupt | GameStatus::Start | GameStatus::Playing => {
            "ending.status.bankrupt"
        }
    }
}

#[function_component(EndingScreen)]
pub fn ending_screen(p: &Props) -> Html {
    let victory = p.status.is_victory();
    let restart = {
        let cb = p.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let ending = &p.ending;
    let grade = ending.grade;

    html! {
        <div
            class={classes!("ending-overlay", if victory { "ending-victory" } else { "ending-defeat" })}
            role="dialog"
            aria-modal="true"
            aria-labelledby="ending-title"
            data-testid="ending-screen"
        >
            <div class="ending-inner">
                <div class="ending-hero">
                    <img src={ending.image_url.clone()} alt={ending.title.clone()} />
                    <div class={classes!("rank-badge", grade.tone())}>
                        { format!("{} {}", i18n::t("ending.rank").to_uppercase(), grade.as_str()) }
                    </div>
                    <p class="ending-status">{ i18n::t(status_key(p.status)) }</p>
                    <h2 id="ending-title" class="ending-title">{ ending.title.clone() }</h2>
                </div>
                <div class="ending-story">{ ending.story.clone() }</div>
                <section class="panel possessions" aria-labelledby="possessions-title">
                    <h4 id="possessions-title">{ i18n::t("ending.possessions") }</h4>
                    <ul class="possessions-strip">
                        { for p.history.iter().map(|item| possession(item, &p.on_open_image)) }
                    </ul>
                </section>
                <section class="ending-evaluation" aria-labelledby="evaluation-title">
                    <h4 id="evaluation-title">{ i18n::t("ending.evaluation") }</h4>
                    <p>{ ending.evaluation.clone() }</p>
                </section>
                <button id="restart-btn" class="retro-btn-primary" onclick={restart}>
                    { i18n::t("ending.restart") }
                </button>
            </div>
        </div>
    }
}

fn possession(item: &HistoryItem, on_open_image: &Callback<AttrValue>) -> Html {
    let open = {
        let cb = on_open_image.clone();
        let url = AttrValue::from(item.image_url.clone());
        Callback::from(move |_| cb.emit(url.clone()))
    };
    html! {
        <li key={item.id.clone()} class="possession">
            <button class="possession-thumb" onclick={open}>
                <img src={item.image_url.clone()} alt={item.item_name.clone()} loading="lazy" />
            </button>
            <span class="possession-name">{ item.item_name.clone() }</span>
        </li>
    }
}
