use crate::app::phase::purchase_open;
use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::ui::api_key_panel::ApiKeyPanel;
use crate::components::ui::history_card::HistoryCard;
use crate::components::ui::loading_card::LoadingCard;
use crate::components::ui::purchase_form::PurchaseForm;
use crate::components::ui::stats_bar::{Props as StatsProps, StatsBar};
use crate::game::HistoryItem;
use crate::i18n::t;
use yew::prelude::*;

/// Anchor at the bottom of the feed, scrolled into view as entries arrive.
pub const FEED_END_ID: &str = "feed-end";

pub fn render_void(state: &AppState, handlers: &AppHandlers) -> Html {
    let game = &*state.game;
    let stats = StatsProps::from_state(game);
    let key_panel = if *state.show_key_panel || *state.key_rejected {
        html! {
            <ApiKeyPanel
                masked_key={(*state.key_mask).clone()}
                rejected={*state.key_rejected}
                on_save={handlers.save_key.clone()}
                on_clear={handlers.clear_key.clone()}
            />
        }
    } else {
        Html::default()
    };
    let form = if purchase_open(game, *state.ending_loading) {
        html! { <PurchaseForm on_purchase={handlers.purchase.clone()} disabled={*state.loading} /> }
    } else {
        Html::default()
    };

    html! {
        <section class="void-screen" data-testid="void-screen">
            <StatsBar ..stats />
            { key_panel }
            <HistoryFeed
                items={game.history.clone()}
                loading={*state.loading}
                ending_loading={*state.ending_loading}
                on_open_image={handlers.open_image.clone()}
            />
            <div class="purchase-dock">{ form }</div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FeedProps {
    pub items: Vec<HistoryItem>,
    pub loading: bool,
    pub ending_loading: bool,
    pub on_open_image: Callback<AttrValue>,
}

#[function_component(HistoryFeed)]
pub fn history_feed(p: &FeedProps) -> Html {
    use_effect_with((p.items.len(), p.loading), |_| {
        crate::dom::scroll_to(FEED_END_ID);
    });

    let busy = p.loading || p.ending_loading;
    let placeholder = if p.items.is_empty() && !busy {
        html! {
            <div class="void-empty">
                <div class="void-orb glow-text" aria-hidden="true">{ "?" }</div>
                <p>{ t("void.empty") }</p>
                <p class="muted debug-hint">{ t("debug.hint") }</p>
            </div>
        }
    } else {
        Html::default()
    };
    let loading = if p.ending_loading {
        html! { <LoadingCard message={AttrValue::from(t("ending.loading"))} /> }
    } else if p.loading {
        html! { <LoadingCard /> }
    } else {
        Html::default()
    };

    html! {
        <div class="history-feed" role="feed" aria-label={t("void.history")} aria-busy={busy.to_string()}>
            { placeholder }
            { for p.items.iter().enumerate().map(|(idx, item)| html! {
                <HistoryCard
                    key={item.id.clone()}
                    item={item.clone()}
                    index={idx + 1}
                    on_open_image={p.on_open_image.clone()}
                />
            }) }
            { loading }
            <div id={FEED_END_ID}></div>
        </div>
    }
}
