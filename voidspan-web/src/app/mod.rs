#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod phase;
pub mod routing;
pub mod shortcuts;
pub mod state;
pub mod view;

pub use phase::Phase;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    shortcuts::use_shortcuts(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>();

    routing::use_sync_route_with_phase(&app_state.phase, navigator.clone(), route.clone());
    routing::use_sync_phase_with_route(&app_state.phase, app_state.game.status, route.clone());

    view::render_app(&app_state, route.as_ref(), navigator)
}

#[cfg(test)]
mod tests {
    use super::Phase;
    use crate::router::Route;

    #[test]
    fn route_phase_mappings_cover_all_states() {
        for phase in [Phase::Start, Phase::Void] {
            let route = Route::from_phase(&phase);
            assert_eq!(route.to_phase(), Some(phase));
        }
        assert_eq!(Route::NotFound.to_phase(), None);
    }
}
