#[cfg(any(target_arch = "wasm32", test))]
use crate::app::phase::Phase;
#[cfg(any(target_arch = "wasm32", test))]
use crate::game::GameStatus;
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_phase(phase: Phase, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_phase(&phase);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_phase_for_route(
    current_phase: Phase,
    status: GameStatus,
    route: Option<Route>,
) -> Option<Phase> {
    let new_phase = route.and_then(|route| route.to_phase())?;
    if new_phase == current_phase {
        return None;
    }

    is_route_transition_allowed(current_phase, new_phase, status).then_some(new_phase)
}

/// The URL may only follow the run, never drive it: `/void` needs a run in
/// progress and `/` needs the run to have been reset.
#[cfg(any(target_arch = "wasm32", test))]
const fn is_route_transition_allowed(current: Phase, next: Phase, status: GameStatus) -> bool {
    match (current, next) {
        (Phase::Start, Phase::Void) => !matches!(status, GameStatus::Start),
        (Phase::Void, Phase::Start) => matches!(status, GameStatus::Start),
        (Phase::Start, Phase::Start) | (Phase::Void, Phase::Void) => false,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_phase(
    phase: &UseStateHandle<Phase>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let phase = phase.clone();
    use_effect_with((phase, active_route), move |(phase, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_phase(**phase, current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_phase_with_route(
    phase: &UseStateHandle<Phase>,
    status: GameStatus,
    route: Option<Route>,
) {
    let phase = phase.clone();
    use_effect_with(route, move |route| {
        if let Some(new_phase) = next_phase_for_route(*phase, status, route.clone()) {
            phase.set(new_phase);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_for_phase_skips_when_unchanged() {
        let route = Route::from_phase(&Phase::Void);
        assert!(next_route_for_phase(Phase::Void, Some(&route)).is_none());
        assert_eq!(next_route_for_phase(Phase::Void, None), Some(Route::Void));
        assert_eq!(
            next_route_for_phase(Phase::Start, Some(&Route::Void)),
            Some(Route::Home)
        );
    }

    #[test]
    fn next_phase_for_route_ignores_unknown_and_same_routes() {
        assert!(next_phase_for_route(Phase::Start, GameStatus::Start, None).is_none());
        assert!(
            next_phase_for_route(Phase::Start, GameStatus::Start, Some(Route::NotFound)).is_none()
        );
        assert!(
            next_phase_for_route(Phase::Void, GameStatus::Playing, Some(Route::Void)).is_none()
        );
    }

    #[test]
    fn deep_link_to_void_needs_a_run() {
        assert!(
            next_phase_for_route(Phase::Start, GameStatus::Start, Some(Route::Void)).is_none()
        );
        assert_eq!(
            next_phase_for_route(Phase::Start, GameStatus::Playing, Some(Route::Void)),
            Some(Phase::Void)
        );
    }

    #[test]
    fn back_navigation_cannot_abandon_a_run() {
        assert!(!is_route_transition_allowed(
            Phase::Void,
            Phase::Start,
            GameStatus::Playing
        ));
        assert!(!is_route_transition_allowed(
            Phase::Void,
            Phase::Start,
            GameStatus::Completed
        ));
        assert!(is_route_transition_allowed(
            Phase::Void,
            Phase::Start,
            GameStatus::Start
        ));
        assert!(!is_route_transition_allowed(
            Phase::Void,
            Phase::Void,
            GameStatus::Playing
        ));
    }
}
