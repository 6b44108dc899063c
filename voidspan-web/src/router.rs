use crate::app::Phase;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/void")]
    Void,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_phase(phase: &Phase) -> Self {
        match phase {
            Phase::Start => Self::Home,
            Phase::Void => Self::Void,
        }
    }

    #[must_use]
    pub const fn to_phase(&self) -> Option<Phase> {
        match self {
            Self::Home => Some(Phase::Start),
            Self::Void => Some(Phase::Void),
            // Preserve the current phase on 404 routes.
            Self::NotFound => None,
        }
    }
}
