use crate::app::phase::Phase;
use crate::game::GameState;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub game: UseStateHandle<GameState>,
    /// A purchase is being judged.
    pub loading: UseStateHandle<bool>,
    /// The run is over and its ending is being written.
    pub ending_loading: UseStateHandle<bool>,
    /// Masked form of the stored key; `None` when no key is saved.
    pub key_mask: UseStateHandle<Option<String>>,
    pub key_rejected: UseStateHandle<bool>,
    pub show_key_panel: UseStateHandle<bool>,
    pub selected_image: UseStateHandle<Option<AttrValue>>,
    pub show_debug: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
    /// Bumped on every start and reset so late replies from an abandoned run are dropped.
    pub run_id: Rc<RefCell<u64>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_state(|| Phase::Start),
        game: use_state(GameState::default),
        loading: use_state(|| false),
        ending_loading: use_state(|| false),
        key_mask: use_state(initial_key_mask),
        key_rejected: use_state(|| false),
        show_key_panel: use_state(|| false),
        selected_image: use_state(|| None::<AttrValue>),
        show_debug: use_state(|| false),
        current_language: use_state(crate::i18n::current_lang),
        run_id: use_mut_ref(|| 0_u64),
    }
}

impl AppState {
    /// Advance the run generation and return the new id.
    pub fn next_run(&self) -> u64 {
        let mut id = self.run_id.borrow_mut();
        *id += 1;
        *id
    }

    #[must_use]
    pub fn is_current_run(&self, id: u64) -> bool {
        *self.run_id.borrow() == id
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        self.key_mask.is_some() && !*self.key_rejected
    }
}

#[cfg(target_arch = "wasm32")]
fn initial_key_mask() -> Option<String> {
    crate::game::stored_key_mask()
}

#[cfg(not(target_arch = "wasm32"))]
const fn initial_key_mask() -> Option<String> {
    None
}
