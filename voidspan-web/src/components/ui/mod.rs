pub mod api_key_panel;
pub mod debug_panel;
pub mod difficulty_select;
pub mod ending_screen;
pub mod history_card;
pub mod image_lightbox;
pub mod loading_card;
pub mod purchase_form;
pub mod stats_bar;
