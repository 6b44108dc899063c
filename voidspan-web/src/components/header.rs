use crate::game::Difficulty;
use crate::i18n::{locales, t, tr};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
    /// Shown only while a run is in progress.
    #[prop_or_default]
    pub on_give_up: Option<Callback<()>>,
    /// Opens or closes the key panel during a run.
    #[prop_or_default]
    pub on_toggle_key: Option<Callback<()>>,
    #[prop_or_default]
    pub difficulty: Option<Difficulty>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let mode_label = p.difficulty.map(|difficulty| {
        let mut vars = BTreeMap::new();
        vars.insert("difficulty", difficulty.label());
        tr("void.mode", Some(&vars))
    });
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-title">
                    <h1 class="glow-text">{ t("app.title") }</h1>
                    {
                        mode_label.map_or_else(Html::default, |label| html! {
                            <p class="mode-label">{ label }</p>
                        })
                    }
                </div>
                <nav aria-label={t("nav.language")} class="header-left">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </nav>
                <div class="header-right">
                    {
                        p.on_toggle_key.clone().map_or_else(Html::default, |cb| html! {
                            <button
                                id="key-toggle-btn"
                                class="retro-btn-secondary"
                                aria-controls="key-panel-title"
                                onclick={Callback::from(move |_| cb.emit(()))}
                            >
                                { format!("🔑 {}", t("key.title")) }
                            </button>
                        })
                    }
                    {
                        p.on_give_up.clone().map_or_else(Html::default, |cb| html! {
                            <button id="give-up-btn" class="give-up-btn" onclick={Callback::from(move |_| cb.emit(()))}>
                                { t("void.give_up") }
                            </button>
                        })
                    }
                </div>
            </div>
        </header>
    }
}
