use crate::i18n;
use std::collections::BTreeMap;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Where players can create a Gemini key.
pub const AI_STUDIO_URL: &str = "https://aistudio.google.com/apikey";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Masked stored key; `None` shows the entry form.
    #[prop_or_default]
    pub masked_key: Option<String>,
    #[prop_or_default]
    pub rejected: bool,
    pub on_save: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(ApiKeyPanel)]
pub fn api_key_panel(p: &Props) -> Html {
    let draft = use_state(String::new);
    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let on_submit = {
        let draft = draft.clone();
        let on_save = p.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !draft.trim().is_empty() {
                on_save.emit((*draft).clone());
                draft.set(String::new());
            }
        })
    };
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };

    // A rejected key is still stored but must be replaced before the next call.
    let body = match (&p.masked_key, p.rejected) {
        (Some(masked), false) => {
            let mut vars = BTreeMap::new();
            vars.insert("masked", masked.as_str());
            html! {
                <div class="key-set">
                    <p class="key-status key-ok">{ i18n::tr("key.current", Some(&vars)) }</p>
                    <button id="clear-key-btn" class="retro-btn-secondary" onclick={on_clear}>
                        { i18n::t("key.clear") }
                    </button>
                </div>
            }
        }
        _ => html! {
            <form class="key-form" onsubmit={on_submit}>
                {
                    match (p.masked_key.is_some(), p.rejected) {
                        (true, _) => html! { <p class="key-status key-error" role="alert">{ i18n::t("key.rejected") }</p> },
                        // A call was attempted with no key at all.
                        (false, true) => html! { <p class="key-status key-error" role="alert">{ i18n::t("key.missing") }</p> },
                        (false, false) => html! { <p class="key-status muted">{ i18n::t("key.missing") }</p> },
                    }
                }
                <label for="api-key-input" class="sr-only">{ i18n::t("key.title") }</label>
                <input
                    id="api-key-input"
                    type="password"
                    autocomplete="off"
                    placeholder={i18n::t("key.placeholder")}
                    value={(*draft).clone()}
                    oninput={on_input}
                />
                <button id="save-key-btn" type="submit" class="retro-btn-primary" disabled={draft.trim().is_empty()}>
                    { i18n::t("key.save") }
                </button>
            </form>
        },
    };

    html! {
        <section class="panel key-panel" aria-labelledby="key-panel-title">
            <h3 id="key-panel-title">{ i18n::t("key.title") }</h3>
            { body }
            <p class="muted key-hint">
                { i18n::t("key.hint") }
                <br />
                <a href={AI_STUDIO_URL} target="_blank" rel="noopener noreferrer">{ i18n::t("key.get_key") }</a>
            </p>
        </section>
    }
}
