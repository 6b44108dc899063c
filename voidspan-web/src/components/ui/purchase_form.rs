use crate::i18n;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_purchase: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(PurchaseForm)]
pub fn purchase_form(p: &Props) -> Html {
    let input = use_state(String::new);
    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };
    let on_submit = {
        let input = input.clone();
        let on_purchase = p.on_purchase.clone();
        let disabled = p.disabled;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let item = input.trim().to_string();
            if disabled || item.is_empty() {
                return;
            }
            input.set(String::new());
            on_purchase.emit(item);
        })
    };

    html! {
        <form class="purchase-form" onsubmit={on_submit} data-testid="purchase-form">
            <label for="purchase-input" class="sr-only">{ i18n::t("void.purchase_label") }</label>
            <input
                id="purchase-input"
                type="text"
                autocomplete="off"
                placeholder={i18n::t("void.placeholder")}
                value={(*input).clone()}
                oninput={on_input}
                disabled={p.disabled}
            />
            <button id="purchase-btn" type="submit" class="retro-btn-primary" disabled={p.disabled || input.trim().is_empty()}>
                { i18n::t("void.buy") }
            </button>
        </form>
    }
}
