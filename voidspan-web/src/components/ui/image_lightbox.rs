use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub src: AttrValue,
    pub on_close: Callback<()>,
}

/// Full-screen view of a generated image; any click closes it.
#[function_component(ImageLightbox)]
pub fn image_lightbox(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="lightbox" role="dialog" aria-modal="true" aria-label={i18n::t("lightbox.label")} onclick={close}>
            <img src={p.src.clone()} alt={i18n::t("lightbox.label")} />
        </div>
    }
}
