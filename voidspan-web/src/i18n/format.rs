#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Whole number with locale grouping (Intl in the browser).
///
/// Values beyond `f64` precision are grouped exactly on the Rust side.
#[must_use]
pub fn fmt_int(value: i128) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        const EXACT: i128 = 1 << 53;
        if (-EXACT..=EXACT).contains(&value) {
            #[allow(clippy::cast_precision_loss)]
            let num = value as f64;
            return with_bundle(|bundle| {
                let locales = {
                    let arr = js_sys::Array::new();
                    arr.push(&JsValue::from_str(&bundle.lang));
                    arr
                };
                let nf = Intl::NumberFormat::new(&locales, &Object::new());
                let format_fn: Function = nf.format();
                format_fn
                    .call1(&nf, &JsValue::from_f64(num))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_else(|| voidspan_game::group_digits(value))
            });
        }
        voidspan_game::group_digits(value)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        voidspan_game::group_digits(value)
    }
}

/// Percentage with one decimal place.
#[must_use]
pub fn fmt_pct(pct: f64) -> String {
    format!("{:.1}", pct.clamp(0.0, 100.0))
}
