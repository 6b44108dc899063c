#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlSelectElement, KeyboardEvent, KeyboardEventInit};
use yew::Renderer;

use voidspan_web::app::App;
use voidspan_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    voidspan_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
}

async fn settle() {
    gloo::timers::future::TimeoutFuture::new(0).await;
}

fn press(key: &str, shift: bool) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    dom::document()
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    render_app().await;
    let doc = dom::document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    assert!(doc.get_element_by_id("void-status").is_some());
}

#[wasm_bindgen_test]
async fn language_select_updates_html_lang() {
    render_app().await;
    let doc = dom::document();
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("lang select")
        .dyn_into()
        .expect("cast to select");
    select.set_value("ja");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    settle().await;

    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("ja".into()));

    select.set_value("en");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    settle().await;
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
}

#[wasm_bindgen_test]
async fn choosing_a_difficulty_enters_the_void() {
    render_app().await;
    let doc = dom::document();
    let card: HtmlElement = doc
        .get_element_by_id("difficulty-easy")
        .expect("easy card")
        .dyn_into()
        .expect("cast to element");
    card.click();
    settle().await;

    assert!(doc.query_selector("[data-testid='void-screen']").expect("query").is_some());
    assert!(doc.get_element_by_id("purchase-input").is_some());
    assert!(doc.get_element_by_id("give-up-btn").is_some());

    let give_up: HtmlElement = doc
        .get_element_by_id("give-up-btn")
        .expect("give up")
        .dyn_into()
        .expect("cast to element");
    give_up.click();
    settle().await;
    assert!(doc.query_selector("[data-testid='start-screen']").expect("query").is_some());
}

#[wasm_bindgen_test]
async fn shift_d_toggles_debug_monitor() {
    render_app().await;
    let doc = dom::document();
    assert!(doc.query_selector("[data-testid='debug-panel']").expect("query").is_none());

    press("D", true);
    settle().await;
    assert!(doc.query_selector("[data-testid='debug-panel']").expect("query").is_some());

    press("D", true);
    settle().await;
    assert!(doc.query_selector("[data-testid='debug-panel']").expect("query").is_none());
}
