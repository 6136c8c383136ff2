//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use portfolio_fx::animator::initialize;
use portfolio_fx::cursor::HOVER_QUERY;
use portfolio_fx::reveal::STEP_MS;
use portfolio_fx::page::{animate_counters, attach_tilt, stagger_reveal, start_typewriter, track_cursor_glow, watch_scroll};
use portfolio_fx::{CancelToken, FieldConfig, FrameLoop};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlCanvasElement, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

// Appends `html` to the body inside a wrapper pinned to the top of the page,
// so offsets inside it do not depend on what other tests left behind. The
// caller removes it.
fn mount(html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_attribute("style", "position: absolute; top: 0; left: 0; width: 100%").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn by_id(id: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    document.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn initialize_sizes_canvas_and_seeds_field() {
    let window = web_sys::window().unwrap();
    let canvas = make_canvas();
    let mut handle = initialize(&window, canvas.clone(), 320.0, 240.0, FieldConfig::default()).unwrap();

    assert_eq!(canvas.width(), 320);
    assert_eq!(canvas.height(), 240);
    assert_eq!(handle.particle_count(), 80);
    assert!(handle.is_running());

    handle.resize(160.0, 120.0);
    assert_eq!(canvas.width(), 160);
    assert_eq!(canvas.height(), 120);
    assert_eq!(handle.particle_count(), 80);

    handle.stop();
    assert!(!handle.is_running());
    // stopping twice is harmless
    handle.stop();
}

#[wasm_bindgen_test]
fn cancelled_frame_loop_is_not_running() {
    let token = CancelToken::new();
    let frame_loop = FrameLoop::start(token.clone(), |_ts| true).unwrap();
    assert!(frame_loop.is_running());
    frame_loop.cancel();
    assert!(token.is_cancelled());
    assert!(!frame_loop.is_running());
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(portfolio_fx::start_particles("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn scrolling_marks_navbar_and_active_link() {
    let root = mount(
        r##"<section id="fx-hero" style="height: 1000px"></section>
        <section id="fx-about" style="height: 2000px"></section>
        <div id="fx-progress"></div>
        <nav id="fx-nav"><ul class="nav-links">
            <li><a href="#fx-hero">Home</a></li>
            <li><a href="#fx-about">About</a></li>
        </ul></nav>"##,
    );
    watch_scroll("fx-progress", "fx-nav").unwrap();

    let window = web_sys::window().unwrap();
    let about_top = by_id("fx-about").offset_top() as f64;
    window.scroll_to_with_x_and_y(0.0, about_top);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();

    assert!(by_id("fx-nav").class_list().contains("scrolled"));
    let links = root.query_selector_all(".nav-links a").unwrap();
    let hero_link: Element = links.item(0).unwrap().dyn_into().unwrap();
    let about_link: Element = links.item(1).unwrap().dyn_into().unwrap();
    assert!(!hero_link.class_list().contains("active"));
    assert!(about_link.class_list().contains("active"));
    assert!(by_id("fx-progress").style().get_property_value("width").unwrap().ends_with('%'));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert!(!by_id("fx-nav").class_list().contains("scrolled"));
    assert!(hero_link.class_list().contains("active"));
    assert!(!about_link.class_list().contains("active"));

    root.remove();
}

#[wasm_bindgen_test]
fn leaving_a_card_resets_tilt() {
    let root = mount(r#"<div id="fx-card" class="fx-card" style="width: 200px; height: 100px"></div>"#);
    attach_tilt(".fx-card").unwrap();

    let card = by_id("fx-card");
    card.style().set_property("transform", "rotateX(5deg)").unwrap();
    card.dispatch_event(&MouseEvent::new("mouseleave").unwrap()).unwrap();

    let style = card.style();
    assert_eq!(style.get_property_value("transform").unwrap(), "");
    let transition = style.get_property_value("transition").unwrap();
    assert!(transition.contains("transform"), "transition was {:?}", transition);
    assert!(transition.contains("0.5s"), "transition was {:?}", transition);

    root.remove();
}

#[wasm_bindgen_test]
fn counters_reset_to_zero_and_skip_non_numbers() {
    let root = mount(
        r#"<span id="fx-bad" class="fx-count" data-target="abc">n/a</span>
        <span id="fx-good" class="fx-count" data-target="12+">12+</span>
        <span id="fx-none" class="fx-count">?</span>"#,
    );
    animate_counters(".fx-count").unwrap();

    assert_eq!(by_id("fx-bad").text_content().unwrap(), "n/a");
    assert_eq!(by_id("fx-good").text_content().unwrap(), "0");
    assert_eq!(by_id("fx-none").text_content().unwrap(), "?");

    root.remove();
}

#[wasm_bindgen_test]
fn stagger_reveal_schedules_each_match() {
    let root = mount(
        r#"<div class="fx-fade"></div><div class="fx-fade"></div><div class="fx-fade"></div>
        <span id="fx-typed"></span>"#,
    );
    assert_eq!(stagger_reveal(".fx-fade", STEP_MS, None).unwrap(), 3);
    assert_eq!(stagger_reveal(".fx-nothing", STEP_MS, None).unwrap(), 0);
    assert_eq!(stagger_reveal(".fx-fade", STEP_MS, Some("fx-typed".to_string())).unwrap(), 3);
    assert!(stagger_reveal(".fx-fade", STEP_MS, Some("fx-missing".to_string())).is_err());
    root.remove();
}

#[wasm_bindgen_test]
fn typewriter_needs_its_element() {
    let root = mount(r#"<span id="fx-typing"></span>"#);
    assert!(start_typewriter("fx-typing", 0).is_ok());
    assert!(start_typewriter("fx-absent", 0).is_err());
    root.remove();
}

#[wasm_bindgen_test]
fn cursor_glow_follows_mouse_when_hover_is_available() {
    let root = mount(r#"<div id="fx-glow"></div>"#);
    let window = web_sys::window().unwrap();
    let can_hover = window
        .match_media(HOVER_QUERY)
        .unwrap()
        .map_or(false, |query| query.matches());

    assert_eq!(track_cursor_glow("fx-glow").unwrap(), can_hover);
    if can_hover {
        let init = MouseEventInit::new();
        init.set_client_x(120);
        init.set_client_y(45);
        let evt = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
        window.document().unwrap().dispatch_event(&evt).unwrap();

        let style = by_id("fx-glow").style();
        assert_eq!(style.get_property_value("left").unwrap(), "120px");
        assert_eq!(style.get_property_value("top").unwrap(), "45px");
    }
    root.remove();
}
