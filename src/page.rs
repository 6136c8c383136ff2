// DOM wiring for the page effects that sit next to the particle canvas.
// Each entry point installs its listeners or timers and returns; the
// effects then live as long as the page does.

use crate::counter::{self, Counter};
use crate::cursor;
use crate::reveal;
use crate::scroll;
use crate::tilt::Tilt;
use crate::typewriter::Typewriter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, MouseEvent, Window};

type TimeoutCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Reveals every element matching `selector` one after another, `step_ms`
/// apart, by adding the `visible` class. When `then_typewriter_id` is given
/// the typing effect starts in that element shortly after. Returns how many
/// elements were scheduled.
#[wasm_bindgen]
pub fn stagger_reveal(selector: &str, step_ms: i32, then_typewriter_id: Option<String>) -> Result<u32, JsValue> {
    let window = window()?;
    let elements = query_all(&document(&window)?, selector)?;
    let delays = reveal::stagger_delays(elements.len(), step_ms);
    for (element, delay) in elements.iter().zip(delays) {
        let el = element.clone();
        let show = Closure::once_into_js(move || report(el.class_list().add_1("visible")));
        window.set_timeout_with_callback_and_timeout_and_arguments_0(show.unchecked_ref::<js_sys::Function>(), delay)?;
    }
    if let Some(id) = then_typewriter_id {
        start_typewriter(&id, reveal::TYPEWRITER_AFTER_MS)?;
    }
    Ok(elements.len() as u32)
}

/// Makes the element with id `glow_id` follow the pointer. Does nothing on
/// devices without hover; returns whether the listener was installed.
#[wasm_bindgen]
pub fn track_cursor_glow(glow_id: &str) -> Result<bool, JsValue> {
    let window = window()?;
    let can_hover = window
        .match_media(cursor::HOVER_QUERY)?
        .map_or(false, |query| query.matches());
    if !can_hover {
        return Ok(false);
    }
    let document = document(&window)?;
    let glow: HtmlElement = document
        .get_element_by_id(glow_id)
        .ok_or_else(|| JsValue::from_str(&format!("element not found: {}", glow_id)))?
        .dyn_into()?;

    let on_move = Closure::wrap(Box::new(move |evt: MouseEvent| {
        report(move_glow(&glow, evt.client_x(), evt.client_y()));
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(true)
}

fn move_glow(glow: &HtmlElement, client_x: i32, client_y: i32) -> Result<(), JsValue> {
    let (left, top) = cursor::glow_position(client_x, client_y);
    let style = glow.style();
    style.set_property("left", &left)?;
    style.set_property("top", &top)
}

/// Starts the typing effect in the element with id `element_id` after
/// `start_delay_ms`.
#[wasm_bindgen]
pub fn start_typewriter(element_id: &str, start_delay_ms: i32) -> Result<(), JsValue> {
    let window = window()?;
    let element = document(&window)?
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("element not found: {}", element_id)))?;

    let mut typewriter = Typewriter::default();
    let f: TimeoutCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let delay_ms = type_step(&element, &mut typewriter);
        if let (Some(w), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
            report(w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), start_delay_ms)?;
    }
    Ok(())
}

// Shows the next typewriter frame, returns the delay until the one after.
fn type_step(element: &Element, typewriter: &mut Typewriter) -> i32 {
    let frame = typewriter.tick();
    element.set_text_content(Some(&frame.text));
    frame.delay_ms as i32
}

/// Counts every element matching `selector` up from 0 to its `data-target`.
#[wasm_bindgen]
pub fn animate_counters(selector: &str) -> Result<(), JsValue> {
    let window = window()?;
    for element in query_all(&document(&window)?, selector)? {
        let target = match element.get_attribute("data-target").as_deref().and_then(counter::parse_target) {
            Some(target) => target,
            None => {
                log!("counter without a numeric data-target skipped");
                continue;
            }
        };
        element.set_text_content(Some("0"));

        let mut counter = Counter::new(target);
        let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_interval = interval.clone();
        let tick = Closure::wrap(Box::new(move || {
            let (value, done) = counter.tick();
            element.set_text_content(Some(&value.to_string()));
            if done {
                if let (Some(w), Some(id)) = (web_sys::window(), tick_interval.take()) {
                    w.clear_interval_with_handle(id);
                }
            }
        }) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            Counter::INTERVAL_MS,
        )?;
        interval.set(Some(id));
        tick.forget();
    }
    Ok(())
}

/// Keeps the progress bar, the navbar style and the active nav link in
/// step with the scroll position.
#[wasm_bindgen]
pub fn watch_scroll(progress_id: &str, navbar_id: &str) -> Result<(), JsValue> {
    let window = window()?;
    let document = document(&window)?;
    let progress: HtmlElement = document
        .get_element_by_id(progress_id)
        .ok_or_else(|| JsValue::from_str(&format!("element not found: {}", progress_id)))?
        .dyn_into()?;
    let navbar = document
        .get_element_by_id(navbar_id)
        .ok_or_else(|| JsValue::from_str(&format!("element not found: {}", navbar_id)))?;
    let sections = query_all(&document, "section[id]")?;
    let links = query_all(&document, ".nav-links a")?;

    let on_scroll = Closure::wrap(Box::new(move || {
        report(update_scroll_state(&progress, &navbar, &sections, &links));
    }) as Box<dyn FnMut()>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    )?;
    on_scroll.forget();
    Ok(())
}

fn update_scroll_state(
    progress: &HtmlElement,
    navbar: &Element,
    sections: &[HtmlElement],
    links: &[HtmlElement],
) -> Result<(), JsValue> {
    let window = window()?;
    let scroll_y = window.scroll_y()?;
    let scroll_height = document(&window)?
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);

    let pct = scroll::scroll_progress(scroll_y, scroll_height, viewport_height);
    progress.style().set_property("width", &format!("{}%", pct))?;
    navbar.class_list().toggle_with_force("scrolled", scroll::navbar_scrolled(scroll_y))?;

    let ids: Vec<String> = sections.iter().map(|s| s.id()).collect();
    let tops = sections.iter().map(|s| s.offset_top() as f64);
    let current = scroll::active_section(scroll_y, ids.iter().map(String::as_str).zip(tops)).unwrap_or("");
    let href = format!("#{}", current);
    for link in links {
        let active = link.get_attribute("href").map_or(false, |h| h == href);
        link.class_list().toggle_with_force("active", active)?;
    }
    Ok(())
}

/// Tilts every element matching `selector` towards the pointer while it
/// hovers, easing back flat when it leaves.
#[wasm_bindgen]
pub fn attach_tilt(selector: &str) -> Result<(), JsValue> {
    let window = window()?;
    for card in query_all(&document(&window)?, selector)? {
        let move_card = card.clone();
        let on_move = Closure::wrap(Box::new(move |evt: MouseEvent| {
            let rect = move_card.get_bounding_client_rect();
            let x = evt.client_x() as f64 - rect.left();
            let y = evt.client_y() as f64 - rect.top();
            let tilt = Tilt::at(x, y, rect.width(), rect.height());
            report(move_card.style().set_property("transform", &tilt.css_transform()));
        }) as Box<dyn FnMut(MouseEvent)>);
        card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let leave_card = card.clone();
        let on_leave = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            report(settle_tilt(&leave_card));
        }) as Box<dyn FnMut(MouseEvent)>);
        card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(())
}

// Drops the tilt with an eased transition, removing the transition again
// once it has played.
fn settle_tilt(card: &HtmlElement) -> Result<(), JsValue> {
    let style = card.style();
    style.set_property("transform", "")?;
    style.set_property("transition", "transform 0.5s ease")?;
    let settled = card.clone();
    let clear = Closure::once_into_js(move || report(settled.style().set_property("transition", "")));
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(clear.unchecked_ref::<js_sys::Function>(), 500)?;
    Ok(())
}

// Failures inside event and timer callbacks have nowhere to propagate to.
fn report<T>(result: Result<T, JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn document(window: &Window) -> Result<Document, JsValue> {
    window.document().ok_or_else(|| JsValue::from_str("no document"))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
            elements.push(el);
        }
    }
    Ok(elements)
}
