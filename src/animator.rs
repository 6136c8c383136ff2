// Animator ties a particle field to a drawing surface and a cancellation
// token; AnimatorHandle is what JS holds on to once the canvas is running.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::frame_loop::{CancelToken, FrameLoop};
use crate::surface::Surface;
use crate::utils::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, Window};

pub struct Animator<S: Surface> {
    field: ParticleField,
    surface: S,
    token: CancelToken,
}

impl<S: Surface> Animator<S> {
    pub fn new(field: ParticleField, surface: S) -> Animator<S> {
        Animator {
            field,
            surface,
            token: CancelToken::new(),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Runs one frame. Returns false, without touching the field or the
    /// surface, once the animator has been stopped.
    pub fn frame(&mut self) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        self.field.frame(&mut self.surface);
        true
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[wasm_bindgen]
pub struct AnimatorHandle {
    canvas: HtmlCanvasElement,
    animator: Rc<RefCell<Animator<CanvasRenderingContext2d>>>,
    frame_loop: FrameLoop,
    on_resize: Option<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl AnimatorHandle {
    /// Resizes the canvas and the field bounds. Particles are left where
    /// they are.
    pub fn resize(&self, width: f64, height: f64) {
        resize_to(&self.canvas, &self.animator, width, height);
    }

    pub fn stop(&mut self) {
        self.animator.borrow().stop();
        self.frame_loop.cancel();
        if let Some(listener) = self.on_resize.take() {
            if let Some(w) = web_sys::window() {
                let _ = w.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.animator.borrow().field().len()
    }
}

impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fills the viewport with the default particle field on the canvas with id
/// `canvas_id` and starts animating it.
#[wasm_bindgen]
pub fn start_particles(canvas_id: &str) -> Result<AnimatorHandle, JsValue> {
    start_with(canvas_id, FieldConfig::default())
}

/// Same as `start_particles`, with a JSON object overriding any subset of
/// the field settings.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_particles_with_config(canvas_id: &str, config_json: &str) -> Result<AnimatorHandle, JsValue> {
    let config = FieldConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start_with(canvas_id, config)
}

fn start_with(canvas_id: &str, config: FieldConfig) -> Result<AnimatorHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas not found: {}", canvas_id)))?
        .dyn_into()?;
    let (width, height) = viewport_size(&window)?;
    initialize(&window, canvas, width, height, config)
}

/// Sizes `canvas` to `width` x `height`, seeds the field and starts the
/// frame loop and the window resize listener.
pub fn initialize(
    window: &Window,
    canvas: HtmlCanvasElement,
    width: f64,
    height: f64,
    config: FieldConfig,
) -> Result<AnimatorHandle, JsValue> {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let profile = config.profile;
    let mut rng = rand::thread_rng();
    let field = ParticleField::new(width, height, config, &mut rng);
    log!("particle field: {} particles on {}x{}", field.len(), width, height);

    let animator = Rc::new(RefCell::new(Animator::new(field, ctx)));
    let token = animator.borrow().token();

    let frame_animator = animator.clone();
    let frame_loop = FrameLoop::start(token, move |_ts: f64| {
        let _timer = if profile {
            Some(Timer::new("ParticleField::frame"))
        } else {
            None
        };
        frame_animator.borrow_mut().frame()
    })?;

    let resize_canvas = canvas.clone();
    let resize_animator = animator.clone();
    let on_resize = Closure::wrap(Box::new(move |_evt: Event| {
        if let Some(w) = web_sys::window() {
            if let Ok((width, height)) = viewport_size(&w) {
                resize_to(&resize_canvas, &resize_animator, width, height);
            }
        }
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    Ok(AnimatorHandle {
        canvas,
        animator,
        frame_loop,
        on_resize: Some(on_resize),
    })
}

fn resize_to(
    canvas: &HtmlCanvasElement,
    animator: &Rc<RefCell<Animator<CanvasRenderingContext2d>>>,
    width: f64,
    height: f64,
) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    animator.borrow_mut().resize(width, height);
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}
