// Repeating requestAnimationFrame task with an explicit cancellation token.
// The callback re-arms itself only while the token is live and the frame
// body asks to continue.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Shared stop flag. Clones observe the same flag; cancelling is permanent.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameLoop {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Schedules `on_frame` for the next display refresh and keeps
    /// rescheduling it until `token` is cancelled or `on_frame` returns false.
    /// `on_frame` receives the rAF timestamp in milliseconds.
    pub fn start<F>(token: CancelToken, mut on_frame: F) -> Result<FrameLoop, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();

        let loop_token = token.clone();
        let loop_pending = pending.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            loop_pending.set(None);
            if loop_token.is_cancelled() || !on_frame(ts) {
                return;
            }
            if let (Some(w), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
                loop_pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match g.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Err(JsValue::from_str("frame callback missing")),
        };
        pending.set(Some(first));

        Ok(FrameLoop {
            token,
            pending,
            callback: g,
        })
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && self.pending.get().is_some()
    }

    /// Stops the loop and releases the callback. Must be called from outside
    /// the frame callback itself.
    pub fn cancel(&self) {
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web_sys::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> Rc -> closure cycle
        self.callback.borrow_mut().take();
    }
}
