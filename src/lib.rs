//! Interactive effects for a portfolio page, compiled to WebAssembly.
//!
//! The centrepiece is the particle background ([`start_particles`]): a fixed
//! population of drifting points bouncing around the viewport, joined by
//! faint lines when they come close. The remaining exports drive the smaller
//! page effects (hero reveal, cursor glow, typing text, stat counters,
//! scroll state, card tilt).

#[macro_use]
mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod counter;
pub mod cursor;
pub mod field;
pub mod frame_loop;
pub mod page;
pub mod particle;
pub mod reveal;
pub mod scroll;
pub mod surface;
pub mod tilt;
pub mod typewriter;

use wasm_bindgen::prelude::*;

pub use animator::{start_particles, Animator, AnimatorHandle};
pub use color::Color;
pub use config::FieldConfig;
pub use field::{Connection, ParticleField};
pub use frame_loop::{CancelToken, FrameLoop};
pub use particle::Particle;
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    utils::set_panic_hook();
}
