//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the demo window, wires the window to a `Gpu`,
//! and drives `core::App` once per redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
