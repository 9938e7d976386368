//! Contracts between the runtime (platform loop) and applications.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
