//! Ember engine crate.
//!
//! A small 3D math core (`math`), a free-fly camera built on it (`camera`), and
//! the platform + GPU runtime that draws with it.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod math;
pub mod camera;
pub mod render;
