//! Surface-space types shared by the runtime, camera and renderers.

mod viewport;

pub use viewport::Viewport;
