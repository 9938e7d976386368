//! Free-fly camera.
//!
//! The camera owns only position and direction. View and projection matrices are
//! rebuilt from that state every frame and never stored.
//!
//! Intended usage per frame:
//! - build `MoveControls` from the current `InputState`
//! - `FlyCamera::update(controls, dt)`
//! - upload `FlyCamera::view()` and `Projection::matrix(viewport)`

mod controls;
mod fly;
mod projection;

pub use controls::MoveControls;
pub use fly::FlyCamera;
pub use projection::Projection;
