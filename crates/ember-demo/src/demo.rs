use ember_engine::camera::{FlyCamera, MoveControls, Projection};
use ember_engine::coords::Viewport;
use ember_engine::core::{App, AppControl, FrameCtx};
use ember_engine::input::{InputFrame, InputState, Key};
use ember_engine::math::{Mat4, Vec4};
use ember_engine::render::TriangleRenderer;

const CLEAR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Matrices for one frame, rebuilt from camera state every time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameMatrices {
    pub view: Mat4,
    pub projection: Mat4,
}

/// All demo state, owned by the runtime and passed to callbacks by reference.
pub struct TriangleDemo {
    pub camera: FlyCamera,
    pub projection: Projection,
    renderer: TriangleRenderer,
}

impl TriangleDemo {
    pub fn new(camera: FlyCamera, projection: Projection) -> Self {
        Self {
            camera,
            projection,
            renderer: TriangleRenderer::new(),
        }
    }

    /// Applies one frame of input and returns the matrices to draw with.
    ///
    /// `None` when the viewport cannot be projected (minimized window); the camera
    /// still moves.
    pub fn step(
        &mut self,
        input: &InputState,
        dt: f32,
        viewport: Viewport,
    ) -> Option<FrameMatrices> {
        let controls = MoveControls::from_input(input);
        self.camera.update(controls, dt);

        if controls.any() {
            log::trace!("camera at {:?}", self.camera.position);
        }

        let projection = self.projection.matrix(viewport)?;
        Some(FrameMatrices {
            view: self.camera.view(),
            projection,
        })
    }

    fn wants_exit(frame: &InputFrame) -> bool {
        frame.key_pressed(Key::Escape)
    }
}

impl Default for TriangleDemo {
    fn default() -> Self {
        Self::new(FlyCamera::default(), Projection::default())
    }
}

impl App for TriangleDemo {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if Self::wants_exit(ctx.input_frame) {
            log::info!("escape pressed; exiting");
            return AppControl::Exit;
        }

        let Some(m) = self.step(ctx.input, ctx.time.dt, ctx.viewport()) else {
            return AppControl::Continue;
        };

        let renderer = &mut self.renderer;
        ctx.render(CLEAR, |rctx, target| {
            renderer.render(rctx, target, m.view, m.projection);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_engine::input::{InputEvent, KeyState};
    use ember_engine::math::{look_at, Vec3};

    fn hold(input: &mut InputState, key: Key) {
        let mut frame = InputFrame::default();
        input.apply_event(&mut frame, InputEvent::Key { key, state: KeyState::Pressed });
    }

    #[test]
    fn idle_frame_uses_initial_camera() {
        let mut demo = TriangleDemo::default();
        let viewport = Viewport::new(800.0, 600.0);
        let m = demo.step(&InputState::default(), 0.016, viewport).unwrap();
        assert_eq!(m.view, Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0)));
        assert_eq!(m.projection, Projection::default().matrix(viewport).unwrap());
    }

    #[test]
    fn held_key_moves_camera_and_view() {
        let mut demo = TriangleDemo::default();
        let mut input = InputState::default();
        hold(&mut input, Key::Space);

        let m = demo.step(&input, 0.2, Viewport::new(800.0, 600.0)).unwrap();
        let pos = demo.camera.position;
        assert!(pos.y > 0.0);
        assert_eq!(m.view, look_at(pos, pos + demo.camera.direction, Vec3::Y));
    }

    #[test]
    fn minimized_window_skips_matrices_but_keeps_moving() {
        let mut demo = TriangleDemo::default();
        let mut input = InputState::default();
        hold(&mut input, Key::W);

        assert!(demo.step(&input, 0.2, Viewport::new(0.0, 0.0)).is_none());
        assert!(demo.camera.position.z < 1.0);
    }

    #[test]
    fn escape_requests_exit() {
        let mut input = InputState::default();
        let mut frame = InputFrame::default();
        let escape = InputEvent::Key { key: Key::Escape, state: KeyState::Pressed };
        input.apply_event(&mut frame, escape);
        assert!(TriangleDemo::wants_exit(&frame));
        assert!(!TriangleDemo::wants_exit(&InputFrame::default()));
    }
}
