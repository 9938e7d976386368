use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::math::Vec4;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,

    pub(crate) window: &'a Window,
    pub(crate) gpu: &'a mut Gpu<'w>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Drawable size of the window's surface.
    pub fn viewport(&self) -> Viewport {
        self.gpu.viewport()
    }

    /// Clears the surface to `clear` (RGBA), calls `draw`, then presents.
    ///
    /// Surface errors are handled here: the frame is skipped, or `Exit` is returned
    /// when the surface cannot recover.
    pub fn render<F>(&mut self, clear: Vec4, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        if !self.gpu.viewport().is_valid() {
            // Minimized; nothing to present.
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        {
            let mut target = RenderTarget::new(&mut frame);
            drop(target.color_pass("ember clear", wgpu::LoadOp::Clear(to_wgpu_color(clear))));

            let rctx = RenderCtx::from_gpu(self.gpu);
            draw(&rctx, &mut target);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

fn to_wgpu_color(c: Vec4) -> wgpu::Color {
    wgpu::Color {
        r: c.r() as f64,
        g: c.g() as f64,
        b: c.b() as f64,
        a: c.a() as f64,
    }
}
