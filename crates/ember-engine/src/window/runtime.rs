use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, InputFrame, InputState, Key, KeyState};
use crate::time::FrameClock;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Triangle!".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point: opens one window and redraws it until it closes or the app exits.
pub struct Runtime;

impl Runtime {
    /// Blocks on the winit event loop.
    ///
    /// Window or GPU setup failures stop the loop and are returned here.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        // The camera moves every frame, so redraw continuously.
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut host = Host {
            config,
            gpu_init,
            app,
            view: None,
            failure: None,
        };

        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        match host.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// The window, the surface borrowing it, and the input/timing fed to each frame.
#[self_referencing]
struct View {
    input: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Host<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    /// `None` until the platform resumes us, and again once closed.
    view: Option<View>,
    failure: Option<anyhow::Error>,
}

impl<A> Host<A>
where
    A: App + 'static,
{
    fn open(&self, event_loop: &ActiveEventLoop) -> Result<View> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let view = ViewTryBuilder {
            input: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        log::info!("opened window {:?}", self.config.title);
        Ok(view)
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        // Dropping the view releases the surface before the window.
        if self.view.take().is_some() {
            log::info!("window closed");
        }
        event_loop.exit();
    }

    /// Runs one app frame; returns what the app asked for.
    fn frame(&mut self) -> AppControl {
        let Some(view) = self.view.as_mut() else {
            return AppControl::Continue;
        };
        let app = &mut self.app;

        view.with_mut(|fields| {
            let time = fields.clock.tick();

            let control = {
                let mut ctx = FrameCtx {
                    input: fields.input,
                    input_frame: fields.input_frame,
                    time,
                    window: fields.window,
                    gpu: fields.gpu,
                };
                app.on_frame(&mut ctx)
            };

            // Presses are consumed by exactly one frame.
            fields.input_frame.clear();
            control
        })
    }
}

impl<A> ApplicationHandler for Host<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.view.is_some() {
            return;
        }

        match self.open(event_loop) {
            Ok(view) => {
                view.with_window(|w| w.request_redraw());
                self.view = Some(view);
            }
            Err(err) => {
                log::error!("{err:#}");
                self.failure = Some(err);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(view) = &self.view {
            view.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(view) = self.view.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => self.close(event_loop),

            WindowEvent::Resized(size) => {
                log::debug!("resized to {}x{}", size.width, size.height);
                view.with_gpu_mut(|gpu| gpu.resize(size));
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = view.with_window(|w| w.inner_size());
                view.with_gpu_mut(|gpu| gpu.resize(size));
            }

            WindowEvent::RedrawRequested => {
                if self.frame() == AppControl::Exit {
                    self.close(event_loop);
                }
            }

            other => {
                if let Some(ev) = translate_input_event(&other) {
                    view.with_mut(|fields| fields.input.apply_event(fields.input_frame, ev));
                }
            }
        }
    }
}

fn translate_input_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        // Held state already covers auto-repeat.
        WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };
            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
            })
        }

        _ => None,
    }
}

/// Physical keys, so WASD stays in place on non-QWERTY layouts.
fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::KeyW => Key::W,
            KeyCode::KeyA => Key::A,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyD => Key::D,

            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode has no stable numeric form in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    fn code(c: KeyCode) -> Key {
        map_key(PhysicalKey::Code(c))
    }

    #[test]
    fn bound_keys_are_named() {
        assert_eq!(code(KeyCode::KeyW), Key::W);
        assert_eq!(code(KeyCode::ArrowLeft), Key::ArrowLeft);
        assert_eq!(code(KeyCode::Escape), Key::Escape);
    }

    #[test]
    fn both_shift_keys_map_to_shift() {
        assert_eq!(code(KeyCode::ShiftLeft), Key::Shift);
        assert_eq!(code(KeyCode::ShiftRight), Key::Shift);
    }

    #[test]
    fn unbound_keys_are_unknown() {
        assert_eq!(code(KeyCode::KeyQ), Key::Unknown(KeyCode::KeyQ as u32));
        assert_eq!(
            map_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::Unknown(0)
        );
    }

    #[test]
    fn focus_changes_translate() {
        assert_eq!(
            translate_input_event(&WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
        assert_eq!(translate_input_event(&WindowEvent::CloseRequested), None);
    }
}
