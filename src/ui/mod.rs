use std::num::NonZeroU32;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::monitor::MonitorHandle;
use winit::window::{Fullscreen, Window, WindowId};
use softbuffer::Surface;

use crate::files::ImageSequence;
use crate::session::{Session, Viewport};
use crate::ui::state::ViewerState;

pub mod render;
pub mod state;

// ---------------------------------------------------------------------------
// Application handler (winit 0.30 style)
// ---------------------------------------------------------------------------

pub struct App {
    /// Handed to the session once the display size is known.
    pending: Option<ImageSequence>,
    nav_width: f64,
    pub state: Option<ViewerState>,
    pub window: Option<Arc<Window>>,
    pub context: Option<softbuffer::Context<Arc<Window>>>,
    pub surface: Option<Surface<Arc<Window>, Arc<Window>>>,
}

impl App {
    pub fn new(images: ImageSequence, nav_width: u32) -> Self {
        Self {
            pending: Some(images),
            nav_width: nav_width as f64,
            state: None,
            window: None,
            context: None,
            surface: None,
        }
    }
}

fn request_redraw(window: &Option<Arc<Window>>) {
    if let Some(window) = window {
        window.request_redraw();
    }
}

fn refresh(window: &Option<Arc<Window>>, state: &ViewerState) {
    if let Some(window) = window {
        window.set_title(&state.title());
        window.request_redraw();
    }
}

/// The monitor the window is made fullscreen on. Its size becomes the viewport.
fn target_monitor(event_loop: &ActiveEventLoop) -> Option<MonitorHandle> {
    event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let monitor = target_monitor(event_loop);
        let attrs = Window::default_attributes()
            .with_title("Randomizer")
            .with_fullscreen(Some(Fullscreen::Borderless(monitor.clone())));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        let surface = softbuffer::Context::new(Arc::clone(&window)).and_then(|context| {
            let surface = Surface::new(&context, Arc::clone(&window))?;
            Ok((context, surface))
        });
        let (context, surface) = match surface {
            Ok(cs) => cs,
            Err(e) => {
                log::error!("Failed to create drawing surface: {}", e);
                event_loop.exit();
                return;
            }
        };

        if let Some(images) = self.pending.take() {
            let size: PhysicalSize<u32> = monitor
                .map(|m| m.size())
                .unwrap_or_else(|| window.inner_size());
            log::info!("Display is {}x{}", size.width, size.height);
            let viewport = Viewport::new(size.width as f64, size.height as f64, self.nav_width);
            let state = ViewerState::new(Session::new(images, viewport));
            window.set_title(&state.title());
            self.state = Some(state);
        }

        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
        self.surface = Some(surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(ref mut state) = self.state else {
            if matches!(event, WindowEvent::CloseRequested) {
                event_loop.exit();
            }
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(_) => {
                request_redraw(&self.window);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let changed = match &event.logical_key {
                    Key::Named(NamedKey::ArrowLeft) => state.previous_image(),
                    Key::Named(NamedKey::ArrowRight) => state.next_image(),
                    Key::Named(NamedKey::Escape) => {
                        event_loop.exit();
                        false
                    }
                    Key::Character(s) if s.eq_ignore_ascii_case("q") => {
                        event_loop.exit();
                        false
                    }
                    _ => false,
                };
                if changed {
                    refresh(&self.window, state);
                }
            }

            WindowEvent::CursorMoved {
                position: PhysicalPosition { x, y },
                ..
            } => {
                state.mouse_pos = (x, y);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if state.click() {
                    refresh(&self.window, state);
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(surface)) = (self.window.as_ref(), self.surface.as_mut()) else {
                    return;
                };
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    log::error!("Failed to resize surface: {}", e);
                    return;
                }
                match surface.buffer_mut() {
                    Ok(mut buffer) => {
                        state.render(&mut buffer, w.get(), h.get());
                        if let Err(e) = buffer.present() {
                            log::error!("Failed to present frame: {}", e);
                        }
                    }
                    Err(e) => log::error!("Failed to map frame buffer: {}", e),
                }
            }

            _ => {}
        }
    }
}
