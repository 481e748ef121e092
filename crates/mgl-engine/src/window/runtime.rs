use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::monitor::MonitorHandle;
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{GlInit, GlWindow};
use crate::time::{FpsCounter, FramePacer};

use super::{RuntimeConfig, WindowMode};

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs the event loop until the window closes.
    ///
    /// Fails if the event loop, window or GL context cannot be created.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.setup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct WindowEntry {
    gl_window: GlWindow,
    pacer: FramePacer,
    fps: FpsCounter,
    frame_index: u64,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    setup_error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            window: None,
            exit_requested: false,
            setup_error: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn window_attributes(&self, event_loop: &ActiveEventLoop) -> WindowAttributes {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        match self.config.mode {
            WindowMode::Windowed => attrs,
            WindowMode::Fullscreen { monitor } => {
                let target = pick_monitor(event_loop, monitor);
                attrs.with_fullscreen(Some(Fullscreen::Borderless(target)))
            }
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = self.window_attributes(event_loop);
        let gl_window = GlWindow::new(event_loop, attrs, &self.gl_init)
            .context("failed to create GL window")?;

        let size = gl_window.window().inner_size();
        if self.app.on_load(gl_window.gl(), size.width, size.height) == AppControl::Exit {
            self.request_exit();
        }

        let now = Instant::now();
        self.window = Some(WindowEntry {
            gl_window,
            pacer: FramePacer::new(self.config.update_frequency, now),
            fps: FpsCounter::new(now),
            frame_index: 0,
        });
        Ok(())
    }

    /// Runs the app's close hook while the context is still current, then
    /// drops the window.
    fn destroy_window_entry(&mut self) {
        if let Some(entry) = self.window.take() {
            self.app.on_close(entry.gl_window.gl());
        }
    }

    fn redraw(&mut self) {
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return;
        };

        let size = entry.gl_window.window().inner_size();
        let control = {
            let mut ctx = FrameCtx {
                gl: entry.gl_window.gl(),
                frame_index: entry.frame_index,
                width: size.width,
                height: size.height,
            };
            app.on_frame(&mut ctx)
        };

        if let Err(e) = entry.gl_window.swap_buffers() {
            log::error!("{e:#}");
        }

        entry.frame_index = entry.frame_index.wrapping_add(1);
        if let Some(fps) = entry.fps.tick(Instant::now()) {
            log::debug!("fps: {fps:.1}");
        }

        if control == AppControl::Exit {
            self.request_exit();
        }
    }
}

fn pick_monitor(event_loop: &ActiveEventLoop, index: usize) -> Option<MonitorHandle> {
    let monitors: Vec<MonitorHandle> = event_loop.available_monitors().collect();
    for (i, m) in monitors.iter().enumerate() {
        log::debug!(
            "monitor {i}: {} {:?}",
            m.name().unwrap_or_else(|| "<unnamed>".to_string()),
            m.size(),
        );
    }

    match monitors.into_iter().nth(index) {
        Some(m) => Some(m),
        None => {
            log::warn!("monitor {index} not found; using primary monitor");
            event_loop.primary_monitor()
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            self.setup_error = Some(e);
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.window {
            entry.gl_window.window().request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_mut() else {
            return;
        };

        if entry.pacer.poll(Instant::now()) {
            entry.gl_window.window().request_redraw();
        }

        let flow = match entry.pacer.deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Poll,
        };
        event_loop.set_control_flow(flow);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.destroy_window_entry();
                self.request_exit();
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width == 0 || new_size.height == 0 {
                    return;
                }
                if let Some(entry) = &self.window {
                    entry.gl_window.resize(new_size);
                    self.app
                        .on_resize(entry.gl_window.gl(), new_size.width, new_size.height);
                    entry.gl_window.window().request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.destroy_window_entry();
    }
}
