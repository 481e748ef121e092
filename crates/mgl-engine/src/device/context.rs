use std::num::NonZeroU32;

use anyhow::{Context, Result, anyhow};
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::GlInit;

/// A window together with its current GL context and surface.
///
/// Field order is drop order: GL objects go before the surface, the surface
/// before the context, and the window last.
pub struct GlWindow {
    gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindow {
    /// Creates the window, picks a framebuffer config, creates a context and
    /// makes it current on the calling thread.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<Self> {
        let template = ConfigTemplateBuilder::new().with_alpha_size(init.alpha_size);

        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, |configs| {
                // The picker must return a config; glutin reports an empty
                // match set as a `build` error before calling it.
                most_samples(configs, |c| c.num_samples())
                    .expect("glutin called the config picker with no configs")
            })
            .map_err(|e| anyhow!("failed to build GL display: {e}"))?;

        let window = window.context("display builder returned no window")?;
        let display = config.display();

        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let (major, minor) = init.version;
        let core_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_handle));
        let gles_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(None))
            .build(Some(raw_handle));

        let not_current = match unsafe { display.create_context(&config, &core_attrs) } {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("OpenGL {major}.{minor} context unavailable ({e}); trying GLES");
                unsafe { display.create_context(&config, &gles_attrs) }
                    .context("failed to create GL context")?
            }
        };

        let size = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_handle,
            non_zero(size.width),
            non_zero(size.height),
        );
        let surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        let interval = if init.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        let gl =
            unsafe { glow::Context::from_loader_function_cstr(|s| display.get_proc_address(s)) };

        log::info!(
            "GL context ready: {}x{} samples={}",
            size.width,
            size.height,
            config.num_samples(),
        );

        Ok(Self { gl, surface, context, window })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Resizes the surface. Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.surface
            .resize(&self.context, non_zero(size.width), non_zero(size.height));
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.window.pre_present_notify();
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

/// The candidate with the highest sample count; the first one wins ties.
fn most_samples<T>(candidates: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    candidates.fold(None, |best, c| match best {
        Some(b) if samples(&b) >= samples(&c) => Some(b),
        _ => Some(c),
    })
}
