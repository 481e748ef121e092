use crate::core::{App, AppControl, FrameCtx};
use crate::device::Gl;
use crate::provider::{VertexLayoutKind, VertexProvider};
use crate::resource::ResourceProvider;
use crate::shader::{InlineShader, Shader, ShaderLoader};

use super::{RenderConfig, ShaderSelection};

/// The quad drawn every frame, as 2D positions (triangle-fan order).
pub const QUAD_2D: [f32; 8] = [
    -0.5, 0.5, //
    0.5, 0.5, //
    0.5, -0.5, //
    -0.5, -0.5, //
];

/// The same quad with z = 0, for the 3D provider.
pub const QUAD_3D: [f32; 12] = [
    -0.5, 0.5, 0.0, //
    0.5, 0.5, 0.0, //
    0.5, -0.5, 0.0, //
    -0.5, -0.5, 0.0, //
];

/// Lifecycle of a [`QuadWindow`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WindowState {
    Uninitialized,
    Loaded,
    Running,
    Closing,
    Closed,
}

/// Draws one quad per frame with one provider and one shader.
///
/// Frames and resizes outside `Loaded`/`Running` are ignored, and closing is
/// only done once.
pub struct QuadWindow {
    config: RenderConfig,
    resources: Box<dyn ResourceProvider>,
    state: WindowState,
    provider: Option<Box<dyn VertexProvider>>,
    shader: Option<Box<dyn Shader>>,
    viewport: (u32, u32),
}

impl QuadWindow {
    pub fn new(config: RenderConfig, resources: Box<dyn ResourceProvider>) -> Self {
        Self {
            config,
            resources,
            state: WindowState::Uninitialized,
            provider: None,
            shader: None,
            viewport: (0, 0),
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn provider(&self) -> Option<&dyn VertexProvider> {
        self.provider.as_deref()
    }

    pub fn shader(&self) -> Option<&dyn Shader> {
        self.shader.as_deref()
    }

    fn build_shader(&self, gl: &dyn Gl) -> Box<dyn Shader> {
        match &self.config.shader {
            ShaderSelection::Inline => {
                let mut shader = InlineShader::new();
                shader.compile(gl, false).emit();
                Box::new(shader)
            }
            ShaderSelection::Files(files) => {
                let loaded = ShaderLoader::new(&*self.resources).load(gl, files);
                loaded.diagnostics.emit();
                Box::new(loaded.shader)
            }
        }
    }

    fn set_viewport(&mut self, gl: &dyn Gl, width: u32, height: u32) {
        gl.viewport(0, 0, width as i32, height as i32);
        self.viewport = (width, height);
    }

    fn quad(&self) -> &'static [f32] {
        match self.config.layout {
            VertexLayoutKind::TwoD => &QUAD_2D,
            VertexLayoutKind::ThreeD => &QUAD_3D,
        }
    }
}

impl App for QuadWindow {
    fn on_load(&mut self, gl: &dyn Gl, width: u32, height: u32) -> AppControl {
        if self.state != WindowState::Uninitialized {
            log::warn!("on_load called in state {:?}; ignored", self.state);
            return AppControl::Continue;
        }

        match self.config.layout.create(gl) {
            Ok(p) => self.provider = Some(p),
            Err(e) => log::error!("failed to create vertex provider: {e}"),
        }
        self.shader = Some(self.build_shader(gl));

        let [r, g, b, a] = self.config.clear_color;
        gl.clear_color(r, g, b, a);
        self.set_viewport(gl, width, height);

        self.state = WindowState::Loaded;
        log::info!("quad window loaded ({width}x{height}, {:?})", self.config.layout);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        match self.state {
            WindowState::Loaded => {
                log::debug!("first frame at index {}", ctx.frame_index);
                self.state = WindowState::Running;
            }
            WindowState::Running => {}
            _ => return AppControl::Continue,
        }

        let gl = ctx.gl;
        // Catch up with a framebuffer size change that arrived without a resize.
        if self.viewport != (ctx.width, ctx.height) {
            self.set_viewport(gl, ctx.width, ctx.height);
        }
        gl.clear(glow::COLOR_BUFFER_BIT);

        if let Some(shader) = &self.shader {
            shader.use_program(gl);
        }

        let Some(provider) = &self.provider else {
            return AppControl::Continue;
        };

        let quad = self.quad();
        let count = quad.len() as i32 / provider.layout().components;

        provider.bind(gl);
        gl.buffer_data(glow::ARRAY_BUFFER, bytemuck::cast_slice(quad), glow::DYNAMIC_DRAW);
        gl.draw_arrays(glow::TRIANGLE_FAN, 0, count);

        AppControl::Continue
    }

    fn on_resize(&mut self, gl: &dyn Gl, width: u32, height: u32) {
        if matches!(self.state, WindowState::Loaded | WindowState::Running) {
            self.set_viewport(gl, width, height);
        }
    }

    fn on_close(&mut self, gl: &dyn Gl) {
        if matches!(self.state, WindowState::Closing | WindowState::Closed) {
            return;
        }
        self.state = WindowState::Closing;

        if let Some(mut provider) = self.provider.take() {
            provider.close(gl);
        }
        if let Some(mut shader) = self.shader.take() {
            shader.close(gl);
        }

        self.state = WindowState::Closed;
        log::debug!("quad window closed");
    }
}
