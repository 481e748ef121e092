use glow::HasContext;

/// One active uniform as reported by the driver after linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveUniform {
    pub index: u32,
    /// `None` for uniforms that live in a block (no standalone location).
    pub location: Option<u32>,
    pub name: String,
    /// GL type enum (`glow::FLOAT_VEC4`, ...).
    pub utype: u32,
    /// Array length; 1 for non-arrays.
    pub size: i32,
}

/// The subset of OpenGL used by the engine.
///
/// Everything that touches GL state goes through this trait so the shader,
/// provider and render-window code can run against a recording backend in
/// tests. Handle types are glow's native handles.
///
/// Implementations assume the owning context is current on the calling
/// thread; GL state is global per context and is never shared across threads.
pub trait Gl {
    // ── shaders ───────────────────────────────────────────────────────────
    fn create_shader(&self, stage: u32) -> Result<glow::Shader, String>;
    fn shader_source(&self, shader: glow::Shader, source: &str);
    fn compile_shader(&self, shader: glow::Shader);
    fn shader_compile_status(&self, shader: glow::Shader) -> bool;
    fn shader_info_log(&self, shader: glow::Shader) -> String;
    fn delete_shader(&self, shader: glow::Shader);

    // ── programs ──────────────────────────────────────────────────────────
    fn create_program(&self) -> Result<glow::Program, String>;
    fn attach_shader(&self, program: glow::Program, shader: glow::Shader);
    fn link_program(&self, program: glow::Program);
    fn program_link_status(&self, program: glow::Program) -> bool;
    fn program_info_log(&self, program: glow::Program) -> String;
    fn use_program(&self, program: Option<glow::Program>);
    fn delete_program(&self, program: glow::Program);
    fn active_uniforms(&self, program: glow::Program) -> Vec<ActiveUniform>;

    // ── vertex state ──────────────────────────────────────────────────────
    fn create_vertex_array(&self) -> Result<glow::VertexArray, String>;
    fn bind_vertex_array(&self, vao: Option<glow::VertexArray>);
    fn delete_vertex_array(&self, vao: glow::VertexArray);
    fn create_buffer(&self) -> Result<glow::Buffer, String>;
    fn bind_buffer(&self, target: u32, buffer: Option<glow::Buffer>);
    fn delete_buffer(&self, buffer: glow::Buffer);
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);
    fn enable_vertex_attrib_array(&self, index: u32);

    // ── framebuffer ───────────────────────────────────────────────────────
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
}

// SAFETY (all methods below): the runtime only hands `&glow::Context` to
// callbacks while its context is current on the event-loop thread, and every
// handle passed in was created by this same context.
impl Gl for glow::Context {
    fn create_shader(&self, stage: u32) -> Result<glow::Shader, String> {
        unsafe { HasContext::create_shader(self, stage) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn active_uniforms(&self, program: glow::Program) -> Vec<ActiveUniform> {
        unsafe {
            let count = self.get_active_uniforms(program);
            (0..count)
                .filter_map(|index| {
                    let u = self.get_active_uniform(program, index)?;
                    let location = self
                        .get_uniform_location(program, &u.name)
                        .map(|l| l.0);
                    Some(ActiveUniform {
                        index,
                        location,
                        name: u.name,
                        utype: u.utype,
                        size: u.size,
                    })
                })
                .collect()
        }
    }

    fn create_vertex_array(&self) -> Result<glow::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vao: Option<glow::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vao) }
    }

    fn delete_vertex_array(&self, vao: glow::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vao) }
    }

    fn create_buffer(&self) -> Result<glow::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<glow::Buffer>) {
        unsafe { HasContext::bind_buffer(self, target, buffer) }
    }

    fn delete_buffer(&self, buffer: glow::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { self.buffer_data_u8_slice(target, data, usage) }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                index,
                size,
                glow::FLOAT,
                false,
                stride,
                offset,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear(&self, mask: u32) {
        unsafe { HasContext::clear(self, mask) }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }
}
