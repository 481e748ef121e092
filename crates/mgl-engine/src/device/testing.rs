//! Recording GL backend for tests.
//!
//! `FakeGl` hands out fresh handles, tracks which objects are alive and
//! records the draw-relevant calls in order. Its "compiler" rejects any
//! source containing `#error`; its "linker" fails programs with no attached
//! stages and exposes every `uniform <type> <name>;` line as an active
//! uniform.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroU32;

use super::gl::{ActiveUniform, Gl};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    UseProgram(Option<u32>),
    BindVertexArray(Option<u32>),
    BufferData { target: u32, floats: Vec<f32> },
    Clear(u32),
    DrawArrays { mode: u32, first: i32, count: i32 },
    Viewport(i32, i32, i32, i32),
    DeleteProgram(u32),
    DeleteVertexArray(u32),
    DeleteBuffer(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttribPointer {
    pub index: u32,
    pub size: i32,
    pub stride: i32,
    pub offset: i32,
    pub vao: Option<u32>,
    pub buffer: Option<u32>,
}

#[derive(Debug, Default)]
struct FakeShader {
    stage: u32,
    source: String,
    compiled: bool,
}

#[derive(Debug, Default)]
struct FakeProgram {
    stages: Vec<u32>,
    sources: Vec<String>,
    linked: bool,
}

#[derive(Debug, Default)]
struct State {
    next_id: u32,
    shaders: HashMap<u32, FakeShader>,
    programs: HashMap<u32, FakeProgram>,
    vertex_arrays: HashSet<u32>,
    buffers: HashSet<u32>,
    bound_vao: Option<u32>,
    bound_buffer: Option<u32>,
    current_program: Option<u32>,
    attribs: Vec<AttribPointer>,
    enabled_attribs: HashSet<u32>,
    calls: Vec<Call>,
    deleted_shaders: usize,
    fail_shader_creation: bool,
}

impl State {
    fn alloc(&mut self) -> NonZeroU32 {
        self.next_id += 1;
        NonZeroU32::new(self.next_id).expect("ids start at 1")
    }
}

#[derive(Debug, Default)]
pub struct FakeGl {
    state: RefCell<State>,
}

impl FakeGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `create_shader` fail.
    pub fn fail_shader_creation(&self) {
        self.state.borrow_mut().fail_shader_creation = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn attribs(&self) -> Vec<AttribPointer> {
        self.state.borrow().attribs.clone()
    }

    pub fn is_attrib_enabled(&self, index: u32) -> bool {
        self.state.borrow().enabled_attribs.contains(&index)
    }

    /// Stage enums attached to `program`, in attach order.
    pub fn attached_stages(&self, program: glow::Program) -> Vec<u32> {
        self.state
            .borrow()
            .programs
            .get(&program.0.get())
            .map(|p| p.stages.clone())
            .unwrap_or_default()
    }

    pub fn is_program(&self, program: glow::Program) -> bool {
        self.state.borrow().programs.contains_key(&program.0.get())
    }

    pub fn is_buffer(&self, buffer: glow::Buffer) -> bool {
        self.state.borrow().buffers.contains(&buffer.0.get())
    }

    pub fn is_vertex_array(&self, vao: glow::VertexArray) -> bool {
        self.state.borrow().vertex_arrays.contains(&vao.0.get())
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().buffers.len()
    }

    pub fn live_vertex_arrays(&self) -> usize {
        self.state.borrow().vertex_arrays.len()
    }

    pub fn deleted_shaders(&self) -> usize {
        self.state.borrow().deleted_shaders
    }

    pub fn current_program(&self) -> Option<u32> {
        self.state.borrow().current_program
    }
}

fn uniform_type(token: &str) -> u32 {
    match token {
        "float" => glow::FLOAT,
        "vec2" => glow::FLOAT_VEC2,
        "vec3" => glow::FLOAT_VEC3,
        "vec4" => glow::FLOAT_VEC4,
        "int" => glow::INT,
        "mat4" => glow::FLOAT_MAT4,
        "sampler2D" => glow::SAMPLER_2D,
        _ => glow::FLOAT,
    }
}

fn parse_uniforms(sources: &[String]) -> Vec<(String, u32, i32)> {
    let mut out: Vec<(String, u32, i32)> = Vec::new();
    for line in sources.iter().flat_map(|s| s.lines()) {
        let Some(decl) = line.trim().strip_prefix("uniform ") else { continue };
        let decl = decl.trim_end_matches(';');
        let mut parts = decl.split_whitespace();
        let (Some(ty), Some(name)) = (parts.next(), parts.next()) else { continue };

        let (name, size) = match name.split_once('[') {
            Some((base, rest)) => {
                let n = rest.trim_end_matches(']').parse().unwrap_or(1);
                (format!("{base}[0]"), n)
            }
            None => (name.to_string(), 1),
        };

        if !out.iter().any(|(n, _, _)| *n == name) {
            out.push((name, uniform_type(ty), size));
        }
    }
    out
}

impl Gl for FakeGl {
    fn create_shader(&self, stage: u32) -> Result<glow::Shader, String> {
        let mut s = self.state.borrow_mut();
        if s.fail_shader_creation {
            return Err("glCreateShader returned 0".to_string());
        }
        let id = s.alloc();
        s.shaders.insert(id.get(), FakeShader { stage, ..Default::default() });
        Ok(glow::NativeShader(id))
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        if let Some(sh) = self.state.borrow_mut().shaders.get_mut(&shader.0.get()) {
            sh.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        if let Some(sh) = self.state.borrow_mut().shaders.get_mut(&shader.0.get()) {
            sh.compiled = !sh.source.contains("#error") && !sh.source.trim().is_empty();
        }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        self.state
            .borrow()
            .shaders
            .get(&shader.0.get())
            .is_some_and(|sh| sh.compiled)
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        match self.state.borrow().shaders.get(&shader.0.get()) {
            Some(sh) if !sh.compiled => "0:1(1): error: #error directive\n".to_string(),
            _ => String::new(),
        }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        let mut s = self.state.borrow_mut();
        if s.shaders.remove(&shader.0.get()).is_some() {
            s.deleted_shaders += 1;
        }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        let mut s = self.state.borrow_mut();
        let id = s.alloc();
        s.programs.insert(id.get(), FakeProgram::default());
        Ok(glow::NativeProgram(id))
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        let mut s = self.state.borrow_mut();
        let Some((stage, source)) = s
            .shaders
            .get(&shader.0.get())
            .map(|sh| (sh.stage, sh.source.clone()))
        else {
            return;
        };
        if let Some(p) = s.programs.get_mut(&program.0.get()) {
            p.stages.push(stage);
            p.sources.push(source);
        }
    }

    fn link_program(&self, program: glow::Program) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program.0.get()) {
            p.linked = !p.stages.is_empty();
        }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        self.state
            .borrow()
            .programs
            .get(&program.0.get())
            .is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        match self.state.borrow().programs.get(&program.0.get()) {
            Some(p) if !p.linked => "error: no shaders attached to the program\n".to_string(),
            _ => String::new(),
        }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        let mut s = self.state.borrow_mut();
        let id = program.map(|p| p.0.get());
        s.current_program = id;
        s.calls.push(Call::UseProgram(id));
    }

    fn delete_program(&self, program: glow::Program) {
        let mut s = self.state.borrow_mut();
        s.programs.remove(&program.0.get());
        s.calls.push(Call::DeleteProgram(program.0.get()));
    }

    fn active_uniforms(&self, program: glow::Program) -> Vec<ActiveUniform> {
        let s = self.state.borrow();
        let Some(p) = s.programs.get(&program.0.get()).filter(|p| p.linked) else {
            return Vec::new();
        };
        parse_uniforms(&p.sources)
            .into_iter()
            .enumerate()
            .map(|(i, (name, utype, size))| ActiveUniform {
                index: i as u32,
                location: Some(i as u32),
                name,
                utype,
                size,
            })
            .collect()
    }

    fn create_vertex_array(&self) -> Result<glow::VertexArray, String> {
        let mut s = self.state.borrow_mut();
        let id = s.alloc();
        s.vertex_arrays.insert(id.get());
        Ok(glow::NativeVertexArray(id))
    }

    fn bind_vertex_array(&self, vao: Option<glow::VertexArray>) {
        let mut s = self.state.borrow_mut();
        let id = vao.map(|v| v.0.get());
        s.bound_vao = id;
        s.calls.push(Call::BindVertexArray(id));
    }

    fn delete_vertex_array(&self, vao: glow::VertexArray) {
        let mut s = self.state.borrow_mut();
        s.vertex_arrays.remove(&vao.0.get());
        s.calls.push(Call::DeleteVertexArray(vao.0.get()));
    }

    fn create_buffer(&self) -> Result<glow::Buffer, String> {
        let mut s = self.state.borrow_mut();
        let id = s.alloc();
        s.buffers.insert(id.get());
        Ok(glow::NativeBuffer(id))
    }

    fn bind_buffer(&self, _target: u32, buffer: Option<glow::Buffer>) {
        self.state.borrow_mut().bound_buffer = buffer.map(|b| b.0.get());
    }

    fn delete_buffer(&self, buffer: glow::Buffer) {
        let mut s = self.state.borrow_mut();
        s.buffers.remove(&buffer.0.get());
        s.calls.push(Call::DeleteBuffer(buffer.0.get()));
    }

    fn buffer_data(&self, target: u32, data: &[u8], _usage: u32) {
        let floats = data
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        self.state
            .borrow_mut()
            .calls
            .push(Call::BufferData { target, floats });
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        let mut s = self.state.borrow_mut();
        let (vao, buffer) = (s.bound_vao, s.bound_buffer);
        s.attribs.push(AttribPointer { index, size, stride, offset, vao, buffer });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.state.borrow_mut().enabled_attribs.insert(index);
    }

    fn clear_color(&self, _r: f32, _g: f32, _b: f32, _a: f32) {}

    fn clear(&self, mask: u32) {
        self.state.borrow_mut().calls.push(Call::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.state
            .borrow_mut()
            .calls
            .push(Call::DrawArrays { mode, first, count });
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.state
            .borrow_mut()
            .calls
            .push(Call::Viewport(x, y, width, height));
    }
}
