use crate::device::Gl;

use super::program::{keep_live_program, link_and_inspect};
use super::{Diagnostics, Shader, ShaderStage};

/// A program assembled from the outside.
///
/// `compile` only creates an empty program object; stages are added with
/// [`ManualShader::attach`] and the program finished with [`ManualShader::link`].
#[derive(Debug, Default)]
pub struct ManualShader {
    program: Option<glow::Program>,
    stages: Vec<ShaderStage>,
}

impl ManualShader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages attached to the current program, in attach order.
    pub fn stages(&self) -> &[ShaderStage] {
        &self.stages
    }

    /// Attaches a compiled shader object. Returns `false` if there is no live program.
    pub fn attach(&mut self, gl: &dyn Gl, shader: glow::Shader, stage: ShaderStage) -> bool {
        let Some(program) = self.program else {
            return false;
        };
        gl.attach_shader(program, shader);
        self.stages.push(stage);
        true
    }

    pub fn link(&mut self, gl: &dyn Gl, diagnostics: &mut Diagnostics) {
        if let Some(program) = self.program {
            link_and_inspect(gl, program, diagnostics);
        }
    }
}

impl Shader for ManualShader {
    fn program(&self) -> Option<glow::Program> {
        self.program
    }

    fn compile(&mut self, gl: &dyn Gl, close: bool) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if close {
            self.close(gl);
        } else if self.program.is_some() {
            keep_live_program(&mut diagnostics);
            return diagnostics;
        }

        self.stages.clear();
        match gl.create_program() {
            Ok(program) => self.program = Some(program),
            Err(e) => diagnostics.error(None, format!("failed to create program: {e}")),
        }
        diagnostics
    }

    fn close(&mut self, gl: &dyn Gl) {
        if let Some(program) = self.program.take() {
            gl.delete_program(program);
        }
        self.stages.clear();
    }
}
