use crate::device::Gl;

use super::program::{keep_live_program, link_and_inspect};
use super::stage::compile_stage;
use super::{Diagnostics, Shader, ShaderStage};

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, 1.0, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

/// Program built from sources baked into the crate.
///
/// The vertex stage reads `vec3` positions from slot 0 but only uses x/y, so
/// it works with either vertex provider.
#[derive(Debug)]
pub struct InlineShader {
    program: Option<glow::Program>,
    sources: [(ShaderStage, &'static str); 2],
}

impl InlineShader {
    pub fn new() -> Self {
        Self::with_sources(VERTEX_SHADER, FRAGMENT_SHADER)
    }

    pub fn with_sources(vertex: &'static str, fragment: &'static str) -> Self {
        Self {
            program: None,
            sources: [(ShaderStage::Vertex, vertex), (ShaderStage::Fragment, fragment)],
        }
    }
}

impl Default for InlineShader {
    fn default() -> Self {
        Self::new()
    }
}

impl Shader for InlineShader {
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

        let program = match gl.create_program() {
            Ok(p) => p,
            Err(e) => {
                diagnostics.error(None, format!("failed to create program: {e}"));
                return diagnostics;
            }
        };

        let mut compiled = Vec::with_capacity(self.sources.len());
        for (stage, source) in self.sources {
            match compile_stage(gl, stage, source) {
                Ok(obj) => {
                    gl.attach_shader(program, obj);
                    compiled.push(obj);
                }
                Err(e) => diagnostics.error(Some(stage.label()), e.to_string()),
            }
        }

        link_and_inspect(gl, program, &mut diagnostics);

        for obj in compiled {
            gl.delete_shader(obj);
        }

        self.program = Some(program);
        diagnostics
    }

    fn close(&mut self, gl: &dyn Gl) {
        if let Some(program) = self.program.take() {
            gl.delete_program(program);
        }
    }
}
