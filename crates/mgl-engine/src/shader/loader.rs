use crate::device::Gl;
use crate::resource::ResourceProvider;

use super::stage::{StageError, compile_stage};
use super::{Diagnostics, ManualShader, Shader, ShaderFile};

/// Result of [`ShaderLoader::load`].
#[derive(Debug)]
pub struct LoadedShader {
    pub shader: ManualShader,
    pub diagnostics: Diagnostics,
}

/// Builds a program from shader files found in a [`ResourceProvider`].
///
/// Loading is best effort: a stage whose file cannot be resolved, whose
/// object cannot be created, or which fails to compile is reported and left
/// out. The program is linked with whatever remains, possibly nothing.
pub struct ShaderLoader<'r> {
    resources: &'r dyn ResourceProvider,
}

impl<'r> ShaderLoader<'r> {
    pub fn new(resources: &'r dyn ResourceProvider) -> Self {
        Self { resources }
    }

    pub fn load(&self, gl: &dyn Gl, files: &[ShaderFile]) -> LoadedShader {
        let mut shader = ManualShader::new();
        let mut diagnostics = shader.compile(gl, false);

        let mut compiled = Vec::with_capacity(files.len());
        for file in files {
            match self.compile_file(gl, file) {
                Ok(obj) => {
                    shader.attach(gl, obj, file.stage());
                    compiled.push(obj);
                }
                Err(e) => diagnostics.error(Some(file.file_name()), e.to_string()),
            }
        }

        shader.link(gl, &mut diagnostics);

        for obj in compiled {
            gl.delete_shader(obj);
        }

        log::debug!(
            "loaded program {:?} with stages {:?} ({} of {} files)",
            shader.program(),
            shader.stages(),
            shader.stages().len(),
            files.len(),
        );

        LoadedShader { shader, diagnostics }
    }

    fn compile_file(&self, gl: &dyn Gl, file: &ShaderFile) -> Result<glow::Shader, StageError> {
        let (name, source) = self.resources.read_text(file.file_name())?;
        log::trace!("compiling {} as {}", name, file.stage());
        compile_stage(gl, file.stage(), &source)
    }
}
