use std::fmt;

use thiserror::Error;

use crate::device::Gl;
use crate::resource::ResourceError;

/// Pipeline stage a shader object is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    TessControl,
    TessEvaluation,
    Compute,
}

impl ShaderStage {
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
            ShaderStage::Geometry => glow::GEOMETRY_SHADER,
            ShaderStage::TessControl => glow::TESS_CONTROL_SHADER,
            ShaderStage::TessEvaluation => glow::TESS_EVALUATION_SHADER,
            ShaderStage::Compute => glow::COMPUTE_SHADER,
        }
    }

    /// Short tag used in diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERT",
            ShaderStage::Fragment => "FRAG",
            ShaderStage::Geometry => "GEOM",
            ShaderStage::TessControl => "TESC",
            ShaderStage::TessEvaluation => "TESE",
            ShaderStage::Compute => "COMP",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A shader source file and the stage it is compiled for.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShaderFile {
    file_name: String,
    stage: ShaderStage,
}

impl ShaderFile {
    pub fn new(file_name: impl Into<String>, stage: ShaderStage) -> Self {
        Self {
            file_name: file_name.into(),
            stage,
        }
    }

    pub fn vertex(file_name: impl Into<String>) -> Self {
        Self::new(file_name, ShaderStage::Vertex)
    }

    pub fn fragment(file_name: impl Into<String>) -> Self {
        Self::new(file_name, ShaderStage::Fragment)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

/// Why a single stage did not make it into a program.
#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("failed to create {stage} shader object: {message}")]
    Create { stage: ShaderStage, message: String },

    #[error("{}", .log.trim_end())]
    Compile { stage: ShaderStage, log: String },
}

/// Creates and compiles one shader object.
///
/// On compile failure the object is deleted before returning, so callers only
/// ever own objects that compiled.
pub(crate) fn compile_stage(
    gl: &dyn Gl,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, StageError> {
    let shader = gl
        .create_shader(stage.gl_enum())
        .map_err(|message| StageError::Create { stage, message })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.shader_compile_status(shader) {
        return Ok(shader);
    }

    let log = gl.shader_info_log(shader);
    gl.delete_shader(shader);
    Err(StageError::Compile { stage, log })
}
