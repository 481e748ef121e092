use crate::provider::VertexLayoutKind;
use crate::shader::ShaderFile;

/// Which program a [`super::QuadWindow`] builds on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderSelection {
    /// The sources compiled into `shader::InlineShader`.
    Inline,
    /// Files resolved through the window's resource provider.
    Files(Vec<ShaderFile>),
}

impl Default for ShaderSelection {
    fn default() -> Self {
        ShaderSelection::Files(vec![
            ShaderFile::vertex("default.vert"),
            ShaderFile::fragment("default.frag"),
        ])
    }
}

/// Render configuration for a [`super::QuadWindow`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Linear RGBA clear color.
    pub clear_color: [f32; 4],
    pub layout: VertexLayoutKind,
    pub shader: ShaderSelection,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            layout: VertexLayoutKind::TwoD,
            shader: ShaderSelection::default(),
        }
    }
}
