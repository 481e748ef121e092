/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested desktop OpenGL version as `(major, minor)`.
    ///
    /// The bundled shaders target `#version 330 core`.
    pub version: (u8, u8),

    /// Synchronize buffer swaps with the display refresh.
    ///
    /// Off by default; redraw cadence comes from the runtime's update frequency.
    pub vsync: bool,

    /// Minimum alpha bits requested from the framebuffer config.
    pub alpha_size: u8,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            vsync: false,
            alpha_size: 8,
        }
    }
}
