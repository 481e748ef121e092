use crate::device::Gl;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub gl: &'a dyn Gl,
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
    /// Framebuffer size in physical pixels.
    pub width: u32,
    pub height: u32,
}
