use super::ctx::FrameCtx;
use crate::device::Gl;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime calls these hooks in event-loop order on the thread that owns
/// the GL context: `on_load` once after the context is current, then any mix
/// of `on_frame` and `on_resize`, then `on_close` once before the context is
/// dropped.
pub trait App {
    /// Called once the GL context is current. `width`/`height` are the
    /// framebuffer size in physical pixels.
    fn on_load(&mut self, gl: &dyn Gl, width: u32, height: u32) -> AppControl;

    /// Called once per frame. The runtime swaps buffers afterwards.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called when the framebuffer size changes.
    fn on_resize(&mut self, gl: &dyn Gl, width: u32, height: u32) {
        let _ = (gl, width, height);
    }

    /// Called once when the window is closing.
    fn on_close(&mut self, gl: &dyn Gl);
}
