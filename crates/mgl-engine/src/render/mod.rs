//! Render-side application code.
//!
//! [`QuadWindow`] is the engine's one `core::App`: it owns a vertex provider
//! and a shader and draws a fixed quad every frame.

mod config;
mod quad_window;

pub use config::{RenderConfig, ShaderSelection};
pub use quad_window::{QUAD_2D, QUAD_3D, QuadWindow, WindowState};
