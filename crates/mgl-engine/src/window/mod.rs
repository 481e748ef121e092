//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the GL window, and drives a `core::App`
//! through its load/frame/resize/close hooks.

mod config;
mod runtime;

pub use config::{RuntimeConfig, WindowMode};
pub use runtime::Runtime;
