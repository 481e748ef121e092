//! MGL engine crate.
//!
//! A minimal OpenGL harness: one window, one shader program, one vertex
//! provider, one quad per frame. This crate owns the platform + GL runtime
//! pieces; `mgl-viewer` wires them together.

pub mod core;
pub mod device;
pub mod logging;
pub mod provider;
pub mod render;
pub mod resource;
pub mod shader;
pub mod time;
pub mod window;
