//! GL device + surface management.
//!
//! This module is responsible for:
//! - creating the glutin display, context and window surface
//! - loading GL entry points through glow
//! - exposing the [`Gl`] seam that all rendering code talks to

mod context;
mod gl;
mod init;

#[cfg(test)]
pub(crate) mod testing;

pub use context::GlWindow;
pub use gl::{ActiveUniform, Gl};
pub use init::GlInit;
