//! Shader programs.
//!
//! Two interchangeable program types sit behind the [`Shader`] trait:
//! - [`InlineShader`] compiles a fixed vertex/fragment pair baked into the crate
//! - [`ManualShader`] starts as an empty program that [`ShaderLoader`] fills
//!   from resource files
//!
//! Nothing in this module returns an error for a bad shader. Failures are
//! collected into [`Diagnostics`] and the program is returned as-is.

mod diagnostics;
mod inline;
mod loader;
mod manual;
mod program;
mod stage;

pub use diagnostics::{Diagnostic, Diagnostics, UniformTable, uniform_type_name};
pub use inline::InlineShader;
pub use loader::{LoadedShader, ShaderLoader};
pub use manual::ManualShader;
pub use stage::{ShaderFile, ShaderStage, StageError};

use crate::device::Gl;

/// Capability shared by all program types.
pub trait Shader {
    /// The live program handle, if any.
    fn program(&self) -> Option<glow::Program>;

    /// (Re)builds the program. With `close`, the previous program is deleted
    /// first; without it, a still-live program is kept and a warning returned.
    fn compile(&mut self, gl: &dyn Gl, close: bool) -> Diagnostics;

    /// Deletes the program. Calling this on a closed shader does nothing.
    fn close(&mut self, gl: &dyn Gl);

    /// Binds the program for subsequent draws. No-op without a live program.
    fn use_program(&self, gl: &dyn Gl) {
        if let Some(program) = self.program() {
            gl.use_program(Some(program));
        }
    }
}
