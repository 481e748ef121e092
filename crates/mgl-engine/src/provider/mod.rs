//! Vertex attribute providers.
//!
//! A provider owns one vertex array and one vertex buffer and describes a
//! single tightly packed float attribute at slot 0. The 2D and 3D variants
//! differ only in component count.

mod vertex;

pub use vertex::{Provider2D, Provider3D, VertexObjects};

use crate::device::Gl;

/// Shader input slot the position attribute is bound to.
pub const POSITION_SLOT: u32 = 0;

/// Layout of the position attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexLayout {
    pub slot: u32,
    pub components: i32,
    pub stride: i32,
    pub offset: i32,
}

impl VertexLayout {
    /// Tightly packed `f32` components with zero offset.
    pub const fn packed_f32(components: i32) -> Self {
        Self {
            slot: POSITION_SLOT,
            components,
            stride: components * std::mem::size_of::<f32>() as i32,
            offset: 0,
        }
    }
}

/// Provider variant selector used by configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum VertexLayoutKind {
    #[default]
    TwoD,
    ThreeD,
}

impl VertexLayoutKind {
    /// Creates the provider variant this kind names.
    pub fn create(self, gl: &dyn Gl) -> Result<Box<dyn VertexProvider>, String> {
        let provider: Box<dyn VertexProvider> = match self {
            VertexLayoutKind::TwoD => Box::new(Provider2D::new(gl)?),
            VertexLayoutKind::ThreeD => Box::new(Provider3D::new(gl)?),
        };
        Ok(provider)
    }
}

/// Capability shared by provider variants.
pub trait VertexProvider {
    fn layout(&self) -> VertexLayout;

    fn objects(&self) -> &VertexObjects;

    /// Binds the vertex array and buffer for uploads and draws.
    fn bind(&self, gl: &dyn Gl) {
        self.objects().bind(gl);
    }

    /// Deletes both GL objects. Calling this again does nothing.
    fn close(&mut self, gl: &dyn Gl);
}
