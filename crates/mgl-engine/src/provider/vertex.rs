use crate::device::Gl;

use super::{VertexLayout, VertexProvider};

/// The vertex array + vertex buffer pair owned by one provider.
#[derive(Debug)]
pub struct VertexObjects {
    vao: Option<glow::VertexArray>,
    vbo: Option<glow::Buffer>,
}

impl VertexObjects {
    /// Allocates both objects, binds them and declares `layout`.
    ///
    /// If the buffer cannot be created the already-created array is released.
    pub fn new(gl: &dyn Gl, layout: VertexLayout) -> Result<Self, String> {
        let vao = gl.create_vertex_array()?;
        let vbo = match gl.create_buffer() {
            Ok(b) => b,
            Err(e) => {
                gl.delete_vertex_array(vao);
                return Err(e);
            }
        };

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.vertex_attrib_pointer_f32(layout.slot, layout.components, layout.stride, layout.offset);
        gl.enable_vertex_attrib_array(layout.slot);

        Ok(Self {
            vao: Some(vao),
            vbo: Some(vbo),
        })
    }

    pub fn vertex_array(&self) -> Option<glow::VertexArray> {
        self.vao
    }

    pub fn vertex_buffer(&self) -> Option<glow::Buffer> {
        self.vbo
    }

    pub fn bind(&self, gl: &dyn Gl) {
        if let (Some(vao), Some(vbo)) = (self.vao, self.vbo) {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        }
    }

    pub fn close(&mut self, gl: &dyn Gl) {
        if let Some(vao) = self.vao.take() {
            gl.delete_vertex_array(vao);
        }
        if let Some(vbo) = self.vbo.take() {
            gl.delete_buffer(vbo);
        }
    }
}

/// Two floats per vertex (x, y).
#[derive(Debug)]
pub struct Provider2D {
    objects: VertexObjects,
}

impl Provider2D {
    pub const LAYOUT: VertexLayout = VertexLayout::packed_f32(2);

    pub fn new(gl: &dyn Gl) -> Result<Self, String> {
        Ok(Self {
            objects: VertexObjects::new(gl, Self::LAYOUT)?,
        })
    }
}

impl VertexProvider for Provider2D {
    fn layout(&self) -> VertexLayout {
        Self::LAYOUT
    }

    fn objects(&self) -> &VertexObjects {
        &self.objects
    }

    fn close(&mut self, gl: &dyn Gl) {
        self.objects.close(gl);
    }
}

/// Three floats per vertex (x, y, z).
#[derive(Debug)]
pub struct Provider3D {
    objects: VertexObjects,
}

impl Provider3D {
    pub const LAYOUT: VertexLayout = VertexLayout::packed_f32(3);

    pub fn new(gl: &dyn Gl) -> Result<Self, String> {
        Ok(Self {
            objects: VertexObjects::new(gl, Self::LAYOUT)?,
        })
    }
}

impl VertexProvider for Provider3D {
    fn layout(&self) -> VertexLayout {
        Self::LAYOUT
    }

    fn objects(&self) -> &VertexObjects {
        &self.objects
    }

    fn close(&mut self, gl: &dyn Gl) {
        self.objects.close(gl);
    }
}
