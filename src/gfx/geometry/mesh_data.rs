//! Mesh output container and GPU vertex format.
//!
//! [`MeshData`] is what a [`MeshGenerator`](super::MeshGenerator) produces
//! and what the renderer uploads: a contiguous vertex array, a `u32`
//! triangle-list index array and a per-object color. The `#[repr(C)]`
//! vertex layout is upload-ready without further transformation.

/// One generated vertex, laid out `#[repr(C)]` so the buffer can be cast
/// straight to bytes for upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    pub position: [f32; 3],
    /// Unit normal, averaged by the generator's neighbor pass.
    pub normal: [f32; 3],
}

impl Vertex3D {
    /// Vertex buffer layout for the render pipeline: position at shader
    /// location 0, normal at location 1, both `Float32x3`.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Generated mesh data ready for GPU upload.
///
/// Created empty by a scene object, populated exactly once by
/// [`MeshGenerator::make_mesh`](super::MeshGenerator::make_mesh). After
/// generation the topology is frozen; only [`MeshData::translate_y`] may
/// mutate vertex positions in place.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions and normals.
    pub vertices: Vec<Vertex3D>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
    /// Per-object RGBA color.
    pub color: [f32; 4],
    /// Index count, frozen once generation completes.
    pub size: u32,
}

impl MeshData {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            color: [1.0, 1.0, 1.0, 1.0],
            size: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Shift every vertex along Y, leaving topology and normals untouched.
    ///
    /// This is the only permitted post-generation mutation; the owning
    /// object re-uploads the vertex buffer afterwards.
    pub fn translate_y(&mut self, dy: f32) {
        for vertex in &mut self.vertices {
            vertex.position[1] += dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_y_moves_positions_only() {
        let mut data = MeshData::new();
        data.vertices.push(Vertex3D {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 1.0, 0.0],
        });
        data.indices.extend_from_slice(&[0, 0, 0]);
        data.size = 3;

        data.translate_y(-10.0);

        assert_eq!(data.vertices[0].position, [1.0, -8.0, 3.0]);
        assert_eq!(data.vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(data.indices, vec![0, 0, 0]);
        assert_eq!(data.size, 3);
    }
}
