use crate::scene::mesh::RenderMesh;

const NUM_BUFFERS: usize = 3;
const MAX_FACE_VERTICES: usize = 300_000;
const MAX_EDGE_VERTICES: usize = 600_000;

/// Rotating vertex buffers for streamed frames: positions and face colors
/// for the flat-shaded triangles, plus a line list for the edge overlay.
pub struct MeshBuffers {
    position_buffers: [wgpu::Buffer; NUM_BUFFERS],
    color_buffers: [wgpu::Buffer; NUM_BUFFERS],
    edge_buffers: [wgpu::Buffer; NUM_BUFFERS],

    current_buffer: usize,
    face_vertex_count: usize,
    edge_vertex_count: usize,
}

impl MeshBuffers {
    pub fn new(device: &wgpu::Device) -> Self {
        let position_buffers = std::array::from_fn(|_| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Mesh Position Buffer"),
                size: (MAX_FACE_VERTICES * 3 * 4) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        let color_buffers = std::array::from_fn(|_| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Mesh Color Buffer"),
                size: (MAX_FACE_VERTICES * 4 * 4) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        let edge_buffers = std::array::from_fn(|_| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Mesh Edge Buffer"),
                size: (MAX_EDGE_VERTICES * 3 * 4) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        Self {
            position_buffers,
            color_buffers,
            edge_buffers,
            current_buffer: 0,
            face_vertex_count: 0,
            edge_vertex_count: 0,
        }
    }

    pub fn upload(&mut self, queue: &wgpu::Queue, mesh: &RenderMesh) {
        if mesh.positions.is_empty() {
            self.face_vertex_count = 0;
            self.edge_vertex_count = 0;
            return;
        }

        let next_buffer = (self.current_buffer + 1) % NUM_BUFFERS;

        let face_count = mesh.face_vertex_count().min(MAX_FACE_VERTICES);
        queue.write_buffer(
            &self.position_buffers[next_buffer],
            0,
            bytemuck::cast_slice(&mesh.positions[..face_count * 3]),
        );
        queue.write_buffer(
            &self.color_buffers[next_buffer],
            0,
            bytemuck::cast_slice(&mesh.colors[..face_count * 4]),
        );

        let edge_count = mesh.edge_vertex_count().min(MAX_EDGE_VERTICES);
        queue.write_buffer(
            &self.edge_buffers[next_buffer],
            0,
            bytemuck::cast_slice(&mesh.edges[..edge_count * 3]),
        );

        self.current_buffer = next_buffer;
        self.face_vertex_count = face_count;
        self.edge_vertex_count = edge_count;
    }

    pub fn position_buffer(&self) -> &wgpu::Buffer {
        &self.position_buffers[self.current_buffer]
    }

    pub fn color_buffer(&self) -> &wgpu::Buffer {
        &self.color_buffers[self.current_buffer]
    }

    pub fn edge_buffer(&self) -> &wgpu::Buffer {
        &self.edge_buffers[self.current_buffer]
    }

    pub fn face_vertex_count(&self) -> u32 {
        self.face_vertex_count as u32
    }

    pub fn edge_vertex_count(&self) -> u32 {
        self.edge_vertex_count as u32
    }
}

pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: 12,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    }
}

pub fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: 16,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x4,
        }],
    }
}
