/// Indexed triangle mesh: flattened xyz positions plus index triples.
pub struct TriangleMesh {
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, vertex: usize) -> [f32; 3] {
        let base = vertex * 3;
        [
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ]
    }

    pub fn triangle(&self, tri: usize) -> [u32; 3] {
        let base = tri * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }
}

/// Flat-shaded expansion of a [`TriangleMesh`]: an unindexed soup where each
/// face's three vertices repeat the face color, plus a line list of the
/// face edges for the wireframe overlay.
#[derive(Debug)]
pub struct RenderMesh {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub edges: Vec<f32>,
}

impl RenderMesh {
    pub fn flat_shaded(mesh: &TriangleMesh, face_colors: &[[f32; 4]]) -> Self {
        let tris = mesh.triangle_count();
        let mut positions = Vec::with_capacity(tris * 9);
        let mut colors = Vec::with_capacity(tris * 12);
        let mut edges = Vec::with_capacity(tris * 18);

        for t in 0..tris {
            let idx = mesh.triangle(t);
            let color = face_colors[t];
            let corners = idx.map(|v| mesh.position(v as usize));

            for corner in &corners {
                positions.extend_from_slice(corner);
                colors.extend_from_slice(&color);
            }

            for e in 0..3 {
                edges.extend_from_slice(&corners[e]);
                edges.extend_from_slice(&corners[(e + 1) % 3]);
            }
        }

        Self {
            positions,
            colors,
            edges,
        }
    }

    pub fn face_vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn edge_vertex_count(&self) -> usize {
        self.edges.len() / 3
    }
}

/// One built frame, ready for upload.
#[derive(Debug)]
pub struct SceneFrame {
    pub mesh: RenderMesh,
    pub frame: u32,
    pub z_min: f32,
    pub z_max: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangle_mesh() -> TriangleMesh {
        TriangleMesh {
            positions: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                1.0, 0.0, 1.0, //
                0.0, 0.0, 1.0,
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    #[test]
    fn flat_shading_repeats_face_color_per_corner() {
        let mesh = two_triangle_mesh();
        let red = [1.0, 0.0, 0.0, 1.0];
        let blue = [0.0, 0.0, 1.0, 1.0];
        let render = RenderMesh::flat_shaded(&mesh, &[red, blue]);

        assert_eq!(render.face_vertex_count(), 6);
        for corner in 0..3 {
            assert_eq!(render.colors[corner * 4..corner * 4 + 4], red);
        }
        for corner in 3..6 {
            assert_eq!(render.colors[corner * 4..corner * 4 + 4], blue);
        }
    }

    #[test]
    fn flat_shading_emits_three_edges_per_face() {
        let mesh = two_triangle_mesh();
        let render = RenderMesh::flat_shaded(&mesh, &[[0.0; 4], [0.0; 4]]);
        // 2 faces, 3 edges each, 2 endpoints per edge
        assert_eq!(render.edge_vertex_count(), 12);
    }
}
