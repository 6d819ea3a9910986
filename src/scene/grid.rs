use crate::scene::SceneError;

/// Rectangular sampling domain for a square lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDomain {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl GridDomain {
    /// Square domain centered on the origin.
    pub const fn centered(half: f32) -> Self {
        Self {
            x_min: -half,
            x_max: half,
            y_min: -half,
            y_max: half,
        }
    }
}

/// An n×n lattice over a rectangular domain, flattened row-major:
/// vertex index = row·n + col.
pub struct Grid {
    pub domain: GridDomain,
    pub size: usize,
}

impl Grid {
    pub fn new(domain: GridDomain, size: usize) -> Result<Self, SceneError> {
        if size < 2 {
            return Err(SceneError::DegenerateGrid(size));
        }
        Ok(Self { domain, size })
    }

    pub fn index(&self, row: usize, col: usize) -> u32 {
        (row * self.size + col) as u32
    }

    fn point(&self, row: usize, col: usize) -> (f32, f32) {
        let steps = (self.size - 1) as f32;
        let x = self.domain.x_min + (self.domain.x_max - self.domain.x_min) * col as f32 / steps;
        let y = self.domain.y_min + (self.domain.y_max - self.domain.y_min) * row as f32 / steps;
        (x, y)
    }

    /// Lattice points in vertex-index order.
    pub fn points(&self) -> Vec<(f32, f32)> {
        let mut out = Vec::with_capacity(self.size * self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                out.push(self.point(row, col));
            }
        }
        out
    }

    /// Sample a height field over the lattice into world positions.
    /// Height goes into world Y; the lattice spans the XZ plane.
    pub fn positions(&self, mut height: impl FnMut(f32, f32) -> f32) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.size * self.size * 3);
        for row in 0..self.size {
            for col in 0..self.size {
                let (x, y) = self.point(row, col);
                out.push(x);
                out.push(height(x, y));
                out.push(y);
            }
        }
        out
    }

    /// Two triangles per quad cell, split along the (p1, p3) diagonal.
    pub fn triangulate(&self) -> Vec<u32> {
        let n = self.size;
        let mut indices = Vec::with_capacity((n - 1) * (n - 1) * 6);

        for i in 0..n - 1 {
            for j in 0..n - 1 {
                let p1 = self.index(i, j);
                let p2 = self.index(i, j + 1);
                let p3 = self.index(i + 1, j + 1);
                let p4 = self.index(i + 1, j);

                indices.extend_from_slice(&[p1, p2, p3]);
                indices.extend_from_slice(&[p1, p3, p4]);
            }
        }

        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangulation_count_and_bounds() {
        for n in [2usize, 5, 20, 30] {
            let grid = Grid::new(GridDomain::centered(1.0), n).unwrap();
            let indices = grid.triangulate();

            assert_eq!(indices.len(), 2 * (n - 1) * (n - 1) * 3);
            let vertex_count = (n * n) as u32;
            assert!(indices.iter().all(|&i| i < vertex_count));
        }
    }

    #[test]
    fn degenerate_grids_rejected() {
        assert!(matches!(
            Grid::new(GridDomain::centered(1.0), 0),
            Err(SceneError::DegenerateGrid(0))
        ));
        assert!(matches!(
            Grid::new(GridDomain::centered(1.0), 1),
            Err(SceneError::DegenerateGrid(1))
        ));
        assert!(Grid::new(GridDomain::centered(1.0), 2).is_ok());
    }

    #[test]
    fn lattice_is_row_major_over_domain() {
        let grid = Grid::new(GridDomain::centered(2.0), 3).unwrap();
        let points = grid.points();

        assert_eq!(points.len(), 9);
        assert_eq!(points[0], (-2.0, -2.0));
        assert_eq!(points[2], (2.0, -2.0));
        assert_eq!(points[grid.index(1, 1) as usize], (0.0, 0.0));
        assert_eq!(points[8], (2.0, 2.0));
    }

    #[test]
    fn positions_put_height_in_world_y() {
        let grid = Grid::new(GridDomain::centered(1.0), 2).unwrap();
        let positions = grid.positions(|x, y| x + 2.0 * y);

        // first lattice point is (-1, -1)
        assert_eq!(&positions[0..3], &[-1.0, -3.0, -1.0]);
    }
}
