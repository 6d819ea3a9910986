//! Per-scene frame builders: sample the height field over the lattice,
//! triangulate, run the scene's color law, and expand to a flat-shaded
//! render mesh.

use crate::scene::color::{self, Rgba};
use crate::scene::grid::{Grid, GridDomain};
use crate::scene::mesh::{RenderMesh, SceneFrame, TriangleMesh};
use crate::scene::presets::{SceneKind, ScenePreset};
use crate::scene::SceneError;

const WAVE_AMPLITUDE: f32 = 0.3;
const WAVE_FREQ_X: f32 = 2.0;
const WAVE_FREQ_Y: f32 = 3.0;

pub fn wave_height(x: f32, y: f32, t: f32) -> f32 {
    WAVE_AMPLITUDE * (WAVE_FREQ_X * x + t).sin() * (WAVE_FREQ_Y * y + t).cos()
}

pub fn terrain_height(x: f32, y: f32) -> f32 {
    0.5 * x.sin() * y.cos() + 0.2 * (3.0 * x).sin() + 0.3 * (2.0 * y).cos()
}

pub fn peak_height(x: f32, y: f32) -> f32 {
    (-4.0 * (x * x + y * y)).exp()
}

/// Apex scale for the breathing pyramid at a given frame.
pub fn apex_factor(frame: u32) -> f32 {
    (frame as f32 * 0.1).sin() * 0.5 + 1.0
}

pub fn build_frame(
    preset: &ScenePreset,
    grid_size: usize,
    frame: u32,
) -> Result<SceneFrame, SceneError> {
    match preset.kind {
        SceneKind::Pyramid => Ok(build_pyramid(frame)),
        SceneKind::Terrain => build_terrain(preset, grid_size),
        SceneKind::Quadrants => build_quadrants(preset, grid_size),
        SceneKind::Wave => build_wave(preset, grid_size, frame),
        SceneKind::Peak => build_peak(preset, grid_size),
    }
}

fn z_range(positions: &[f32]) -> (f32, f32) {
    let mut z_min = f32::MAX;
    let mut z_max = f32::MIN;
    for chunk in positions.chunks_exact(3) {
        z_min = z_min.min(chunk[1]);
        z_max = z_max.max(chunk[1]);
    }
    (z_min, z_max)
}

fn faces_from_vertex_colors(mesh: &TriangleMesh, vertex_colors: &[Rgba]) -> Vec<Rgba> {
    debug_assert_eq!(vertex_colors.len(), mesh.vertex_count());
    (0..mesh.triangle_count())
        .map(|t| {
            let [a, b, c] = mesh.triangle(t);
            color::face_mean(
                vertex_colors[a as usize],
                vertex_colors[b as usize],
                vertex_colors[c as usize],
            )
        })
        .collect()
}

/// Square base in the XZ plane, apex above the center. Height breathes with
/// the frame; the six faces keep their fixed palette.
fn build_pyramid(frame: u32) -> SceneFrame {
    let apex = apex_factor(frame);

    let mesh = TriangleMesh {
        positions: vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 0.0, 1.0, //
            0.0, 0.0, 1.0, //
            0.5, apex, 0.5,
        ],
        indices: vec![
            0, 1, 4, //
            1, 2, 4, //
            2, 3, 4, //
            3, 0, 4, //
            0, 2, 1, //
            0, 3, 2,
        ],
    };

    let alpha = 0.8;
    let face_colors: Vec<Rgba> = [
        color::RED,
        color::GREEN,
        color::BLUE,
        color::YELLOW,
        color::MAGENTA,
        color::CYAN,
    ]
    .iter()
    .map(|c| [c[0], c[1], c[2], alpha])
    .collect();

    let render = RenderMesh::flat_shaded(&mesh, &face_colors);
    SceneFrame {
        mesh: render,
        frame,
        z_min: 0.0,
        z_max: apex,
    }
}

/// Face color comes from the colormap over the face's mean elevation, not
/// from averaging vertex colors.
fn build_terrain(preset: &ScenePreset, grid_size: usize) -> Result<SceneFrame, SceneError> {
    let grid = Grid::new(GridDomain::centered(preset.domain_half), grid_size)?;
    let positions = grid.positions(terrain_height);
    let indices = grid.triangulate();
    let mesh = TriangleMesh { positions, indices };
    let (z_min, z_max) = z_range(&mesh.positions);

    let face_colors: Vec<Rgba> = (0..mesh.triangle_count())
        .map(|t| {
            let [a, b, c] = mesh.triangle(t);
            let mean_z = (mesh.position(a as usize)[1]
                + mesh.position(b as usize)[1]
                + mesh.position(c as usize)[1])
                / 3.0;
            color::terrain_colormap(color::normalized(mean_z, z_min, z_max))
        })
        .collect();

    let render = RenderMesh::flat_shaded(&mesh, &face_colors);
    Ok(SceneFrame {
        mesh: render,
        frame: 0,
        z_min,
        z_max,
    })
}

fn build_quadrants(preset: &ScenePreset, grid_size: usize) -> Result<SceneFrame, SceneError> {
    let grid = Grid::new(GridDomain::centered(preset.domain_half), grid_size)?;
    let points = grid.points();
    let positions = grid.positions(|_, _| 0.0);
    let indices = grid.triangulate();
    let mesh = TriangleMesh { positions, indices };

    let vertex_colors: Vec<Rgba> = points
        .iter()
        .map(|&(x, y)| color::quadrant_color(x, y))
        .collect();
    let face_colors = faces_from_vertex_colors(&mesh, &vertex_colors);

    let render = RenderMesh::flat_shaded(&mesh, &face_colors);
    Ok(SceneFrame {
        mesh: render,
        frame: 0,
        z_min: 0.0,
        z_max: 0.0,
    })
}

fn build_wave(preset: &ScenePreset, grid_size: usize, frame: u32) -> Result<SceneFrame, SceneError> {
    let t = frame as f32 / 10.0;
    let grid = Grid::new(GridDomain::centered(preset.domain_half), grid_size)?;
    let positions = grid.positions(|x, y| wave_height(x, y, t));
    let indices = grid.triangulate();
    let mesh = TriangleMesh { positions, indices };
    let (z_min, z_max) = z_range(&mesh.positions);

    let vertex_colors: Vec<Rgba> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| color::elevation_blend(color::normalized(p[1], z_min, z_max)))
        .collect();
    let face_colors = faces_from_vertex_colors(&mesh, &vertex_colors);

    let render = RenderMesh::flat_shaded(&mesh, &face_colors);
    Ok(SceneFrame {
        mesh: render,
        frame,
        z_min,
        z_max,
    })
}

fn build_peak(preset: &ScenePreset, grid_size: usize) -> Result<SceneFrame, SceneError> {
    let grid = Grid::new(GridDomain::centered(preset.domain_half), grid_size)?;
    let points = grid.points();
    let positions = grid.positions(peak_height);
    let indices = grid.triangulate();
    let mesh = TriangleMesh { positions, indices };
    let (z_min, z_max) = z_range(&mesh.positions);

    let max_dist = points
        .iter()
        .map(|&(x, y)| (x * x + y * y).sqrt())
        .fold(0.0_f32, f32::max);

    let vertex_colors: Vec<Rgba> = points
        .iter()
        .map(|&(x, y)| {
            let d = (x * x + y * y).sqrt() / (max_dist + color::NORM_EPS);
            color::radial_law(d)
        })
        .collect();
    let face_colors = faces_from_vertex_colors(&mesh, &vertex_colors);

    let render = RenderMesh::flat_shaded(&mesh, &face_colors);
    Ok(SceneFrame {
        mesh: render,
        frame: 0,
        z_min,
        z_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::presets::SCENE_PRESETS;

    fn preset(kind: SceneKind) -> &'static ScenePreset {
        SCENE_PRESETS.iter().find(|p| p.kind == kind).unwrap()
    }

    #[test]
    fn peak_is_unit_at_origin_and_decays_with_radius() {
        assert_eq!(peak_height(0.0, 0.0), 1.0);

        let mut last = peak_height(0.0, 0.0);
        for k in 1..=20 {
            let r = k as f32 * 0.1;
            let z = peak_height(r, 0.0);
            assert!(z < last, "peak must decay monotonically with radius");
            last = z;
        }
    }

    #[test]
    fn apex_breathes_between_half_and_three_halves() {
        assert_eq!(apex_factor(0), 1.0);
        for frame in 0..60 {
            let f = apex_factor(frame);
            assert!((0.5..=1.5).contains(&f));
        }
    }

    #[test]
    fn pyramid_has_six_faces_and_oscillating_apex() {
        let frame = build_pyramid(15);
        // 6 faces, 3 corners each
        assert_eq!(frame.mesh.face_vertex_count(), 18);
        let expected = apex_factor(15);
        assert!((frame.z_max - expected).abs() < 1e-6);
    }

    #[test]
    fn grid_scenes_emit_two_triangles_per_cell() {
        for kind in [
            SceneKind::Terrain,
            SceneKind::Quadrants,
            SceneKind::Wave,
            SceneKind::Peak,
        ] {
            let n = 12;
            let frame = build_frame(preset(kind), n, 0).unwrap();
            let expected_faces = 2 * (n - 1) * (n - 1);
            assert_eq!(frame.mesh.face_vertex_count(), expected_faces * 3);
        }
    }

    #[test]
    fn degenerate_grid_surfaces_as_error() {
        let err = build_frame(preset(SceneKind::Terrain), 1, 0).unwrap_err();
        assert!(matches!(err, SceneError::DegenerateGrid(1)));
    }

    #[test]
    fn wave_colors_stay_in_unit_interval() {
        let frame = build_frame(preset(SceneKind::Wave), 20, 37).unwrap();
        assert!(frame
            .mesh
            .colors
            .iter()
            .all(|&c| (0.0..=1.0).contains(&c)));
    }

    #[test]
    fn quadrant_faces_are_constant_within_each_quadrant() {
        let frame = build_frame(preset(SceneKind::Quadrants), 20, 0).unwrap();
        let positions = &frame.mesh.positions;
        let colors = &frame.mesh.colors;

        let faces = frame.mesh.face_vertex_count() / 3;
        let mut checked = 0;
        for f in 0..faces {
            let corner = |k: usize| {
                let base = (f * 3 + k) * 3;
                // lattice (x, y) live in world X/Z
                (positions[base], positions[base + 2])
            };
            let corners = [corner(0), corner(1), corner(2)];

            // cells touching an axis blend two palette colors; skip them
            if corners.iter().any(|&(x, y)| x.abs() < 0.06 || y.abs() < 0.06) {
                continue;
            }

            let expected = color::quadrant_color(corners[0].0, corners[0].1);
            let base = f * 3 * 4;
            assert_eq!(colors[base..base + 4], expected);
            checked += 1;
        }
        assert!(checked > 0, "no interior faces were checked");
    }

    #[test]
    fn terrain_range_covers_sampled_heights() {
        let frame = build_frame(preset(SceneKind::Terrain), 30, 0).unwrap();
        assert!(frame.z_min < frame.z_max);
        for chunk in frame.mesh.positions.chunks_exact(3) {
            assert!(chunk[1] >= frame.z_min - 1e-6);
            assert!(chunk[1] <= frame.z_max + 1e-6);
        }
    }
}
