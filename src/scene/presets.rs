#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SceneKind {
    Pyramid,
    Terrain,
    Quadrants,
    Wave,
    Peak,
}

pub struct ScenePreset {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: SceneKind,
    /// Lattice points per side; ignored by the pyramid.
    pub grid_size: usize,
    /// 0 for static scenes.
    pub frame_count: u32,
    pub frame_interval_ms: u64,
    /// Half-extent of the square sampling domain; also sizes the axes.
    pub domain_half: f32,
    /// Orbit camera target.
    pub focus: [f32; 3],
}

impl ScenePreset {
    pub fn animated(&self) -> bool {
        self.frame_count > 0
    }
}

pub const SCENE_PRESETS: &[ScenePreset] = &[
    ScenePreset {
        name: "Breathing Pyramid",
        description: "Six fixed-color faces, apex height oscillating over 60 frames.",
        kind: SceneKind::Pyramid,
        grid_size: 2,
        frame_count: 60,
        frame_interval_ms: 100,
        domain_half: 1.0,
        focus: [0.5, 0.5, 0.5],
    },
    ScenePreset {
        name: "Sinusoidal Terrain",
        description: "Multi-term sine/cosine heightfield, terrain colormap by elevation.",
        kind: SceneKind::Terrain,
        grid_size: 30,
        frame_count: 0,
        frame_interval_ms: 0,
        domain_half: 3.0,
        focus: [0.0, 0.0, 0.0],
    },
    ScenePreset {
        name: "Quadrant Plane",
        description: "Flat plane in four palette colors by the signs of (x, y).",
        kind: SceneKind::Quadrants,
        grid_size: 20,
        frame_count: 0,
        frame_interval_ms: 0,
        domain_half: 1.0,
        focus: [0.0, 0.0, 0.0],
    },
    ScenePreset {
        name: "Breathing Wave",
        description: "Traveling sine/cosine product wave, blue-to-red by elevation, 100 frames.",
        kind: SceneKind::Wave,
        grid_size: 20,
        frame_count: 100,
        frame_interval_ms: 50,
        domain_half: 1.0,
        focus: [0.0, 0.0, 0.0],
    },
    ScenePreset {
        name: "Radial Peak",
        description: "Gaussian peak at the origin, colors graded by center distance.",
        kind: SceneKind::Peak,
        grid_size: 30,
        frame_count: 0,
        frame_interval_ms: 0,
        domain_half: 1.0,
        focus: [0.0, 0.3, 0.0],
    },
];
