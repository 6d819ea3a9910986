pub mod build;
pub mod color;
pub mod engine;
pub mod grid;
pub mod mesh;
pub mod presets;

pub use engine::{BuildStats, SceneEngine};
pub use presets::{SceneKind, ScenePreset, SCENE_PRESETS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("grid needs at least 2 points per side, got {0}")]
    DegenerateGrid(usize),
}
