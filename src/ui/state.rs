use crate::renderer::CameraMode;
use crate::scene::SCENE_PRESETS;

pub struct UiState {
    pub selected_scene: usize,

    pub grid_size: u32,

    pub show_edges: bool,
    pub show_axes: bool,
    pub camera_mode: CameraMode,

    pub vsync_enabled: bool,
    pub fps_cap_enabled: bool,
    pub fps_cap: u32,
    pub show_stats: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_scene: 0,

            grid_size: SCENE_PRESETS[0].grid_size as u32,

            show_edges: true,
            show_axes: true,
            camera_mode: CameraMode::Orbit,

            vsync_enabled: true,
            fps_cap_enabled: false,
            fps_cap: 144,
            show_stats: true,
        }
    }
}
