use egui::{Color32, Context, RichText, ScrollArea, Ui};
use std::sync::atomic::Ordering;

use crate::renderer::CameraMode;
use crate::scene::color;
use crate::scene::{BuildStats, SceneKind, ScenePreset, SCENE_PRESETS};
use crate::ui::state::UiState;
use crate::ui::theme::*;

#[derive(Default)]
pub struct UiActions {
    pub select_scene: Option<usize>,
    pub set_grid_size: Option<u32>,
    pub toggle_pause: bool,
    pub restart: bool,
    pub seek: Option<u32>,
}

pub fn draw_side_panel(
    ctx: &Context,
    state: &mut UiState,
    stats: &BuildStats,
    last_error: &Option<String>,
    is_paused: bool,
    current_frame: u32,
    z_range: (f32, f32),
) -> UiActions {
    let mut actions = UiActions::default();
    let preset = &SCENE_PRESETS[state.selected_scene];

    egui::SidePanel::right("control_panel")
        .min_width(320.0)
        .max_width(400.0)
        .default_width(340.0)
        .frame(egui::Frame::default().fill(BG_PANEL).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new("TRISURF").strong());
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Surface Mesh Animator")
                        .color(TEXT_MUTED)
                        .size(11.0),
                );
                ui.add_space(16.0);

                section_header(ui, "SCENE");
                egui::ComboBox::from_id_salt("scene_presets")
                    .selected_text(preset.name)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for (i, p) in SCENE_PRESETS.iter().enumerate() {
                            if ui.selectable_label(state.selected_scene == i, p.name).clicked()
                                && state.selected_scene != i
                            {
                                actions.select_scene = Some(i);
                            }
                        }
                    });
                ui.add_space(4.0);
                ui.label(
                    RichText::new(preset.description)
                        .color(TEXT_MUTED)
                        .size(11.0)
                        .italics(),
                );
                ui.add_space(16.0);

                if preset.kind != SceneKind::Pyramid {
                    section_header(ui, "RESOLUTION");
                    ui.horizontal(|ui| {
                        ui.label("Lattice:");
                        if ui
                            .add(egui::Slider::new(&mut state.grid_size, 8..=128))
                            .changed()
                        {
                            actions.set_grid_size = Some(state.grid_size);
                        }
                    });
                    ui.label(
                        RichText::new(format!(
                            "{} vertices, {} faces",
                            state.grid_size * state.grid_size,
                            2 * (state.grid_size - 1) * (state.grid_size - 1)
                        ))
                        .color(TEXT_MUTED)
                        .size(10.0),
                    );
                    ui.add_space(16.0);
                }

                if preset.animated() {
                    section_header(ui, "PLAYBACK");
                    ui.horizontal(|ui| {
                        let (text, fill) = if is_paused {
                            ("Resume", ACCENT_GREEN)
                        } else {
                            ("Pause", ACCENT_AMBER)
                        };
                        if ui
                            .add(
                                egui::Button::new(RichText::new(text).color(BG_CANVAS))
                                    .fill(fill)
                                    .min_size(egui::vec2(80.0, 28.0)),
                            )
                            .clicked()
                        {
                            actions.toggle_pause = true;
                        }
                        if ui.button("Restart").clicked() {
                            actions.restart = true;
                        }
                    });
                    ui.add_space(8.0);

                    let last = preset.frame_count - 1;
                    let mut frame = current_frame.min(last);
                    ui.horizontal(|ui| {
                        ui.label("Frame:");
                        if ui.add(egui::Slider::new(&mut frame, 0..=last)).changed() {
                            actions.seek = Some(frame);
                        }
                    });
                    ui.label(
                        RichText::new(format!(
                            "{} of {} at {} ms",
                            current_frame, preset.frame_count, preset.frame_interval_ms
                        ))
                        .color(TEXT_MUTED)
                        .size(10.0),
                    );
                    ui.add_space(16.0);
                }

                ui.separator();
                ui.add_space(12.0);

                section_header(ui, "VIEW");
                camera_controls(ui, &mut state.camera_mode);
                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.show_edges, "Edges");
                    ui.checkbox(&mut state.show_axes, "Axes");
                });
                ui.add_space(16.0);

                if let Some(cmap) = elevation_cmap(preset) {
                    section_header(ui, "ELEVATION");
                    colorbar(ui, z_range, cmap);
                    ui.add_space(16.0);
                }

                perf_controls(ui, state);
                ui.add_space(16.0);

                if let Some(err) = last_error {
                    egui::Frame::default()
                        .fill(Color32::from_rgb(40, 15, 15))
                        .stroke(egui::Stroke::new(1.0, ACCENT_RED))
                        .rounding(4.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(err).color(ACCENT_RED).size(11.0));
                        });
                    ui.add_space(16.0);
                }

                if state.show_stats {
                    ui.separator();
                    ui.add_space(12.0);
                    stats_panel(ui, stats, is_paused && preset.animated());
                }
            });
        });

    actions
}

fn elevation_cmap(preset: &ScenePreset) -> Option<fn(f32) -> [f32; 4]> {
    match preset.kind {
        SceneKind::Terrain => Some(color::terrain_colormap),
        SceneKind::Wave => Some(color::elevation_blend),
        _ => None,
    }
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

fn camera_controls(ui: &mut Ui, mode: &mut CameraMode) {
    ui.horizontal(|ui| {
        ui.label("Camera:");
        if ui.selectable_label(*mode == CameraMode::Orbit, "Orbit").clicked() {
            *mode = CameraMode::Orbit;
        }
        if ui.selectable_label(*mode == CameraMode::Free, "Free").clicked() {
            *mode = CameraMode::Free;
        }
    });
}

fn colorbar(ui: &mut Ui, z_range: (f32, f32), cmap: fn(f32) -> [f32; 4]) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 14.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter();

    let steps = 48;
    let slice_width = rect.width() / steps as f32;
    for k in 0..steps {
        let t = (k as f32 + 0.5) / steps as f32;
        let c = cmap(t);
        let fill = Color32::from_rgb(
            (c[0] * 255.0) as u8,
            (c[1] * 255.0) as u8,
            (c[2] * 255.0) as u8,
        );
        let x0 = rect.left() + k as f32 * slice_width;
        let slice = egui::Rect::from_min_max(
            egui::pos2(x0, rect.top()),
            egui::pos2(x0 + slice_width, rect.bottom()),
        );
        painter.rect_filled(slice, 0.0, fill);
    }

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{:.2}", z_range.0))
                .color(TEXT_MUTED)
                .size(10.0),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{:.2}", z_range.1))
                    .color(TEXT_MUTED)
                    .size(10.0),
            );
        });
    });
}

fn perf_controls(ui: &mut Ui, state: &mut UiState) {
    section_header(ui, "PERFORMANCE");
    ui.horizontal(|ui| {
        ui.checkbox(&mut state.vsync_enabled, "VSync");
        ui.checkbox(&mut state.show_stats, "Stats");
    });
    ui.horizontal(|ui| {
        ui.checkbox(&mut state.fps_cap_enabled, "FPS Cap:");
        ui.add_enabled(
            state.fps_cap_enabled,
            egui::DragValue::new(&mut state.fps_cap)
                .range(30..=500)
                .suffix(" fps"),
        );
    });
}

fn stats_panel(ui: &mut Ui, stats: &BuildStats, paused: bool) {
    section_header(ui, "STATISTICS");
    egui::Frame::default()
        .fill(BG_WIDGET)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.style_mut().override_font_id =
                Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));

            let fps = *stats.fps.lock();
            let fps_color = if fps >= 60.0 {
                ACCENT_GREEN
            } else if fps >= 30.0 {
                ACCENT_AMBER
            } else {
                ACCENT_RED
            };

            egui::Grid::new("stats")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("FPS").color(TEXT_MUTED));
                    ui.label(RichText::new(format!("{:.0}", fps)).color(fps_color));
                    ui.end_row();

                    ui.label(RichText::new("Vertices").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(fmt_num(stats.vertices.load(Ordering::Relaxed)))
                            .color(TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Triangles").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(fmt_num(stats.triangles.load(Ordering::Relaxed)))
                            .color(TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Build ms").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{:.2}", *stats.last_build_ms.lock()))
                            .color(ACCENT_TEAL),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Frames built").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(fmt_num(
                            stats.frames_built.load(Ordering::Relaxed) as usize
                        ))
                        .color(TEXT_PRIMARY),
                    );
                    ui.end_row();
                });

            if paused {
                ui.add_space(8.0);
                ui.label(RichText::new("PAUSED").color(ACCENT_AMBER).strong());
            }
        });
}

pub fn draw_help_overlay(ctx: &Context, pos: [f32; 3], mode: CameraMode) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_black_alpha(180))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    let bindings = match mode {
                        CameraMode::Orbit => "RMB+Drag - Orbit | Scroll - Zoom | P - Pause",
                        CameraMode::Free => "WASD - Move | RMB+Drag - Look | Scroll - Speed",
                    };
                    ui.label(RichText::new(bindings).color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!(
                            "Eye: ({:.1}, {:.1}, {:.1})",
                            pos[0], pos[1], pos[2]
                        ))
                        .color(TEXT_MUTED),
                    );
                });
        });
}

fn fmt_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}
