use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub const BG_CANVAS: Color32 = Color32::from_rgb(3, 3, 4);
pub const BG_PANEL: Color32 = Color32::from_rgb(10, 11, 14);
pub const BG_WIDGET: Color32 = Color32::from_rgb(22, 24, 30);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(32, 35, 44);
pub const BG_WIDGET_ACTIVE: Color32 = Color32::from_rgb(42, 46, 58);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(190, 192, 197);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(115, 118, 126);
pub const TEXT_BRIGHT: Color32 = Color32::from_rgb(230, 231, 235);

pub const ACCENT_TEAL: Color32 = Color32::from_rgb(38, 166, 154);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(67, 160, 71);
pub const ACCENT_AMBER: Color32 = Color32::from_rgb(255, 179, 0);
pub const ACCENT_RED: Color32 = Color32::from_rgb(198, 40, 40);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgba_premultiplied(44, 62, 80, 70);

fn widget(
    bg: Color32,
    weak: Color32,
    fg: Color32,
    border: Color32,
    expansion: f32,
) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak,
        bg_stroke: Stroke::new(1.0, border),
        rounding: Rounding::same(4.0),
        fg_stroke: Stroke::new(1.0, fg),
        expansion,
    }
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = Style::default();

    style.visuals = Visuals {
        dark_mode: true,
        override_text_color: Some(TEXT_PRIMARY),

        widgets: egui::style::Widgets {
            noninteractive: widget(BG_WIDGET, BG_PANEL, TEXT_MUTED, BORDER_SUBTLE, 0.0),
            inactive: widget(BG_WIDGET, BG_WIDGET, TEXT_PRIMARY, BORDER_SUBTLE, 0.0),
            hovered: widget(BG_WIDGET_HOVER, BG_WIDGET_HOVER, TEXT_BRIGHT, ACCENT_TEAL, 1.0),
            active: widget(BG_WIDGET_ACTIVE, BG_WIDGET_ACTIVE, TEXT_BRIGHT, ACCENT_TEAL, 1.0),
            open: widget(BG_WIDGET_ACTIVE, BG_WIDGET_ACTIVE, TEXT_BRIGHT, ACCENT_TEAL, 0.0),
        },

        selection: egui::style::Selection {
            bg_fill: ACCENT_TEAL.gamma_multiply(0.35),
            stroke: Stroke::new(1.0, ACCENT_TEAL),
        },

        hyperlink_color: ACCENT_TEAL,
        faint_bg_color: BG_PANEL,
        extreme_bg_color: BG_CANVAS,
        code_bg_color: BG_CANVAS,
        warn_fg_color: ACCENT_AMBER,
        error_fg_color: ACCENT_RED,

        window_rounding: Rounding::same(6.0),
        window_fill: BG_PANEL,
        window_stroke: Stroke::new(1.0, BORDER_SUBTLE),
        panel_fill: BG_PANEL,
        slider_trailing_fill: true,

        ..Visuals::dark()
    };

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.slider_width = 200.0;

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into();

    ctx.set_style(style);
}
