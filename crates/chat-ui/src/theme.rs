//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(52, 53, 65);
pub const BG_SIDEBAR: Color32 = Color32::from_rgb(0, 0, 0);
pub const BG_ASSISTANT: Color32 = Color32::from_rgb(68, 70, 84);
pub const BG_USER: Color32 = Color32::from_rgb(52, 53, 65);
pub const BG_SURFACE: Color32 = Color32::from_rgb(64, 65, 79);
pub const BG_SELECTED: Color32 = Color32::from_rgb(42, 43, 50);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 236, 241);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(142, 142, 160);
pub const ACCENT: Color32 = Color32::from_rgb(171, 104, 255);
pub const ASSISTANT_BADGE: Color32 = Color32::from_rgb(16, 163, 127);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const SIDEBAR_WIDTH: f32 = 260.0;

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SURFACE;
    style.visuals.extreme_bg_color = BG_SURFACE;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SELECTED;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = BG_SELECTED;
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
