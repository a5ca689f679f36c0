use eframe::egui::{self, Color32, Rounding, Stroke};

use dash_shell::layout::ShellTheme;

pub const COLOR_ROOT: Color32 = Color32::from_rgb(24, 26, 30);
pub const COLOR_PANEL: Color32 = Color32::from_rgb(32, 34, 38);
pub const COLOR_HEADER: Color32 = Color32::from_rgb(40, 42, 48);
pub const COLOR_BORDER: Color32 = Color32::from_rgb(56, 58, 64);
pub const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 233, 239);
pub const COLOR_TEXT_WEAK: Color32 = Color32::from_rgb(172, 176, 184);
pub const COLOR_PRIMARY: Color32 = Color32::from_rgb(65, 148, 245);
pub const COLOR_PRIMARY_SOFT: Color32 = Color32::from_rgb(48, 86, 128);
pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(0, 204, 102);
pub const COLOR_DANGER: Color32 = Color32::from_rgb(204, 51, 51);

pub fn subtle_border() -> Stroke {
    Stroke::new(1.0, COLOR_BORDER)
}

/// Style tokens handed to the shell components.
pub fn shell_theme() -> ShellTheme {
    ShellTheme {
        root_background: COLOR_ROOT,
        surface_background: COLOR_PANEL,
        header_background: COLOR_HEADER,
        border: COLOR_BORDER,
        text_primary: COLOR_TEXT_PRIMARY,
        text_muted: COLOR_TEXT_WEAK,
        accent: COLOR_PRIMARY,
        accent_soft: COLOR_PRIMARY_SOFT,
    }
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = COLOR_PANEL;
    style.visuals.window_fill = COLOR_ROOT;
    style.visuals.extreme_bg_color = COLOR_ROOT;
    style.visuals.hyperlink_color = COLOR_PRIMARY;
    style.visuals.selection.bg_fill = COLOR_PRIMARY_SOFT;
    style.visuals.widgets.noninteractive.bg_stroke = subtle_border();
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, COLOR_TEXT_PRIMARY);
    style.visuals.widgets.inactive.rounding = Rounding::same(6.0);
    style.visuals.widgets.hovered.rounding = Rounding::same(6.0);
    style.visuals.widgets.active.rounding = Rounding::same(6.0);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}
