use eframe::egui::{self, Color32, Rounding, Sense, Vec2};

use crate::layout::ShellTheme;

/// Pulsing placeholder block shown while upstream data loads.
pub fn skeleton_block(ui: &mut egui::Ui, theme: &ShellTheme, size: Vec2) {
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let time = ui.input(|i| i.time);
    let pulse = (((time * 2.0).sin() + 1.0) * 0.5) as f32;
    let fill = mix(theme.header_background, theme.accent_soft, pulse * 0.35);

    ui.painter().rect_filled(rect, Rounding::same(6.0), fill);
    ui.ctx().request_repaint();
}

/// Icon square plus a text bar, shaped like a collapsed navigation row.
pub fn skeleton_row(ui: &mut egui::Ui, theme: &ShellTheme) {
    ui.horizontal(|ui| {
        skeleton_block(ui, theme, Vec2::splat(28.0));
        let bar_width = (ui.available_width() * 0.7).max(60.0);
        skeleton_block(ui, theme, Vec2::new(bar_width, 16.0));
    });
}

fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(
        lerp(a.r(), b.r()),
        lerp(a.g(), b.g()),
        lerp(a.b(), b.b()),
    )
}
