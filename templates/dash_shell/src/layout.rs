use eframe::egui::{self, Color32, Margin, Stroke};

/// Minimal set of style tokens consumed by the shell components.
#[derive(Clone, Debug)]
pub struct ShellTheme {
    pub root_background: Color32,
    pub surface_background: Color32,
    pub header_background: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self {
            root_background: Color32::from_rgb(24, 26, 30),
            surface_background: Color32::from_rgb(32, 34, 38),
            header_background: Color32::from_rgb(40, 42, 48),
            border: Color32::from_rgb(56, 58, 64),
            text_primary: Color32::from_rgb(232, 233, 239),
            text_muted: Color32::from_rgb(172, 176, 184),
            accent: Color32::from_rgb(65, 148, 245),
            accent_soft: Color32::from_rgb(48, 86, 128),
        }
    }
}

/// Controls visibility and width of the navigation panel.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    pub show_navigation: bool,
    pub navigation_width: f32,
    navigation_collapsed: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            show_navigation: true,
            navigation_width: 280.0,
            navigation_collapsed: false,
        }
    }
}

impl LayoutConfig {
    pub fn navigation_collapsed(&self) -> bool {
        self.navigation_collapsed
    }

    pub fn set_navigation_collapsed(&mut self, collapsed: bool) {
        self.navigation_collapsed = collapsed;
    }
}

/// Utility wrapper that paints a main surface panel.
pub fn main_surface_frame(theme: &ShellTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.surface_background)
        .stroke(Stroke::new(1.0, theme.border))
        .inner_margin(Margin {
            left: 18.0,
            right: 18.0,
            top: 18.0,
            bottom: 14.0,
        })
}
