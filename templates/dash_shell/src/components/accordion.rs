use eframe::egui::{self, RichText};

use crate::layout::ShellTheme;

#[derive(Clone, Debug, Default)]
pub struct AccordionProps {
    pub sections: Vec<AccordionSection>,
}

/// One expandable section. `open` is owned by the caller and passed in on
/// every frame; the component keeps no open state of its own.
#[derive(Clone, Debug)]
pub struct AccordionSection {
    pub id: String,
    pub title: String,
    pub badge: Option<String>,
    pub active: bool,
    pub open: bool,
}

pub trait AccordionModel {
    fn theme(&self) -> ShellTheme;
    fn on_toggle(&mut self, section_id: &str);
    fn section_body(&mut self, ui: &mut egui::Ui, section_id: &str);
}

pub fn draw_accordion(ui: &mut egui::Ui, props: &AccordionProps, model: &mut dyn AccordionModel) {
    let theme = model.theme();

    for section in &props.sections {
        let response = section_header(ui, &theme, section);
        if response.clicked() {
            model.on_toggle(&section.id);
        }

        if section.open {
            ui.indent(egui::Id::new(("accordion", &section.id)), |ui| {
                model.section_body(ui, &section.id);
            });
        }
        ui.add_space(4.0);
    }
}

fn section_header(
    ui: &mut egui::Ui,
    theme: &ShellTheme,
    section: &AccordionSection,
) -> egui::Response {
    let chevron = if section.open { "▼" } else { "▶" };
    let label = match &section.badge {
        Some(badge) => format!("{chevron}  {badge}  {}", section.title),
        None => format!("{chevron}  {}", section.title),
    };

    let mut text = RichText::new(label).color(theme.text_primary);
    if section.active {
        text = text.strong();
    }

    let button = egui::Button::new(text)
        .fill(if section.active {
            theme.accent_soft
        } else {
            theme.surface_background
        })
        .min_size(egui::vec2(0.0, 32.0));

    ui.add_sized(egui::vec2(ui.available_width(), 32.0), button)
}
