use eframe::egui::{self, RichText};

use dash_shell::layout::main_surface_frame;

use crate::state::{AppState, WorkspaceRoute};
use crate::ui::theme;

pub fn draw_workspace_panel(ctx: &egui::Context, state: &mut AppState) {
    let shell = theme::shell_theme();

    egui::CentralPanel::default()
        .frame(main_surface_frame(&shell))
        .show(ctx, |ui| match &state.session.active_organization {
            Some(organization) => {
                ui.horizontal(|ui| {
                    if let Some(url) = &organization.image_url {
                        ui.add(
                            egui::Image::new(url.as_str())
                                .max_width(28.0)
                                .rounding(egui::Rounding::same(6.0)),
                        );
                    }
                    ui.heading(
                        RichText::new(&organization.name)
                            .color(theme::COLOR_TEXT_PRIMARY)
                            .strong(),
                    );
                });
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        state.active_route.icon(),
                        state.active_route.label()
                    ))
                    .color(theme::COLOR_TEXT_WEAK),
                );
                ui.add_space(14.0);
                ui.label(RichText::new(route_blurb(state.active_route)).color(theme::COLOR_TEXT_WEAK));
            }
            None => {
                ui.heading(RichText::new("Welcome").color(theme::COLOR_TEXT_PRIMARY));
                ui.label(
                    RichText::new("Pick a workspace from the sidebar to get started.")
                        .color(theme::COLOR_TEXT_WEAK),
                );
            }
        });
}

fn route_blurb(route: WorkspaceRoute) -> &'static str {
    match route {
        WorkspaceRoute::Boards => "Boards for this workspace will show up here.",
        WorkspaceRoute::Activity => "Recent activity across the workspace.",
        WorkspaceRoute::Settings => "Workspace name, members and permissions.",
        WorkspaceRoute::Billing => "Plan, invoices and payment details.",
    }
}
