use eframe::egui::{self, RichText};

use dash_shell::components::skeleton::skeleton_row;
use dash_shell::layout::main_surface_frame;

use crate::state::{AppState, MainView, SessionPhase, WorkspaceRoute};
use crate::ui::theme;

pub fn draw_select_panel(ctx: &egui::Context, state: &mut AppState) {
    let shell = theme::shell_theme();

    egui::CentralPanel::default()
        .frame(main_surface_frame(&shell))
        .show(ctx, |ui| {
            ui.heading(RichText::new("Choose a workspace").color(theme::COLOR_TEXT_PRIMARY));
            ui.label(
                RichText::new("The selected workspace becomes active everywhere.")
                    .color(theme::COLOR_TEXT_WEAK),
            );
            ui.add_space(12.0);

            match state.session.phase() {
                SessionPhase::Loading => {
                    for _ in 0..3 {
                        skeleton_row(ui, &shell);
                        ui.add_space(4.0);
                    }
                }
                SessionPhase::Failed => {
                    ui.label(
                        RichText::new("Couldn't load your workspaces.")
                            .color(theme::COLOR_DANGER),
                    );
                    if ui.button("Retry").clicked() {
                        state.retry_session_fetch();
                    }
                }
                SessionPhase::Ready => {
                    if state.session.memberships.is_empty() {
                        ui.label(
                            RichText::new("You don't belong to any workspace yet.")
                                .color(theme::COLOR_TEXT_WEAK),
                        );
                    }

                    let organizations: Vec<_> = state
                        .session
                        .memberships
                        .iter()
                        .map(|membership| membership.organization.clone())
                        .collect();

                    for organization in organizations {
                        let active = state.session.is_active(&organization.id);
                        let mut text =
                            RichText::new(&organization.name).color(theme::COLOR_TEXT_PRIMARY);
                        if active {
                            text = text.strong();
                        }

                        let button = egui::Button::new(text)
                            .fill(if active {
                                theme::COLOR_PRIMARY_SOFT
                            } else {
                                theme::COLOR_PANEL
                            })
                            .min_size(egui::vec2(0.0, 32.0));

                        if ui
                            .add_sized(egui::vec2(ui.available_width().min(420.0), 32.0), button)
                            .clicked()
                        {
                            state.open_workspace(organization, WorkspaceRoute::Boards);
                        }
                        ui.add_space(4.0);
                    }
                }
            }

            ui.add_space(12.0);
            if ui.button("Back").clicked() {
                state.active_view = MainView::WorkspaceOverview;
            }
        });
}
