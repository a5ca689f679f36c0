use eframe::egui;

use crate::state::{AppState, MainView};

pub mod select_workspace;
pub mod sidebar;
pub mod theme;
pub mod workspace;

pub fn draw_ui(ctx: &egui::Context, state: &mut AppState) {
    sidebar::draw_sidebar(ctx, state);
    match state.active_view {
        MainView::WorkspaceOverview => workspace::draw_workspace_panel(ctx, state),
        MainView::SelectWorkspace => select_workspace::draw_select_panel(ctx, state),
    }
}
