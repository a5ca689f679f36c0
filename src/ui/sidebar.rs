use eframe::egui::{self, Margin, RichText, Vec2};
use egui_extras::{Size, StripBuilder};

use dash_shell::components::accordion::{
    draw_accordion, AccordionModel, AccordionProps, AccordionSection,
};
use dash_shell::components::skeleton::{skeleton_block, skeleton_row};
use dash_shell::layout::ShellTheme;

use crate::api::platform::Organization;
use crate::state::{AppState, ExpansionState, MainView, SessionPhase, SessionState, WorkspaceRoute};
use crate::ui::theme;

/// Fixed table of outbound links rendered under the workspace list. Each row
/// opens in a new browser tab.
struct ExternalLink {
    label: &'static str,
    url: &'static str,
    icon: &'static str,
}

const EXTERNAL_LINKS: &[ExternalLink] = &[
    ExternalLink {
        label: "taskify",
        url: "https://synclab-demo.vercel.app/documents",
        icon: "🗂",
    },
    ExternalLink {
        label: "dotRead",
        url: "https://dotread.netlify.app/",
        icon: "📖",
    },
    ExternalLink {
        label: "dotPackages",
        url: "https://dotpackages.netlify.app/",
        icon: "📦",
    },
    ExternalLink {
        label: "nextDraw",
        url: "https://next-draw.vercel.app/",
        icon: "🖊",
    },
    ExternalLink {
        label: "vanishMark",
        url: "https://erasor-clone.vercel.app/",
        icon: "📐",
    },
    ExternalLink {
        label: "fuzzie",
        url: "https://localhost:3000/workflows",
        icon: "🔗",
    },
    ExternalLink {
        label: "calendar",
        url: "https://calendar.google.com/calendar",
        icon: "📅",
    },
];

pub fn draw_sidebar(ctx: &egui::Context, state: &mut AppState) {
    if !state.layout.show_navigation {
        return;
    }

    let shell = theme::shell_theme();

    if state.layout.navigation_collapsed() {
        egui::SidePanel::left("sidebar_collapsed")
            .resizable(false)
            .exact_width(36.0)
            .frame(
                egui::Frame::none()
                    .fill(theme::COLOR_PANEL)
                    .stroke(theme::subtle_border())
                    .inner_margin(Margin::same(6.0)),
            )
            .show(ctx, |ui| {
                if ui.button("▶").on_hover_text("Expand sidebar").clicked() {
                    state.layout.set_navigation_collapsed(false);
                }
            });
        return;
    }

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(state.layout.navigation_width)
        .frame(
            egui::Frame::none()
                .fill(theme::COLOR_PANEL)
                .stroke(theme::subtle_border())
                .inner_margin(Margin {
                    left: 16.0,
                    right: 16.0,
                    top: 18.0,
                    bottom: 18.0,
                }),
        )
        .show(ctx, |ui| {
            ui.set_width(ui.available_width());
            match state.session.phase() {
                SessionPhase::Loading => draw_loading_placeholder(ui, &shell),
                SessionPhase::Failed => draw_fetch_error(ui, state),
                SessionPhase::Ready => draw_workspace_list(ui, state),
            }
        });
}

/// Fixed-shape placeholder: two blocks in a header row, three rows below.
/// No session or storage data is consulted on this path.
fn draw_loading_placeholder(ui: &mut egui::Ui, shell: &ShellTheme) {
    ui.allocate_ui(egui::vec2(ui.available_width(), 36.0), |ui| {
        StripBuilder::new(ui)
            .size(Size::relative(0.5))
            .size(Size::remainder())
            .size(Size::exact(36.0))
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    skeleton_block(ui, shell, egui::vec2(ui.available_width(), 36.0));
                });
                strip.empty();
                strip.cell(|ui| {
                    skeleton_block(ui, shell, Vec2::splat(36.0));
                });
            });
    });

    ui.add_space(10.0);
    for _ in 0..3 {
        skeleton_row(ui, shell);
        ui.add_space(4.0);
    }
}

fn draw_fetch_error(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(8.0);
    ui.label(RichText::new("Couldn't load your workspaces.").color(theme::COLOR_DANGER));
    if let Some(error) = state.session.error() {
        ui.label(
            RichText::new(error)
                .color(theme::COLOR_TEXT_WEAK)
                .size(11.0),
        );
    }
    ui.add_space(4.0);
    if ui.button("Retry").clicked() {
        state.retry_session_fetch();
    }
}

fn draw_workspace_list(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Workspaces")
                .color(theme::COLOR_TEXT_WEAK)
                .size(12.0)
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let collapse = ui
                .add(egui::Button::new("◀").min_size(egui::vec2(24.0, 24.0)))
                .on_hover_text("Collapse sidebar");
            if collapse.clicked() {
                state.layout.set_navigation_collapsed(true);
            }

            let add = ui
                .add(egui::Button::new("＋").min_size(egui::vec2(24.0, 24.0)))
                .on_hover_text("New or switch workspace");
            if add.clicked() {
                state.active_view = MainView::SelectWorkspace;
            }
        });
    });
    ui.add_space(8.0);

    let props = workspace_sections(&state.session, &state.expansion);
    let footer_height = 30.0;

    egui::ScrollArea::vertical()
        .id_source("sidebar_scroll")
        .auto_shrink([false, false])
        .max_height((ui.available_height() - footer_height).max(0.0))
        .show(ui, |ui| {
            if props.sections.is_empty() {
                ui.label(RichText::new("No workspaces yet.").color(theme::COLOR_TEXT_WEAK));
            } else {
                let mut accordion = SidebarAccordion { state: &mut *state };
                draw_accordion(ui, &props, &mut accordion);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);
            for link in EXTERNAL_LINKS {
                external_link_row(ui, link);
            }
        });

    if let Some(fetched_at) = state.session.fetched_at {
        ui.separator();
        ui.horizontal(|ui| {
            let (rect, _response) =
                ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 4.0, theme::COLOR_SUCCESS);
            ui.label(
                RichText::new(format!("Synced {}", fetched_at.format("%H:%M")))
                    .color(theme::COLOR_TEXT_WEAK)
                    .size(11.0),
            );
        });
    }
}

/// Maps memberships onto accordion sections, in platform order. The open set
/// is derived from the persisted expansion map on every pass.
fn workspace_sections(session: &SessionState, expansion: &ExpansionState) -> AccordionProps {
    let open = expansion.default_open_sections();

    AccordionProps {
        sections: session
            .memberships
            .iter()
            .map(|membership| {
                let organization = &membership.organization;
                AccordionSection {
                    id: organization.id.clone(),
                    title: display_name(organization),
                    badge: initial_badge(organization),
                    active: session.is_active(&organization.id),
                    open: open.contains(&organization.id),
                }
            })
            .collect(),
    }
}

fn display_name(organization: &Organization) -> String {
    if organization.name.trim().is_empty() {
        organization.id.clone()
    } else {
        organization.name.clone()
    }
}

fn initial_badge(organization: &Organization) -> Option<String> {
    display_name(organization)
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
}

struct SidebarAccordion<'a> {
    state: &'a mut AppState,
}

impl AccordionModel for SidebarAccordion<'_> {
    fn theme(&self) -> ShellTheme {
        theme::shell_theme()
    }

    fn on_toggle(&mut self, section_id: &str) {
        self.state.expansion.toggle(section_id);
    }

    fn section_body(&mut self, ui: &mut egui::Ui, section_id: &str) {
        // The expansion map is the single source of truth for open state.
        if !self.state.expansion.is_expanded(section_id) {
            return;
        }

        let Some(organization) = self
            .state
            .session
            .memberships
            .iter()
            .find(|membership| membership.organization.id == section_id)
            .map(|membership| membership.organization.clone())
        else {
            return;
        };

        for route in WorkspaceRoute::ALL {
            let selected = self.state.session.is_active(&organization.id)
                && self.state.active_route == route
                && self.state.active_view == MainView::WorkspaceOverview;

            let text = RichText::new(format!("{} {}", route.icon(), route.label()))
                .color(theme::COLOR_TEXT_PRIMARY);
            let button = egui::Button::new(text)
                .fill(if selected {
                    theme::COLOR_PRIMARY_SOFT
                } else {
                    theme::COLOR_PANEL
                })
                .min_size(egui::vec2(0.0, 26.0));

            if ui
                .add_sized(egui::vec2(ui.available_width(), 26.0), button)
                .clicked()
            {
                self.state.open_workspace(organization.clone(), route);
            }
        }
    }
}

fn external_link_row(ui: &mut egui::Ui, link: &ExternalLink) {
    let text = RichText::new(format!("{}  {}", link.icon, link.label))
        .color(theme::COLOR_TEXT_PRIMARY);
    let response = ui
        .add(egui::Button::new(text).frame(false))
        .on_hover_text(link.url);

    if response.clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(link.url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::platform::OrganizationMembership;
    use crate::state::expansion::DEFAULT_STORAGE_KEY;
    use crate::state::session::SessionEvent;
    use crate::storage::{MemoryStateStore, StateStore};

    fn organization(id: &str, name: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            image_url: None,
        }
    }

    fn ready_session(memberships: Vec<OrganizationMembership>) -> SessionState {
        let mut session = SessionState::new();
        session
            .events_tx
            .send(SessionEvent::ActiveOrganization(None))
            .unwrap();
        session
            .events_tx
            .send(SessionEvent::Memberships(memberships))
            .unwrap();
        session.poll();
        session
    }

    fn expansion_with(raw: Option<&str>) -> ExpansionState {
        let mut store = MemoryStateStore::default();
        if let Some(raw) = raw {
            store.write(DEFAULT_STORAGE_KEY, raw).unwrap();
        }
        ExpansionState::load(Box::new(store), DEFAULT_STORAGE_KEY)
    }

    fn memberships() -> Vec<OrganizationMembership> {
        vec![
            OrganizationMembership {
                organization: organization("org_1", "Alpha"),
                role: None,
            },
            OrganizationMembership {
                organization: organization("org_2", "Beta"),
                role: None,
            },
        ]
    }

    #[test]
    fn empty_storage_renders_everything_collapsed() {
        let session = ready_session(memberships());
        let expansion = expansion_with(None);

        let props = workspace_sections(&session, &expansion);
        assert_eq!(props.sections.len(), 2);
        assert!(props.sections.iter().all(|section| !section.open));
    }

    #[test]
    fn only_sections_stored_as_true_start_open() {
        let session = ready_session(memberships());
        let expansion = expansion_with(Some(r#"{"org_1":true,"org_2":false}"#));

        let props = workspace_sections(&session, &expansion);
        assert!(props.sections[0].open);
        assert!(!props.sections[1].open);
    }

    #[test]
    fn active_flag_follows_the_selected_organization() {
        let mut session = ready_session(memberships());
        session.set_active_organization(organization("org_2", "Beta"));
        let expansion = expansion_with(None);

        let props = workspace_sections(&session, &expansion);
        assert!(!props.sections[0].active);
        assert!(props.sections[1].active);
    }

    #[test]
    fn sections_keep_platform_order() {
        let session = ready_session(memberships());
        let expansion = expansion_with(None);

        let props = workspace_sections(&session, &expansion);
        let ids: Vec<&str> = props
            .sections
            .iter()
            .map(|section| section.id.as_str())
            .collect();
        assert_eq!(ids, vec!["org_1", "org_2"]);
    }

    #[test]
    fn nameless_organization_falls_back_to_its_id() {
        let org = organization("org_9", "  ");
        assert_eq!(display_name(&org), "org_9");
        assert_eq!(initial_badge(&org).as_deref(), Some("O"));
    }

    #[test]
    fn external_links_are_well_formed() {
        assert!(!EXTERNAL_LINKS.is_empty());

        let mut labels: Vec<&str> = EXTERNAL_LINKS.iter().map(|link| link.label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), EXTERNAL_LINKS.len());

        for link in EXTERNAL_LINKS {
            assert!(link.url.starts_with("https://"), "{}", link.url);
        }
    }
}
