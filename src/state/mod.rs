pub mod expansion;
pub mod session;

pub use expansion::ExpansionState;
pub use session::{SessionPhase, SessionState};

use log::warn;

use dash_shell::layout::LayoutConfig;
use dash_shell::AppShell;

use crate::api::platform::Organization;
use crate::config::AppConfig;
use crate::storage::{DiskStateStore, MemoryStateStore, StateStore};
use crate::ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MainView {
    WorkspaceOverview,
    SelectWorkspace,
}

impl Default for MainView {
    fn default() -> Self {
        MainView::WorkspaceOverview
    }
}

/// Route a sidebar child link resolves to within a workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkspaceRoute {
    Boards,
    Activity,
    Settings,
    Billing,
}

impl WorkspaceRoute {
    pub const ALL: [WorkspaceRoute; 4] = [
        WorkspaceRoute::Boards,
        WorkspaceRoute::Activity,
        WorkspaceRoute::Settings,
        WorkspaceRoute::Billing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkspaceRoute::Boards => "Boards",
            WorkspaceRoute::Activity => "Activity",
            WorkspaceRoute::Settings => "Settings",
            WorkspaceRoute::Billing => "Billing",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkspaceRoute::Boards => "🗂",
            WorkspaceRoute::Activity => "📈",
            WorkspaceRoute::Settings => "⚙",
            WorkspaceRoute::Billing => "💳",
        }
    }
}

impl Default for WorkspaceRoute {
    fn default() -> Self {
        WorkspaceRoute::Boards
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub layout: LayoutConfig,
    pub session: SessionState,
    pub expansion: ExpansionState,
    pub active_view: MainView,
    pub active_route: WorkspaceRoute,
}

impl AppState {
    pub fn new() -> Self {
        let config = AppConfig::load();

        let store: Box<dyn StateStore> = match DiskStateStore::open_default() {
            Some(store) => Box::new(store),
            None => {
                warn!("keeping sidebar state in memory for this session");
                Box::new(MemoryStateStore::default())
            }
        };
        let expansion = ExpansionState::load(store, config.storage_key().to_string());

        let mut session = SessionState::new();
        session.begin_fetch(&config);

        Self {
            config,
            layout: LayoutConfig::default(),
            session,
            expansion,
            active_view: MainView::default(),
            active_route: WorkspaceRoute::default(),
        }
    }

    /// Makes `organization` the active workspace and routes the main view to
    /// one of its pages.
    pub fn open_workspace(&mut self, organization: Organization, route: WorkspaceRoute) {
        self.session.set_active_organization(organization);
        self.active_route = route;
        self.active_view = MainView::WorkspaceOverview;
    }

    pub fn retry_session_fetch(&mut self) {
        let config = self.config.clone();
        self.session.begin_fetch(&config);
    }
}

impl AppShell for AppState {
    fn init(&mut self, cc: &eframe::CreationContext<'_>) {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        ui::theme::apply(&cc.egui_ctx);
    }

    fn update(&mut self, ctx: &eframe::egui::Context) {
        if self.session.poll() {
            ctx.request_repaint();
        }
        ui::draw_ui(ctx, self);
    }
}
