use eframe::egui;
use eframe::{App, CreationContext, Frame, NativeOptions};

pub mod components;
pub mod layout;

/// Abstracts the state and behavior of an egui-based shell application.
pub trait AppShell: 'static {
    /// Initializes the state with the eframe creation context.
    fn init(&mut self, cc: &CreationContext<'_>);

    /// Renders the shell each frame with access to the global egui context.
    fn update(&mut self, ctx: &egui::Context);
}

struct ShellApp {
    shell: Box<dyn AppShell>,
}

impl ShellApp {
    fn new(mut shell: Box<dyn AppShell>, cc: &CreationContext<'_>) -> Self {
        shell.init(cc);
        Self { shell }
    }
}

impl App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.shell.update(ctx);
    }
}

/// Runs a reusable egui shell application.
///
/// The `app_builder` is invoked exactly once to create the concrete state
/// implementing [`AppShell`]. That state is initialized with the
/// [`CreationContext`] and afterwards receives [`AppShell::update`] calls on
/// every frame.
pub fn run(
    app_name: &str,
    app_builder: impl FnOnce() -> Box<dyn AppShell> + 'static,
) -> Result<(), eframe::Error> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(1280.0, 800.0))
            .with_maximized(true),
        ..Default::default()
    };

    let mut builder = Some(app_builder);

    eframe::run_native(
        app_name,
        options,
        Box::new(move |cc| {
            let shell = builder
                .take()
                .expect("app_builder can only be invoked once")();
            Box::new(ShellApp::new(shell, cc))
        }),
    )
}
