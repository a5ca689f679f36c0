mod api;
mod config;
mod state;
mod storage;
mod ui;

use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    dash_shell::run("Taskdeck", || Box::new(AppState::new()))
        .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
