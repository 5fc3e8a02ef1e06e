pub mod app;
mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod motion;
pub mod sheet;
pub mod state;
pub mod timer;
pub mod tokens;
pub use config::{ConfigError, ConfigResult, OverrideReport, TokenOverrides};
pub use error::{AppError, AppResult};

/// Entrypoint used by the command-line binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting sheetkit");

    let app = app::App::new();
    let summary = app.start(std::env::args().skip(1))?;

    tracing::info!(
        accepted = summary.accepted,
        ignored = summary.ignored,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "session complete with state={:?}",
        summary.final_state
    );
    Ok(())
}
