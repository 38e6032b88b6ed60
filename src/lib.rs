pub mod app;
pub mod error;
pub mod font;
pub mod integration;
pub mod launch;
pub mod locale;
pub mod logging;
pub mod state;
pub mod ui;

pub use error::{AppError, AppResult};

/// Entrypoint used by the CLI binary. Returns the event-loop status when the
/// dialog is closed without launching; a successful launch never comes back
/// because the payload replaces the process image.
pub fn run() -> AppResult<i32> {
    logging::init();
    tracing::info!("starting wraprun");

    let mut app = app::App::new();
    let status = app.start()?;

    tracing::info!(status, "dialog finished without launching payload");
    Ok(status)
}
