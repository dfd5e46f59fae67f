//! Route Formatter - Application Library
//!
//! Integrates the route model with a command-line front end: a segment chooser
//! dialog, incrementally updated walking and driving directions, and JSON/GPX output.

mod app;
mod logging;

pub use app::settings::Settings;
pub use app::{AppError, RouteFormatterApp};
pub use logging::setup_logging;

/// Parse the command line and run the application on stdin/stdout
pub fn run_cli() -> Result<(), AppError> {
    let settings = Settings::from_cli();
    setup_logging();
    tracing::info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let mut app = RouteFormatterApp::new(settings)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(stdin.lock(), &mut stdout.lock())
}
