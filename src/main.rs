//! Entry point for info-poo
//!
//! Launches the course information viewer. The process exits when the
//! window is closed.

use anyhow::Context;
use info_poo::{logging, ui::App, CourseInfo};

fn main() -> anyhow::Result<glib::ExitCode> {
    logging::init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting course information viewer"
    );

    let app = App::new(CourseInfo::new());
    let exit_code = app.run().context("Failed to start the viewer")?;

    tracing::info!("Viewer closed");

    Ok(exit_code)
}
