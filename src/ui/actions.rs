//! GTK Action setup for the application
//!
//! This module contains the application-level GTK actions and their
//! keyboard accelerators.

use gtk4::{gio, prelude::*, Application};

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered,
/// reachable with Ctrl+Q.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        tracing::info!("Quit requested");
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Ctrl>q"]);
}
