// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. The window gets its content through the Controller,
//! which owns the injected `ContentProvider`.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Owns Controller (and through it, the ContentProvider)
//!   ├─ Builds main window (text display + topic buttons)
//!   └─ Wires each button to Controller::activate
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{ContentProvider, CourseInfo};
use crate::ui::actions::setup_quit_action;
use crate::ui::builders::{build_main_layout, wire_up_handlers};
use crate::ui::{Controller, UiError};

/// GTK application id
pub const APP_ID: &str = "com.tidynest.info-poo";
/// Main window title
pub const WINDOW_TITLE: &str = "Información POO";
/// Initial window width in pixels
pub const DEFAULT_WIDTH: i32 = 500;
/// Initial window height in pixels
pub const DEFAULT_HEIGHT: i32 = 400;

/// GTK4 Application showing the course information viewer
pub struct App<P = CourseInfo> {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller<P>>,
}

impl<P: ContentProvider + 'static> App<P> {
    /// Creates a new App around the given content source
    ///
    /// # Example
    ///
    /// ```no_run
    /// use info_poo::core::CourseInfo;
    /// use info_poo::ui::App;
    ///
    /// let app = App::new(CourseInfo::new());
    /// ```
    pub fn new(provider: P) -> Self {
        let app = Application::builder()
            .application_id(APP_ID)
            .build();

        let controller = Rc::new(Controller::new(provider));

        Self { app, controller }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the window is
    /// closed. GTK gets an empty argument list: the viewer takes no
    /// command-line options.
    ///
    /// # Returns
    ///
    /// * `Ok(ExitCode)` - Main loop finished (window closed or quit action)
    /// * `Err(UiError)` - The main window could not be built
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use info_poo::core::CourseInfo;
    /// # use info_poo::ui::App;
    /// let app = App::new(CourseInfo::new());
    /// app.run()?;  // Blocks until window closes
    /// # Ok::<(), info_poo::ui::UiError>(())
    /// ```
    pub fn run(self) -> Result<glib::ExitCode, UiError> {
        let controller = self.controller.clone();
        let startup_error: Rc<RefCell<Option<UiError>>> = Rc::new(RefCell::new(None));
        let startup_error_clone = startup_error.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            if let Err(e) = Self::build_ui(app, controller.clone()) {
                tracing::error!(error = %e, "Failed to build main window");
                *startup_error_clone.borrow_mut() = Some(e);
                app.quit();
            }
        });

        // Run the application (blocks until exit)
        let exit_code = self.app.run_with_args::<&str>(&[]);

        match startup_error.take() {
            Some(e) => Err(e),
            None => Ok(exit_code),
        }
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() -> Result<(), UiError> {
        let display = gdk::Display::default().ok_or(UiError::DisplayUnavailable)?;

        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    /// Builds the main window UI
    ///
    /// Called when the application activates. A second activation (the
    /// app launched again while running) re-presents the existing window.
    fn build_ui(app: &Application, controller: Rc<Controller<P>>) -> Result<(), UiError> {
        if let Some(window) = app.active_window() {
            window.present();
            return Ok(());
        }

        Self::load_css()?;

        // GTK4 has no window placement API; the compositor decides where it opens
        let window = ApplicationWindow::builder()
            .application(app)
            .title(WINDOW_TITLE)
            .default_width(DEFAULT_WIDTH)
            .default_height(DEFAULT_HEIGHT)
            .build();

        let (main_vbox, info_display, topic_bar) = build_main_layout();
        wire_up_handlers(controller.clone(), info_display.clone(), &topic_bar)?;

        // Initial display (empty until a topic is activated)
        info_display.set_text(&controller.displayed_text());

        window.set_child(Some(&main_vbox));
        setup_quit_action(app);

        // Closing the only window ends the main loop
        window.present();
        tracing::info!(title = WINDOW_TITLE, "Main window shown");

        Ok(())
    }
}
