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

//! MVC Controller - Mediates between Model (ContentProvider) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Own the injected `ContentProvider` for the lifetime of the window
//! - Track what the text display currently shows
//! - Resolve a button activation to the text it should display
//!
//! # Architecture
//!
//! The Controller holds the Model but doesn't know about GTK4 widgets.
//! The display state machine lives here so it can be tested without a
//! display server; the View only copies the returned text into its buffer.

use std::cell::Cell;

use crate::core::{ContentProvider, CourseInfo, Topic};

/// What the text display is showing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DisplayState {
    /// Nothing activated yet
    #[default]
    Empty,
    /// Showing the block of the most recently activated topic
    Showing(Topic),
}

/// MVC Controller coordinating Model and View
///
/// Shared with GTK signal handlers through `Rc`; state changes go through
/// a `Cell` since everything runs on the GTK main thread.
pub struct Controller<P = CourseInfo> {
    /// Content source (exclusively owned)
    provider: P,
    /// Current display state
    state: Cell<DisplayState>,
}

impl<P: ContentProvider> Controller<P> {
    /// Creates a new Controller around the given content source
    ///
    /// # Example
    ///
    /// ```
    /// use info_poo::core::CourseInfo;
    /// use info_poo::ui::{Controller, DisplayState};
    ///
    /// let controller = Controller::new(CourseInfo::new());
    /// assert_eq!(controller.state(), DisplayState::Empty);
    /// assert!(controller.displayed_text().is_empty());
    /// ```
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: Cell::new(DisplayState::Empty),
        }
    }

    /// Handles a button activation
    ///
    /// Fetches the topic's text synchronously and records the topic as
    /// the one on display. The previous state is discarded.
    ///
    /// # Returns
    ///
    /// The full text the display must now show
    ///
    /// # Example
    ///
    /// ```
    /// use info_poo::core::{CourseInfo, Topic};
    /// use info_poo::ui::{Controller, DisplayState};
    ///
    /// let controller = Controller::new(CourseInfo::new());
    /// let text = controller.activate(Topic::Rules);
    ///
    /// assert!(text.contains("Asistencia mínima del 80%"));
    /// assert_eq!(controller.state(), DisplayState::Showing(Topic::Rules));
    /// ```
    pub fn activate(&self, topic: Topic) -> String {
        let text = self.provider.text_for(topic);
        self.state.set(DisplayState::Showing(topic));
        text
    }

    /// Returns the current display state
    pub fn state(&self) -> DisplayState {
        self.state.get()
    }

    /// Returns the text the display should be showing right now
    ///
    /// Empty before any activation.
    pub fn displayed_text(&self) -> String {
        match self.state.get() {
            DisplayState::Empty => String::new(),
            DisplayState::Showing(topic) => self.provider.text_for(topic),
        }
    }

    /// Returns the injected content source
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
