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

//! Information display component
//!
//! Read-only, scrollable text region that shows one course block at a time.
//! Lines are not wrapped; long lines scroll horizontally.

use gtk4::{prelude::*, ScrolledWindow, TextView};

/// Scrollable, non-editable text display
pub struct InfoDisplay {
    /// Root widget (scrolled window)
    widget: ScrolledWindow,
    /// Text view inside the scrolled window
    text_view: TextView,
}

impl Default for InfoDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoDisplay {
    /// Creates an empty display
    pub fn new() -> Self {
        let text_view = TextView::builder()
            .editable(false)
            .cursor_visible(false)
            .left_margin(8)
            .right_margin(8)
            .top_margin(8)
            .bottom_margin(8)
            .build();
        text_view.add_css_class("info-text");

        let widget = ScrolledWindow::builder()
            .child(&text_view)
            .hexpand(true)
            .vexpand(true)
            .build();

        Self { widget, text_view }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }

    /// Replaces the whole content of the display
    pub fn set_text(&self, text: &str) {
        self.text_view.buffer().set_text(text);
    }
}
