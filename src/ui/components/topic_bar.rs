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

//! Topic button bar
//!
//! One row of equally sized buttons, one per topic, in `Topic::ALL` order.

use gtk4::{prelude::*, Box as GtkBox, Button, Orientation};

use crate::core::Topic;

/// Horizontal bar holding the four topic buttons
pub struct TopicBar {
    /// Root widget (horizontal box)
    widget: GtkBox,
    /// Buttons paired with the topic they show
    buttons: Vec<(Topic, Button)>,
}

impl Default for TopicBar {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicBar {
    /// Creates the bar with one labelled button per topic
    ///
    /// Returns just the widgets - the parent is responsible for wiring
    /// clicks to the controller (see `builders::handlers`).
    pub fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(5)
            .homogeneous(true)
            .margin_top(5)
            .margin_bottom(5)
            .margin_start(5)
            .margin_end(5)
            .build();

        let buttons: Vec<(Topic, Button)> = Topic::ALL
            .iter()
            .map(|&topic| {
                let button = Button::builder().label(topic.label()).build();
                widget.append(&button);
                (topic, button)
            })
            .collect();

        Self { widget, buttons }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Returns the button bound to `topic`, if any
    pub fn button(&self, topic: Topic) -> Option<&Button> {
        self.buttons
            .iter()
            .find(|(bound, _)| *bound == topic)
            .map(|(_, button)| button)
    }
}
