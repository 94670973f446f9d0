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

//! Event handler wiring
//!
//! Connects every topic button to the controller and the text display.

use gtk4::prelude::*;
use std::rc::Rc;

use crate::core::{ContentProvider, Topic};
use crate::ui::{
    components::{InfoDisplay, TopicBar},
    Controller, UiError,
};

/// Wires up all topic buttons
///
/// For each topic in `Topic::ALL`, a click asks the controller for the
/// topic's text and replaces the display content with it.
///
/// # Errors
///
/// * `UiError::UnboundTopic` - a topic has no button in the bar. Checked
///   for every topic before any handler is connected, so a wiring defect
///   stops startup instead of showing up on a click.
pub fn wire_up_handlers<P>(
    controller:   Rc<Controller<P>>,
    info_display: Rc<InfoDisplay>,
    topic_bar:    &TopicBar,
) -> Result<(), UiError>
where
    P: ContentProvider + 'static,
{
    let bindings = resolve_bindings(|topic| topic_bar.button(topic))?;

    for (topic, button) in bindings {
        let controller_clone = controller.clone();
        let info_display_clone = info_display.clone();

        button.connect_clicked(move |_| {
            let text = controller_clone.activate(topic);
            info_display_clone.set_text(&text);
            tracing::debug!(topic = %topic, "Topic activated");
        });
    }

    Ok(())
}

/// Looks up the control bound to every topic, in `Topic::ALL` order
///
/// # Errors
///
/// * `UiError::UnboundTopic` - the first topic `lookup` has no control for.
///   Nothing is returned for the other topics in that case.
pub fn resolve_bindings<T>(
    lookup: impl Fn(Topic) -> Option<T>,
) -> Result<Vec<(Topic, T)>, UiError> {
    Topic::ALL
        .iter()
        .map(|&topic| {
            lookup(topic)
                .map(|control| (topic, control))
                .ok_or(UiError::UnboundTopic(topic))
        })
        .collect()
}
