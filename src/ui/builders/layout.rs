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

//! Layout builder
//!
//! Creates the main application layout structure.

use gtk4::{prelude::*, Box as GtkBox, Orientation};
use std::rc::Rc;

use crate::ui::components::{InfoDisplay, TopicBar};

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Text display (takes all spare space)
/// - Topic button bar along the bottom edge
///
/// # Returns
///
/// Tuple of (main_vbox, info_display, topic_bar)
pub fn build_main_layout() -> (GtkBox, Rc<InfoDisplay>, Rc<TopicBar>) {
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);

    let info_display = Rc::new(InfoDisplay::new());
    main_vbox.append(info_display.widget());

    let topic_bar = Rc::new(TopicBar::new());
    main_vbox.append(topic_bar.widget());

    (main_vbox, info_display, topic_bar)
}
