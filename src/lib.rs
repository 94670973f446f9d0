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

//! Información POO
//!
//! A small GTK4 viewer for the POO course: class rules, Classroom
//! guidelines, partial exam dates and grading percentages, one button
//! each.
//!
//! # Architecture
//!
//! - **`core`:** Course content (topics, typed exam data, `ContentProvider`)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//! - **`logging`:** tracing subscriber setup
//!
//! # Examples
//!
//! ## Querying content
//!
//! ```
//! use info_poo::core::{ContentProvider, CourseInfo, Topic};
//!
//! let info = CourseInfo::new();
//! println!("{}", info.text_for(Topic::ExamDates));
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use info_poo::core::CourseInfo;
//! use info_poo::ui::App;
//!
//! let app = App::new(CourseInfo::new());
//! app.run()?; // Blocks until window closes
//! # Ok::<(), info_poo::ui::UiError>(())
//! ```

pub mod core;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{ContentProvider, CourseInfo, Topic};
