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

//! src/core/mod.rs
//!
//! Core content module
//!
//! This module contains the data behind the viewer:
//! - Type definitions for topics, exam dates and grade weights
//! - The `ContentProvider` trait the UI queries
//! - `CourseInfo`, the fixed course content
//!
//! Nothing here depends on GTK, so the whole module is unit tested
//! without a display server.

pub mod course;
pub mod provider;
pub mod types;

pub use course::CourseInfo;
pub use provider::ContentProvider;
pub use types::*;

#[cfg(test)]
mod tests;
