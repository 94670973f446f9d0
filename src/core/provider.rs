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

//! src/core/provider.rs
//!
//! Content source abstraction
//!
//! The viewer never builds its own text: it receives a `ContentProvider`
//! at construction and asks it for one block per activation. Keeping this
//! a trait lets the controller be exercised with stub providers and no
//! display server.

use crate::core::types::Topic;

/// Source of the four fixed information blocks
///
/// Every query is total and pure: calling it twice returns the same
/// bytes, and it never touches the UI.
pub trait ContentProvider {
    /// Class rules (attendance, behaviour, deadlines, participation)
    fn rules_text(&self) -> String;

    /// Classroom submission and plagiarism guidelines
    fn guidelines_text(&self) -> String;

    /// The three partial exam dates, in chronological order
    fn exam_dates_text(&self) -> String;

    /// Grade percentage per partial exam (adds up to 100)
    fn grading_weights_text(&self) -> String;

    /// Returns the block bound to `topic`
    ///
    /// # Example
    ///
    /// ```
    /// use info_poo::core::{ContentProvider, CourseInfo, Topic};
    ///
    /// let info = CourseInfo::new();
    /// assert_eq!(info.text_for(Topic::Rules), info.rules_text());
    /// ```
    fn text_for(&self, topic: Topic) -> String {
        match topic {
            Topic::Rules => self.rules_text(),
            Topic::Guidelines => self.guidelines_text(),
            Topic::ExamDates => self.exam_dates_text(),
            Topic::GradingWeights => self.grading_weights_text(),
        }
    }
}
