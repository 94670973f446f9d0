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

//! src/core/types.rs
//!
//! Core type definitions for the course information viewer
//!
//! This module defines the fundamental types used throughout the application:
//! - `Topic`: One of the four information blocks a button can show
//! - `ExamDate`: A scheduled partial exam (day + month)
//! - `GradeWeight`: The share of the final grade a partial exam is worth

use chrono::Month;
use std::fmt;

/// Information block shown in the viewer
///
/// Each topic maps to exactly one button and one provider query.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Topic {
    /// Class rules (attendance, behaviour, deadlines, participation)
    Rules,
    /// Google Classroom submission guidelines
    Guidelines,
    /// Partial exam dates
    ExamDates,
    /// Grade percentage per partial exam
    GradingWeights,
}

impl Topic {
    /// All topics, in the order their buttons appear left to right
    pub const ALL: [Topic; 4] = [
        Topic::Rules,
        Topic::Guidelines,
        Topic::ExamDates,
        Topic::GradingWeights,
    ];

    /// Button label for this topic
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Rules => "Reglamento",
            Topic::Guidelines => "Classroom",
            Topic::ExamDates => "Parciales",
            Topic::GradingWeights => "Porcentajes",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A scheduled partial exam
///
/// The course calendar has no year attached to it, so dates are
/// day + month only and ordered within a single semester.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExamDate {
    /// Partial number (1-based)
    pub number: u8,
    /// Day of month
    pub day: u32,
    /// Month of the exam
    pub month: Month,
}

impl ExamDate {
    /// Key for chronological comparison: (month number, day)
    pub fn sort_key(&self) -> (u32, u32) {
        (self.month.number_from_month(), self.day)
    }
}

impl fmt::Display for ExamDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parcial {}: {} de {}",
            self.number,
            self.day,
            month_name_es(self.month)
        )
    }
}

/// Share of the final grade assigned to one partial exam
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GradeWeight {
    /// Partial number (1-based)
    pub exam: u8,
    /// Percentage of the final grade
    pub percent: u8,
}

impl fmt::Display for GradeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parcial {}: {}%", self.exam, self.percent)
    }
}

/// Sum of all weights, usable in const context
pub const fn total_percent(weights: &[GradeWeight]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < weights.len() {
        total += weights[i].percent as u32;
        i += 1;
    }
    total
}

/// Capitalised Spanish month name, as written on the course calendar
pub fn month_name_es(month: Month) -> &'static str {
    match month {
        Month::January => "Enero",
        Month::February => "Febrero",
        Month::March => "Marzo",
        Month::April => "Abril",
        Month::May => "Mayo",
        Month::June => "Junio",
        Month::July => "Julio",
        Month::August => "Agosto",
        Month::September => "Septiembre",
        Month::October => "Octubre",
        Month::November => "Noviembre",
        Month::December => "Diciembre",
    }
}
