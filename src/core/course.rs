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

//! src/core/course.rs
//!
//! Course information for the POO class
//!
//! All content is fixed at compile time. Exam dates and grade weights are
//! kept as typed data and rendered on request, so the ordering and the
//! 100% total can be checked instead of trusted.

use std::fmt;

use chrono::Month;

use crate::core::provider::ContentProvider;
use crate::core::types::{total_percent, ExamDate, GradeWeight};

const RULES_HEADING: &str = "Reglamento POO:";
const RULES: [&str; 4] = [
    "Asistencia mínima del 80%",
    "Respeto en clase",
    "Entrega puntual de tareas",
    "Participación activa",
];

const GUIDELINES_HEADING: &str = "Lineamientos Classroom:";
const GUIDELINES: [&str; 4] = [
    "Subir tareas en formato PDF",
    "Cumplir con las fechas límite",
    "Revisar anuncios diariamente",
    "Evitar plagio en actividades",
];

const EXAM_DATES_HEADING: &str = "Fechas de Parciales:";
const EXAM_DATES: [ExamDate; 3] = [
    ExamDate { number: 1, day: 20, month: Month::September },
    ExamDate { number: 2, day: 25, month: Month::October },
    ExamDate { number: 3, day: 30, month: Month::November },
];

const GRADE_WEIGHTS_HEADING: &str = "Porcentajes por Parcial:";
const GRADE_WEIGHTS: [GradeWeight; 3] = [
    GradeWeight { exam: 1, percent: 30 },
    GradeWeight { exam: 2, percent: 30 },
    GradeWeight { exam: 3, percent: 40 },
];

const _: () = assert!(
    total_percent(&GRADE_WEIGHTS) == 100,
    "grade weights must add up to 100%"
);

/// Fixed course information shown by the viewer
#[derive(Clone, Copy, Debug, Default)]
pub struct CourseInfo;

impl CourseInfo {
    /// Creates the course information provider
    pub fn new() -> Self {
        Self
    }

    /// Scheduled partial exams, earliest first
    pub fn exam_dates(&self) -> &'static [ExamDate] {
        &EXAM_DATES
    }

    /// Grade weight per partial exam
    pub fn grade_weights(&self) -> &'static [GradeWeight] {
        &GRADE_WEIGHTS
    }
}

impl ContentProvider for CourseInfo {
    fn rules_text(&self) -> String {
        let numbered = RULES
            .iter()
            .enumerate()
            .map(|(i, rule)| format!("{}. {}", i + 1, rule));
        render_block(RULES_HEADING, numbered)
    }

    fn guidelines_text(&self) -> String {
        let bulleted = GUIDELINES.iter().map(|line| format!("- {}", line));
        render_block(GUIDELINES_HEADING, bulleted)
    }

    fn exam_dates_text(&self) -> String {
        render_block(EXAM_DATES_HEADING, self.exam_dates())
    }

    fn grading_weights_text(&self) -> String {
        render_block(GRADE_WEIGHTS_HEADING, self.grade_weights())
    }
}

/// Joins a heading and its lines with `\n` (no trailing newline)
fn render_block<I>(heading: &str, lines: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut text = String::from(heading);
    for line in lines {
        text.push('\n');
        text.push_str(&line.to_string());
    }
    text
}
