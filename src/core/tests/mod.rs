//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Course content tests (text blocks, ordering, weights)
//! - Type tests (Topic, ExamDate, GradeWeight)

#[cfg(test)]
mod course_tests;
#[cfg(test)]
mod types_tests;
