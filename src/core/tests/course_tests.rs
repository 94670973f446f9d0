//! Course content tests
//!
//! Checks the four text blocks against the published course information:
//! - Exact rendering (line layout, no trailing newline)
//! - Purity (repeated calls are byte-identical)
//! - Exam dates are chronological, weights add up to 100

use regex::Regex;

use crate::core::{ContentProvider, CourseInfo, Topic};

/// Helper: Every query of the provider, paired with its topic
fn all_blocks(info: &CourseInfo) -> Vec<(Topic, String)> {
    Topic::ALL
        .iter()
        .map(|&topic| (topic, info.text_for(topic)))
        .collect()
}

#[test]
fn test_rules_text() {
    let info = CourseInfo::new();
    assert_eq!(
        info.rules_text(),
        "Reglamento POO:\n\
         1. Asistencia mínima del 80%\n\
         2. Respeto en clase\n\
         3. Entrega puntual de tareas\n\
         4. Participación activa"
    );
}

#[test]
fn test_guidelines_text() {
    let info = CourseInfo::new();
    assert_eq!(
        info.guidelines_text(),
        "Lineamientos Classroom:\n\
         - Subir tareas en formato PDF\n\
         - Cumplir con las fechas límite\n\
         - Revisar anuncios diariamente\n\
         - Evitar plagio en actividades"
    );
}

#[test]
fn test_exam_dates_text() {
    let info = CourseInfo::new();
    assert_eq!(
        info.exam_dates_text(),
        "Fechas de Parciales:\n\
         Parcial 1: 20 de Septiembre\n\
         Parcial 2: 25 de Octubre\n\
         Parcial 3: 30 de Noviembre"
    );
}

#[test]
fn test_grading_weights_text() {
    let info = CourseInfo::new();
    assert_eq!(
        info.grading_weights_text(),
        "Porcentajes por Parcial:\n\
         Parcial 1: 30%\n\
         Parcial 2: 30%\n\
         Parcial 3: 40%"
    );
}

#[test]
fn test_every_block_is_non_empty() {
    let info = CourseInfo::new();
    for (topic, text) in all_blocks(&info) {
        assert!(!text.trim().is_empty(), "{} text should not be empty", topic);
        assert!(!text.ends_with('\n'), "{} text should have no trailing newline", topic);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let info = CourseInfo::new();
    let first = all_blocks(&info);
    let second = all_blocks(&info);
    assert_eq!(first, second, "Queries should be referentially transparent");

    // Separate instances hold no state either
    assert_eq!(first, all_blocks(&CourseInfo::new()));
}

#[test]
fn test_text_for_dispatches_to_matching_query() {
    let info = CourseInfo::new();
    assert_eq!(info.text_for(Topic::Rules), info.rules_text());
    assert_eq!(info.text_for(Topic::Guidelines), info.guidelines_text());
    assert_eq!(info.text_for(Topic::ExamDates), info.exam_dates_text());
    assert_eq!(info.text_for(Topic::GradingWeights), info.grading_weights_text());
}

#[test]
fn test_blocks_are_distinct() {
    let info = CourseInfo::new();
    let blocks = all_blocks(&info);
    for (i, (topic_a, a)) in blocks.iter().enumerate() {
        for (topic_b, b) in blocks.iter().skip(i + 1) {
            assert_ne!(a, b, "{} and {} should show different text", topic_a, topic_b);
        }
    }
}

#[test]
fn test_grading_percentages_sum_to_100() {
    let info = CourseInfo::new();
    let text = info.grading_weights_text();
    let percent = Regex::new(r"(\d+)%").unwrap();

    let figures: Vec<u32> = percent
        .captures_iter(&text)
        .map(|caps| caps[1].parse().unwrap())
        .collect();

    assert_eq!(figures.len(), 3, "Should list exactly three percentages");
    assert_eq!(figures.iter().sum::<u32>(), 100);
}

#[test]
fn test_exam_dates_are_three_and_chronological() {
    let info = CourseInfo::new();
    let text = info.exam_dates_text();
    let entry = Regex::new(r"Parcial (\d): (\d{1,2}) de (\w+)").unwrap();

    let months = [
        "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
        "Septiembre", "Octubre", "Noviembre", "Diciembre",
    ];

    let dates: Vec<(usize, u32)> = entry
        .captures_iter(&text)
        .map(|caps| {
            let month = months
                .iter()
                .position(|m| *m == &caps[3])
                .expect("month name should be Spanish");
            (month, caps[2].parse().unwrap())
        })
        .collect();

    assert_eq!(dates.len(), 3, "Should list exactly three exam dates");
    assert!(
        dates.windows(2).all(|pair| pair[0] < pair[1]),
        "Exam dates should be in chronological order: {:?}",
        dates
    );
}

#[test]
fn test_typed_exam_dates_are_chronological() {
    let info = CourseInfo::new();
    let keys: Vec<_> = info.exam_dates().iter().map(|d| d.sort_key()).collect();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));

    let numbers: Vec<u8> = info.exam_dates().iter().map(|d| d.number).collect();
    assert_eq!(numbers, [1, 2, 3]);
}

#[test]
fn test_rules_mention_minimum_attendance() {
    let info = CourseInfo::new();
    assert!(info.rules_text().contains("Asistencia mínima del 80%"));
}
