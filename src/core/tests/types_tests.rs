use chrono::Month;

use crate::core::types::{month_name_es, total_percent, ExamDate, GradeWeight, Topic};

#[test]
fn test_topic_labels() {
    assert_eq!(Topic::Rules.label(), "Reglamento");
    assert_eq!(Topic::Guidelines.label(), "Classroom");
    assert_eq!(Topic::ExamDates.label(), "Parciales");
    assert_eq!(Topic::GradingWeights.label(), "Porcentajes");
}

#[test]
fn test_topic_display_matches_label() {
    for topic in Topic::ALL {
        assert_eq!(format!("{}", topic), topic.label());
    }
}

#[test]
fn test_topic_all_is_button_order() {
    let labels: Vec<&str> = Topic::ALL.iter().map(Topic::label).collect();
    assert_eq!(labels, ["Reglamento", "Classroom", "Parciales", "Porcentajes"]);
}

#[test]
fn test_exam_date_display() {
    let date = ExamDate { number: 2, day: 25, month: Month::October };
    assert_eq!(format!("{}", date), "Parcial 2: 25 de Octubre");
}

#[test]
fn test_exam_date_sort_key_orders_by_month_then_day() {
    let late_sept = ExamDate { number: 1, day: 30, month: Month::September };
    let early_oct = ExamDate { number: 2, day: 1, month: Month::October };
    let mid_oct = ExamDate { number: 3, day: 15, month: Month::October };

    assert!(late_sept.sort_key() < early_oct.sort_key());
    assert!(early_oct.sort_key() < mid_oct.sort_key());
}

#[test]
fn test_grade_weight_display() {
    let weight = GradeWeight { exam: 3, percent: 40 };
    assert_eq!(format!("{}", weight), "Parcial 3: 40%");
}

#[test]
fn test_total_percent() {
    let weights = [
        GradeWeight { exam: 1, percent: 25 },
        GradeWeight { exam: 2, percent: 35 },
    ];
    assert_eq!(total_percent(&weights), 60);
    assert_eq!(total_percent(&[]), 0);
}

#[test]
fn test_month_names_are_capitalised_spanish() {
    assert_eq!(month_name_es(Month::January), "Enero");
    assert_eq!(month_name_es(Month::September), "Septiembre");
    assert_eq!(month_name_es(Month::December), "Diciembre");
}
