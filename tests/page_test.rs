//! Integration tests for the quiz and booking page logic.

use chrono::NaiveDate;
use summark::page::{
    first_invalid, form_is_valid, parse_booking_date, weekend_advisory, BookingWindow,
    ConsultationSelection, ConsultationType, FieldValidity, PasswordPolicy, ProgressTier,
    QuizProgress, StrengthLevel, ValidationState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_quiz_progress_through_all_tiers() {
    let mut progress = QuizProgress::new(15);
    assert_eq!(progress.tier(), ProgressTier::Low);

    for i in 1..=7 {
        progress.answer(format!("q{}", i));
    }
    assert_eq!(progress.tier(), ProgressTier::Low);

    progress.answer("q8");
    assert!((progress.percent() - 53.333).abs() < 0.01);
    assert_eq!(progress.tier(), ProgressTier::Medium);

    for i in 9..=12 {
        progress.answer(format!("q{}", i));
    }
    assert_eq!(progress.tier(), ProgressTier::High);

    for i in 13..=15 {
        progress.answer(format!("q{}", i));
    }
    assert!(progress.is_complete());
    assert_eq!(progress.percent(), 100.0);
}

#[test]
fn test_changing_an_answer_does_not_inflate_progress() {
    let mut progress = QuizProgress::new(15);
    // Same radio group fires change events on every reselection.
    progress.answer("q1");
    progress.answer("q1");
    progress.answer("q1");
    assert_eq!(progress.answered_count(), 1);
    assert_eq!(progress.tier(), ProgressTier::Low);
}

#[test]
fn test_booking_flow_accepts_valid_weekday() {
    let today = date(2026, 8, 6);
    let window = BookingWindow::starting(today);

    let picked = parse_booking_date("2026-08-12").unwrap();
    assert!(window.contains(picked));
    assert!(weekend_advisory(picked).is_none());
}

#[test]
fn test_booking_flow_flags_weekend_inside_window() {
    let window = BookingWindow::starting(date(2026, 8, 6));

    // A Saturday inside the window books fine but carries an advisory.
    let saturday = parse_booking_date("2026-08-15").unwrap();
    assert!(window.contains(saturday));

    let advisory = weekend_advisory(saturday).expect("saturday should warn");
    assert!(advisory.text.contains("Weekend sessions"));
    assert_eq!(advisory.css_class, "alert alert-warning");
}

#[test]
fn test_booking_rejects_out_of_window_dates() {
    let window = BookingWindow::starting(date(2026, 8, 6));

    assert!(!window.contains(date(2026, 8, 6)), "same-day booking");
    assert!(!window.contains(date(2026, 12, 25)), "beyond 60 days");
    assert!(window.contains(window.min));
    assert!(window.contains(window.max));
}

#[test]
fn test_booking_form_validation_focus_order() {
    let fields = [
        FieldValidity::new("date", true),
        FieldValidity::new("time", true),
        FieldValidity::new("phone", false),
        FieldValidity::new("emergency_contact", false),
    ];

    let focus = first_invalid(&fields).unwrap();
    assert_eq!(focus.name, "phone");
    assert!(!form_is_valid(&fields));

    assert_eq!(ValidationState::from_valid(false).css_class(), "is-invalid");
}

#[test]
fn test_consultation_type_selection_mirror() {
    let mut selection = ConsultationSelection::new();

    selection.select(ConsultationType::InPerson);
    let kind = selection.selected().unwrap();
    assert_eq!(kind.option_element_id(), "in-person-option");
    assert_eq!(kind.radio_element_id(), "in-person-radio");
    assert_eq!(selection.form_value(), Some("in-person"));

    // The default backend value round-trips.
    assert_eq!(ConsultationType::default(), ConsultationType::Video);
    assert_eq!("video".parse::<ConsultationType>().unwrap(), ConsultationType::Video);
}

#[test]
fn test_password_meter_progression() {
    let policy = PasswordPolicy::new();

    let samples = [
        ("", StrengthLevel::VeryWeak),
        ("abc", StrengthLevel::VeryWeak),
        ("abcdefgh", StrengthLevel::Weak),
        ("Abcdefgh", StrengthLevel::Fair),
        ("Abcdefg1", StrengthLevel::Good),
        ("Abcdefg1!", StrengthLevel::Strong),
    ];

    for (password, expected) in samples {
        let strength = policy.check(password);
        assert_eq!(
            strength.level(),
            expected,
            "unexpected level for {:?}",
            password
        );
    }
}

#[test]
fn test_password_feedback_names_missing_criteria() {
    let strength = PasswordPolicy::new().check("abcdefgh");
    assert_eq!(strength.score, 2);
    assert_eq!(
        strength.feedback,
        vec![
            "At least one uppercase letter",
            "At least one number",
            "At least one special character",
        ]
    );
}
