//! Tests demonstrating the assertion macros on a small registration form.

use validated::prelude::*;
use validated::{assert_invalid, assert_messages, assert_valid};

#[derive(Debug, Clone, PartialEq)]
struct Registration {
    email: String,
    password: String,
    age: i32,
}

fn validate_email(email: &str) -> Validated<String> {
    Validated::validate(
        email.to_string(),
        |e| e.contains('@') && e.contains('.'),
        "Email must contain @ and .",
    )
}

fn validate_password(password: &str) -> Validated<String> {
    Validated::validate(
        password.to_string(),
        |p| p.len() >= 8,
        "Password must be at least 8 characters",
    )
}

fn validate_age(age: i32) -> Validated<i32> {
    Validated::validate(age, |a| *a >= 18, "Must be 18 or older")
}

fn validate_registration(email: &str, password: &str, age: i32) -> Validated<Registration> {
    accum3(
        validate_email(email),
        validate_password(password),
        validate_age(age),
        |email, password, age| Registration {
            email,
            password,
            age,
        },
    )
}

#[test]
fn test_assert_valid_with_email() {
    assert_valid!(validate_email("user@example.com"));
}

#[test]
fn test_assert_valid_with_expected_value() {
    assert_valid!(validate_age(25), 25);
}

#[test]
fn test_assert_invalid_with_underage() {
    assert_invalid!(validate_age(15));
}

#[test]
fn test_assert_messages_with_single_error() {
    assert_messages!(validate_email("invalid"), ["Email must contain @ and ."]);
}

#[test]
fn test_registration_collects_every_error() {
    assert_messages!(
        validate_registration("invalid", "short", 15),
        [
            "Email must contain @ and .",
            "Password must be at least 8 characters",
            "Must be 18 or older",
        ]
    );
}

#[test]
fn test_registration_partial_failure() {
    assert_messages!(
        validate_registration("user@example.com", "short", 15),
        ["Password must be at least 8 characters", "Must be 18 or older"]
    );
}

#[test]
fn test_successful_registration() {
    assert_valid!(
        validate_registration("user@example.com", "secure123", 25),
        Registration {
            email: "user@example.com".to_string(),
            password: "secure123".to_string(),
            age: 25,
        }
    );
}

#[test]
fn test_and_pairs_fields() {
    let pair = validate_email("user@example.com").and(validate_age(30));
    assert_valid!(pair, ("user@example.com".to_string(), 30));
}

#[test]
fn test_into_result_reports_all_messages() {
    let err = validate_registration("invalid", "short", 15)
        .into_result()
        .unwrap_err();
    assert_eq!(err.messages().len(), 3);
    assert!(err.to_string().starts_with("validation failed:"));
}

#[test]
fn test_traverse_over_form_fields() {
    let ages = traverse(vec![20, 17, 30, 5], validate_age);
    assert_messages!(ages, ["Must be 18 or older", "Must be 18 or older"]);
}
