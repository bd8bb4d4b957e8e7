//! A key/value settings store feeding `Validated` into a user record.
//!
//! Lookups that miss or hold the wrong kind of value fail with a message;
//! the username and age lookups are independent, so their failures are
//! accumulated into one report.

use std::collections::BTreeMap;

use validated::{accum, assert_messages, assert_valid, Validated};

#[derive(Debug, Clone, PartialEq)]
enum Setting {
    Text(String),
    Int(i64),
}

impl Setting {
    fn kind(&self) -> &'static str {
        match self {
            Setting::Text(_) => "text",
            Setting::Int(_) => "integer",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Settings {
    entries: BTreeMap<String, Setting>,
}

impl Settings {
    fn with(mut self, key: &str, value: Setting) -> Self {
        self.entries.insert(key.to_string(), value);
        self
    }

    fn get(&self, key: &str) -> Validated<&Setting> {
        Validated::from_option_with(self.entries.get(key), || {
            format!("The settings does not contain any value with key '{key}'")
        })
    }

    fn get_as_string(&self, key: &str) -> Validated<String> {
        self.get(key).and_then(|setting| match setting {
            Setting::Text(text) => Validated::valid(text.clone()),
            other => Validated::invalid(format!("Trying to read a {} setting as text", other.kind())),
        })
    }

    fn get_as_int(&self, key: &str) -> Validated<i64> {
        self.get(key).and_then(|setting| match setting {
            Setting::Int(n) => Validated::valid(*n),
            other => Validated::invalid(format!("Trying to read a {} setting as integer", other.kind())),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Age(u8);

impl Age {
    fn parse(value: i64) -> Validated<Age> {
        Validated::validate(value, |v| *v >= 0 && *v < 150, "The age must be in range [0,150)")
            .map(|v| Age(v as u8))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    username: String,
    age: Age,
}

fn load_user(settings: &Settings) -> Validated<User> {
    let username = settings.get_as_string("username");
    let age = settings.get_as_int("age").and_then(Age::parse);
    accum(username, age, |username, age| User { username, age })
}

#[test]
fn test_missing_username_and_bad_age_report_both() {
    let settings = Settings::default().with("age", Setting::Int(235));
    assert_messages!(
        load_user(&settings),
        [
            "The settings does not contain any value with key 'username'",
            "The age must be in range [0,150)",
        ]
    );
}

#[test]
fn test_empty_settings_report_both_lookups() {
    assert_messages!(
        load_user(&Settings::default()),
        [
            "The settings does not contain any value with key 'username'",
            "The settings does not contain any value with key 'age'",
        ]
    );
}

#[test]
fn test_valid_settings_build_user() {
    let settings = Settings::default()
        .with("age", Setting::Int(35))
        .with("username", Setting::Text("Ola".to_string()));
    assert_valid!(
        load_user(&settings),
        User {
            username: "Ola".to_string(),
            age: Age(35),
        }
    );
}

#[test]
fn test_wrong_kind_is_reported() {
    let settings = Settings::default()
        .with("age", Setting::Text("thirty".to_string()))
        .with("username", Setting::Int(7));
    assert_messages!(
        load_user(&settings),
        [
            "Trying to read a integer setting as text",
            "Trying to read a text setting as integer",
        ]
    );
}

#[test]
fn test_age_lookup_stops_at_first_failure() {
    // Missing key: the range check never runs, so only one message.
    let age = Settings::default().get_as_int("age").and_then(Age::parse);
    assert_eq!(age.messages().map(|m| m.len()), Some(1));
}

#[test]
fn test_or_else_gives_fallback_user() {
    let fallback = User {
        username: "unknown".to_string(),
        age: Age(0),
    };
    let user = load_user(&Settings::default()).or_else(fallback.clone());
    assert_eq!(user, fallback);
}

#[test]
fn test_age_boundaries() {
    assert_eq!(Age::parse(-5), Validated::invalid("The age must be in range [0,150)"));
    assert_eq!(Age::parse(35), Validated::valid(Age(35)));
    assert_eq!(Age::parse(0), Validated::valid(Age(0)));
    assert!(Age::parse(150).is_invalid());
}
