//! Field-level rules.
//!
//! Each rule is a pure function of a value and a constraint set. Messages are
//! emitted in a fixed order: required, length, pattern, range, membership.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::result::ValidationResult;
use super::sanitize::sanitize_string;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[a-zA-Z0-9 _.,!?'"()&:-]+$"#).expect("valid regex"));
static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z &-]+$").expect("valid regex"));
static IMAGE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid regex"));

/// Character-class restrictions for text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPattern {
    /// Titles and proper names
    Name,
    /// Item categories
    Category,
    /// Links to uploaded map images
    ImageUrl,
}

impl TextPattern {
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Name => &*NAME_RE,
            Self::Category => &*CATEGORY_RE,
            Self::ImageUrl => &*IMAGE_URL_RE,
        }
    }

    /// Human-readable description appended to "contains invalid characters".
    pub fn description(self) -> &'static str {
        match self {
            Self::Name => {
                "Only letters, numbers, spaces, and basic punctuation (- _ . , ! ? ' \" ( ) & :) are allowed"
            }
            Self::Category => "Only letters, spaces, hyphens, and ampersands are allowed",
            Self::ImageUrl => "Must be an http:// or https:// link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringConstraints {
    pub label: &'static str,
    /// Optional fields accept an empty value and skip every other check.
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub pattern: Option<TextPattern>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberConstraints {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceConstraints {
    pub label: &'static str,
    pub allowed: &'static [&'static str],
}

/// Validates free text after running it through [`sanitize_string`].
///
/// An empty required value yields only the "is required" message. Otherwise
/// every failing check contributes its own message.
pub fn validate_text(value: &str, constraints: &StringConstraints) -> ValidationResult {
    let sanitized = sanitize_string(value);
    let label = constraints.label;

    if sanitized.is_empty() {
        return if constraints.required {
            ValidationResult::invalid(format!("{} is required", label))
        } else {
            ValidationResult::valid()
        };
    }

    let mut errors = Vec::new();
    let length = sanitized.chars().count();
    if length < constraints.min_length {
        errors.push(format!(
            "{} must be at least {} characters",
            label, constraints.min_length
        ));
    }
    if length > constraints.max_length {
        errors.push(format!(
            "{} must be no more than {} characters",
            label, constraints.max_length
        ));
    }
    if let Some(pattern) = constraints.pattern {
        if !pattern.regex().is_match(&sanitized) {
            errors.push(format!(
                "{} contains invalid characters. {}",
                label,
                pattern.description()
            ));
        }
    }
    ValidationResult::from_errors(errors)
}

/// Validates a number against an inclusive range.
///
/// NaN and infinities short-circuit with a single "valid number" message.
pub fn validate_number(value: f64, constraints: &NumberConstraints) -> ValidationResult {
    let label = constraints.label;
    if !value.is_finite() {
        return ValidationResult::invalid(format!("{} must be a valid number", label));
    }

    let mut errors = Vec::new();
    if value < constraints.min {
        errors.push(format!("{} must be at least {}", label, constraints.min));
    }
    if value > constraints.max {
        errors.push(format!("{} must be no more than {}", label, constraints.max));
    }
    ValidationResult::from_errors(errors)
}

/// Exact, case-sensitive membership test.
pub fn validate_choice(value: &str, constraints: &ChoiceConstraints) -> ValidationResult {
    if constraints.allowed.contains(&value) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(format!(
            "{} must be one of: {}",
            constraints.label,
            constraints.allowed.join(", ")
        ))
    }
}

/// A raw form value: text as typed, or a number from a numeric input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }

    /// Numeric reading of the value; unparsable text becomes NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(number) => *number,
            Self::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Any one of the three rule kinds, applicable to a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    Text(StringConstraints),
    Number(NumberConstraints),
    Choice(ChoiceConstraints),
}

impl FieldRule {
    pub fn validate(&self, value: &FieldValue) -> ValidationResult {
        match self {
            Self::Text(constraints) => validate_text(&value.as_text(), constraints),
            Self::Number(constraints) => validate_number(value.as_number(), constraints),
            Self::Choice(constraints) => validate_choice(&value.as_text(), constraints),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text(constraints) => constraints.label,
            Self::Number(constraints) => constraints.label,
            Self::Choice(constraints) => constraints.label,
        }
    }
}
