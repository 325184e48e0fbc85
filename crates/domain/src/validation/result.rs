use serde::{Deserialize, Serialize};

/// Outcome of running a rule: a pass/fail flag and the ordered messages.
///
/// Validation failures are ordinary data. Callers decide whether to block a
/// save based on `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no messages.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Builds a result from collected messages; valid iff there are none.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A failing result with a single message.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self::from_errors(vec![error.into()])
    }

    /// Appends another result's messages after this one's.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.is_valid = self.errors.is_empty();
    }

    /// Adds a single message.
    pub fn push(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Prefixes every message with a label, e.g. `Item #3: `.
    pub fn prefixed(self, label: &str) -> Self {
        Self::from_errors(
            self.errors
                .into_iter()
                .map(|error| format!("{}: {}", label, error))
                .collect(),
        )
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        let mut combined = Self::valid();
        for result in iter {
            combined.merge(result);
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_errors_sets_validity() {
        assert!(ValidationResult::from_errors(vec![]).is_valid);
        assert!(!ValidationResult::from_errors(vec!["bad".into()]).is_valid);
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut result = ValidationResult::invalid("first");
        result.merge(ValidationResult::valid());
        result.merge(ValidationResult::invalid("second"));
        assert_eq!(result.errors, vec!["first", "second"]);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_prefixed() {
        let result = ValidationResult::invalid("Item name is required").prefixed("Item #2");
        assert_eq!(result.errors, vec!["Item #2: Item name is required"]);
    }

    #[test]
    fn test_collect_results() {
        let combined: ValidationResult = vec![
            ValidationResult::valid(),
            ValidationResult::invalid("a"),
            ValidationResult::invalid("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(combined.errors, vec!["a", "b"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ValidationResult::invalid("x")).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0], "x");
    }
}
