//! Per-field touch/validation tracking with debounced re-validation.
//!
//! A field starts untouched and valid. Once touched, every value change
//! schedules a re-validation 300 ms later; a newer change or a forced
//! validation supersedes the pending one. Each scheduled task carries the
//! field's generation at scheduling time and does nothing if the generation
//! has moved on, so a superseded timer can never overwrite newer results.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tomeforge_domain::{sanitize_input, FieldRule, FieldValue, ValidationResult};

/// Delay between the last edit of a touched field and its re-validation
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Snapshot of one field as the UI renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub value: FieldValue,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub has_been_touched: bool,
    /// A debounced re-validation is pending
    pub is_validating: bool,
}

impl FieldState {
    fn untouched(value: FieldValue) -> Self {
        Self {
            value,
            is_valid: true,
            errors: Vec::new(),
            has_been_touched: false,
            is_validating: false,
        }
    }
}

struct Inner {
    state: FieldState,
    initial: FieldValue,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Inner {
    /// Invalidates any scheduled re-validation.
    fn supersede(&mut self) -> u64 {
        self.generation += 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.state.is_validating = false;
        self.generation
    }

    fn validate_now(&mut self, rule: &FieldRule) -> ValidationResult {
        let result = rule.validate(&self.state.value);
        self.state.is_valid = result.is_valid;
        self.state.errors = result.errors.clone();
        self.state.is_validating = false;
        result
    }
}

/// Tracks one form field.
///
/// Cloning yields another handle to the same field.
#[derive(Clone)]
pub struct FieldTracker {
    name: &'static str,
    rule: FieldRule,
    inner: Arc<Mutex<Inner>>,
}

impl FieldTracker {
    pub fn new(name: &'static str, rule: FieldRule, initial: FieldValue) -> Self {
        Self {
            name,
            rule,
            inner: Arc::new(Mutex::new(Inner {
                state: FieldState::untouched(initial.clone()),
                initial,
                generation: 0,
                pending: None,
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rule(&self) -> &FieldRule {
        &self.rule
    }

    pub fn state(&self) -> FieldState {
        self.lock().state.clone()
    }

    /// Replaces the value. Text passes through [`sanitize_input`].
    ///
    /// Untouched fields are not validated. Touched fields are re-validated
    /// after [`DEBOUNCE`], or immediately when no tokio runtime is running.
    pub fn update_value(&self, value: impl Into<FieldValue>) {
        let value = match value.into() {
            FieldValue::Text(text) => FieldValue::Text(sanitize_input(&text)),
            number => number,
        };

        let mut inner = self.lock();
        inner.state.value = value;
        if !inner.state.has_been_touched {
            return;
        }

        let generation = inner.supersede();
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                inner.state.is_validating = true;
                let weak = Arc::downgrade(&self.inner);
                let rule = self.rule;
                let name = self.name;
                inner.pending = Some(runtime.spawn(async move {
                    tokio::time::sleep(DEBOUNCE).await;
                    revalidate(weak, rule, name, generation);
                }));
                tracing::debug!(field = name, generation, "Scheduled debounced validation");
            }
            Err(_) => {
                inner.validate_now(&self.rule);
            }
        }
    }

    /// Marks the field as touched and validates it. Later calls do nothing.
    pub fn mark_as_touched(&self) {
        let mut inner = self.lock();
        if inner.state.has_been_touched {
            return;
        }
        inner.state.has_been_touched = true;
        inner.supersede();
        inner.validate_now(&self.rule);
    }

    /// Validates immediately, cancelling any pending debounce.
    pub fn force_validation(&self) -> ValidationResult {
        let mut inner = self.lock();
        inner.state.has_been_touched = true;
        inner.supersede();
        inner.validate_now(&self.rule)
    }

    /// Returns to an untouched state holding the initial value.
    ///
    /// A supplied `value` becomes the new initial value, so a later
    /// `reset(None)` comes back to it.
    pub fn reset(&self, value: Option<FieldValue>) {
        let mut inner = self.lock();
        inner.supersede();
        if let Some(value) = value {
            inner.initial = value;
        }
        inner.state = FieldState::untouched(inner.initial.clone());
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for FieldTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTracker")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish()
    }
}

fn revalidate(inner: Weak<Mutex<Inner>>, rule: FieldRule, name: &'static str, generation: u64) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
    if inner.generation != generation {
        tracing::debug!(
            field = name,
            generation,
            current = inner.generation,
            "Discarded stale validation"
        );
        return;
    }
    inner.pending = None;
    inner.validate_now(&rule);
}

#[cfg(test)]
mod tests {
    use tomeforge_domain::validation::SHOP_TITLE;

    use super::*;

    fn title_field() -> FieldTracker {
        FieldTracker::new("title", FieldRule::Text(SHOP_TITLE), FieldValue::default())
    }

    #[test]
    fn test_initial_state() {
        let state = title_field().state();
        assert!(state.is_valid);
        assert!(state.errors.is_empty());
        assert!(!state.has_been_touched);
        assert!(!state.is_validating);
    }

    #[test]
    fn test_mark_as_touched_validates_immediately() {
        let field = title_field();
        field.mark_as_touched();
        let state = field.state();
        assert!(state.has_been_touched);
        assert!(!state.is_valid);
        assert_eq!(state.errors, vec!["Shop title is required"]);
    }

    #[test]
    fn test_mark_as_touched_is_idempotent() {
        let field = title_field();
        field.mark_as_touched();
        field.update_value("The Gilded Flask");
        // No runtime here, so the update validated synchronously
        assert!(field.state().is_valid);
        field.mark_as_touched();
        assert!(field.state().is_valid);
    }

    #[test]
    fn test_untouched_updates_do_not_validate() {
        let field = title_field();
        field.update_value("");
        let state = field.state();
        assert!(state.is_valid);
        assert!(!state.is_validating);
    }

    #[test]
    fn test_update_applies_input_sanitizer() {
        let field = title_field();
        field.update_value("<b>Bold ");
        assert_eq!(field.state().value, FieldValue::text("bBold "));
    }

    #[test]
    fn test_reset() {
        let field = FieldTracker::new("title", FieldRule::Text(SHOP_TITLE), "Start".into());
        field.update_value("");
        field.force_validation();
        assert!(!field.state().is_valid);

        field.reset(None);
        assert_eq!(field.state(), FieldState::untouched("Start".into()));

        field.reset(Some("Other".into()));
        assert_eq!(field.state().value, FieldValue::text("Other"));
        assert!(!field.state().has_been_touched);

        field.update_value("Edited");
        field.reset(None);
        assert_eq!(field.state().value, FieldValue::text("Other"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_touched_update_is_debounced() {
        let field = title_field();
        field.mark_as_touched();
        field.update_value("The Gilded Flask");

        let state = field.state();
        assert!(state.is_validating);
        assert!(!state.is_valid, "errors are stale until the debounce fires");

        tokio::time::sleep(DEBOUNCE - Duration::from_millis(1)).await;
        assert!(field.state().is_validating);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let state = field.state();
        assert!(!state.is_validating);
        assert!(state.is_valid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_updates_reschedule() {
        let field = title_field();
        field.mark_as_touched();

        field.update_value("The");
        tokio::time::sleep(Duration::from_millis(200)).await;
        field.update_value("");
        tokio::time::sleep(Duration::from_millis(200)).await;

        // First timer would have fired at 300 ms; it was superseded
        assert!(field.state().is_validating);
        assert_eq!(field.state().errors, vec!["Shop title is required"]);

        tokio::time::sleep(Duration::from_millis(150)).await;
        let state = field.state();
        assert!(!state.is_validating);
        assert_eq!(state.errors, vec!["Shop title is required"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_force_validation_wins_over_pending_debounce() {
        let field = title_field();
        field.mark_as_touched();
        field.update_value("The Gilded Flask");
        assert!(field.state().is_validating);

        let result = field.force_validation();
        assert!(result.is_valid);
        assert!(!field.state().is_validating);

        // Change the value without going through update_value's scheduling
        // path: a stale timer firing now would flip the result.
        field.reset(Some(FieldValue::text("")));
        field.mark_as_touched();
        tokio::time::sleep(DEBOUNCE * 2).await;
        assert_eq!(field.state().errors, vec!["Shop title is required"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_tracker_cancels_quietly() {
        let field = title_field();
        field.mark_as_touched();
        field.update_value("Bazaar");
        drop(field);
        tokio::time::sleep(DEBOUNCE * 2).await;
    }
}
