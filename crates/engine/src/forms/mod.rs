//! Form state tracking for the entity editors.

mod field;
mod form;

pub use field::{FieldState, FieldTracker, DEBOUNCE};
pub use form::{FormError, FormState};
