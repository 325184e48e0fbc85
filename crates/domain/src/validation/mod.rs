//! Validation engine
//!
//! Field rules ([`rules`]) compose into whole-entity validators. Every
//! validator returns a [`ValidationResult`]; nothing here panics or fails.
//!
//! Entity validators report, in order: field errors in field order, then one
//! message per breached collection ceiling, then each member's errors
//! prefixed with its 1-based position (`Item #3: ...`).

mod encounter;
mod npc;
mod result;
mod rules;
mod sanitize;
mod shop;
mod spell_card;

pub use encounter::*;
pub use npc::*;
pub use result::ValidationResult;
pub use rules::{
    validate_choice, validate_number, validate_text, ChoiceConstraints, FieldRule, FieldValue,
    NumberConstraints, StringConstraints, TextPattern,
};
pub use sanitize::{sanitize_input, sanitize_string, MAX_TEXT_LENGTH};
pub use shop::*;
pub use spell_card::*;

/// Positional label for a collection member, e.g. `Item #3` for index 2.
fn member_label(kind: &str, index: usize) -> String {
    format!("{} #{}", kind, index + 1)
}
