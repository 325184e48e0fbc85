//! Use cases - user story orchestration over ports and domain rules.

pub mod content;
pub mod stat_roll;

pub use content::{ContentError, ManageContent};
pub use stat_roll::RollAbilityScores;
