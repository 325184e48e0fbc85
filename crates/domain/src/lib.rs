//! Tomeforge domain: content entities, validation rules, sanitizers and the
//! point-budget stat generator.
//!
//! Everything here is synchronous and side-effect free. Timers, persistence,
//! randomness and logging live in `tomeforge-engine`.

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Content, ContentKind, Encounter, EncounterNpc, Item, Npc, NpcAction, Shop, SpellCard, Treasure,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ActionId, ContentId, EncounterNpcId, ItemId, TreasureId, UserId};

pub use validation::{
    sanitize_input, sanitize_string, FieldRule, FieldValue, ValidationResult,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    ability_modifier, format_modifier, Ability, AbilityScore, AbilityScores, DiceState,
    StatColumn, StatGenerator, StatSlot, Theme, COLUMN_COUNT, DICE_PER_COLUMN, POINT_BUDGET,
};
