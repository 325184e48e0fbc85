//! Value objects - Immutable objects defined by their attributes

mod ability;
mod stat_generator;
mod theme;

pub use ability::{ability_modifier, format_modifier, Ability, AbilityScores};
pub use stat_generator::{
    AbilityScore, DiceState, StatColumn, StatGenerator, StatSlot, COLUMN_COUNT, DICE_PER_COLUMN,
    POINT_BUDGET,
};
pub use theme::Theme;
