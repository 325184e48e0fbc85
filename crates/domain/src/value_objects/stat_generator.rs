//! Point-budget stat generator
//!
//! Five columns of four d6 are rolled. The user may ignore individual dice,
//! assigns each column's sum to an ability, and whatever is left of the
//! 72-point budget becomes the score of a sixth "remaining points" slot that
//! has no dice of its own.
//!
//! Randomness is injected as a closure returning a d6 result so the domain
//! stays free of RNG dependencies and rolls are reproducible in tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::ability::{ability_modifier, format_modifier, Ability, AbilityScores};

/// Number of rolled columns
pub const COLUMN_COUNT: usize = 5;
/// Dice rolled per column
pub const DICE_PER_COLUMN: usize = 4;
/// Shared budget spent across all columns
pub const POINT_BUDGET: u32 = 72;

const DIE_SIDES: u8 = 6;

/// A single d6 in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDiceState")]
pub struct DiceState {
    value: u8,
    ignored: bool,
}

#[derive(Deserialize)]
struct RawDiceState {
    value: u8,
    #[serde(default)]
    ignored: bool,
}

impl TryFrom<RawDiceState> for DiceState {
    type Error = DomainError;

    fn try_from(raw: RawDiceState) -> Result<Self, Self::Error> {
        if !(1..=DIE_SIDES).contains(&raw.value) {
            return Err(DomainError::parse(format!(
                "Die value {} is outside 1..={}",
                raw.value, DIE_SIDES
            )));
        }
        Ok(Self {
            value: raw.value,
            ignored: raw.ignored,
        })
    }
}

impl DiceState {
    /// Creates a die showing `value`, clamped to 1..=6.
    pub fn new(value: u8) -> Self {
        Self {
            value: value.clamp(1, DIE_SIDES),
            ignored: false,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }
}

/// Four dice and the ability their sum is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatColumn {
    dice: [DiceState; DICE_PER_COLUMN],
    ability: Option<Ability>,
}

impl StatColumn {
    fn from_values(values: [u8; DICE_PER_COLUMN]) -> Self {
        Self {
            dice: values.map(DiceState::new),
            ability: None,
        }
    }

    pub fn dice(&self) -> &[DiceState; DICE_PER_COLUMN] {
        &self.dice
    }

    pub fn ability(&self) -> Option<Ability> {
        self.ability
    }

    /// Sum of the non-ignored dice. Ignoring all four yields 0.
    pub fn total(&self) -> u32 {
        self.dice
            .iter()
            .filter(|die| !die.ignored)
            .map(|die| u32::from(die.value))
            .sum()
    }
}

/// Where an ability is currently assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatSlot {
    Column(usize),
    Remaining,
}

/// One line of the ability summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScore {
    pub ability: Ability,
    pub score: u32,
}

impl AbilityScore {
    pub fn modifier(&self) -> i32 {
        ability_modifier(self.score as i32)
    }

    /// Signed modifier for display, e.g. "+2" or "-1".
    pub fn modifier_display(&self) -> String {
        format_modifier(self.modifier())
    }
}

/// Dice-pool allocator for ability scores.
///
/// # Invariants
///
/// - Every die shows a value in 1..=6.
/// - An ability is held by at most one slot (five columns plus the remaining
///   slot). `assignments` mirrors the per-slot abilities in the other
///   direction so that enforcing this is a single map update.
#[derive(Debug, Clone)]
pub struct StatGenerator {
    columns: [StatColumn; COLUMN_COUNT],
    remaining_ability: Option<Ability>,
    assignments: HashMap<Ability, StatSlot>,
}

impl StatGenerator {
    /// Creates a generator and performs the initial roll.
    pub fn new(roll_d6: impl FnMut() -> u8) -> Self {
        let mut generator = Self::from_rolls([[1; DICE_PER_COLUMN]; COLUMN_COUNT]);
        generator.roll_dice(roll_d6);
        generator
    }

    /// Creates a generator from known dice values (restoring a session, tests).
    pub fn from_rolls(rolls: [[u8; DICE_PER_COLUMN]; COLUMN_COUNT]) -> Self {
        Self {
            columns: rolls.map(StatColumn::from_values),
            remaining_ability: None,
            assignments: HashMap::new(),
        }
    }

    /// Rerolls every die and clears all ignored flags.
    ///
    /// Ability assignments are kept.
    pub fn roll_dice(&mut self, mut roll_d6: impl FnMut() -> u8) {
        for column in &mut self.columns {
            for die in &mut column.dice {
                *die = DiceState::new(roll_d6());
            }
        }
    }

    pub fn columns(&self) -> &[StatColumn; COLUMN_COUNT] {
        &self.columns
    }

    pub fn column(&self, column_index: usize) -> Result<&StatColumn, DomainError> {
        self.columns
            .get(column_index)
            .ok_or_else(|| DomainError::out_of_range("Stat column", column_index, COLUMN_COUNT))
    }

    /// Sum of the non-ignored dice in one column.
    pub fn column_total(&self, column_index: usize) -> Result<u32, DomainError> {
        self.column(column_index).map(StatColumn::total)
    }

    pub fn remaining_ability(&self) -> Option<Ability> {
        self.remaining_ability
    }

    /// Flips one die's ignored flag. Nothing is rerolled.
    pub fn toggle_dice_ignored(
        &mut self,
        column_index: usize,
        dice_index: usize,
    ) -> Result<(), DomainError> {
        let column = self
            .columns
            .get_mut(column_index)
            .ok_or_else(|| DomainError::out_of_range("Stat column", column_index, COLUMN_COUNT))?;
        let die = column
            .dice
            .get_mut(dice_index)
            .ok_or_else(|| DomainError::out_of_range("Die", dice_index, DICE_PER_COLUMN))?;
        die.ignored = !die.ignored;
        Ok(())
    }

    /// Assigns `ability` to a column, clearing it from whichever slot held it.
    ///
    /// `None` un-assigns the column.
    pub fn update_ability(
        &mut self,
        column_index: usize,
        ability: Option<Ability>,
    ) -> Result<(), DomainError> {
        if column_index >= COLUMN_COUNT {
            return Err(DomainError::out_of_range(
                "Stat column",
                column_index,
                COLUMN_COUNT,
            ));
        }
        self.assign(StatSlot::Column(column_index), ability);
        Ok(())
    }

    /// Assigns `ability` to the remaining-points slot.
    pub fn update_remaining_column_ability(&mut self, ability: Option<Ability>) {
        self.assign(StatSlot::Remaining, ability);
    }

    /// Slot currently holding `ability`, if any.
    pub fn slot_of(&self, ability: Ability) -> Option<StatSlot> {
        self.assignments.get(&ability).copied()
    }

    /// Sum of all five column totals. The remaining slot is derived, not counted.
    pub fn total_used(&self) -> u32 {
        self.columns.iter().map(StatColumn::total).sum()
    }

    /// Unspent budget, floored at zero.
    pub fn remaining_points(&self) -> u32 {
        POINT_BUDGET.saturating_sub(self.total_used())
    }

    /// How far the columns exceed the budget. `remaining_points` hides this.
    pub fn points_over_budget(&self) -> u32 {
        self.total_used().saturating_sub(POINT_BUDGET)
    }

    /// Assigned abilities with their scores, in column order then the remaining slot.
    pub fn ability_summary(&self) -> Vec<AbilityScore> {
        let columns = self.columns.iter().filter_map(|column| {
            column.ability.map(|ability| AbilityScore {
                ability,
                score: column.total(),
            })
        });
        let remaining = self.remaining_ability.map(|ability| AbilityScore {
            ability,
            score: self.remaining_points(),
        });
        columns.chain(remaining).collect()
    }

    /// Abilities selectable for a column: all six minus those held by other slots.
    pub fn available_abilities(&self, column_index: usize) -> Result<Vec<Ability>, DomainError> {
        if column_index >= COLUMN_COUNT {
            return Err(DomainError::out_of_range(
                "Stat column",
                column_index,
                COLUMN_COUNT,
            ));
        }
        Ok(self.available_for(StatSlot::Column(column_index)))
    }

    /// Abilities selectable for the remaining slot.
    pub fn available_abilities_for_remaining(&self) -> Vec<Ability> {
        self.available_for(StatSlot::Remaining)
    }

    /// Writes the assigned scores onto an NPC sheet, leaving unassigned abilities alone.
    pub fn apply_to(&self, scores: &mut AbilityScores) {
        for entry in self.ability_summary() {
            scores.set(entry.ability, entry.score as i32);
        }
    }

    fn available_for(&self, slot: StatSlot) -> Vec<Ability> {
        Ability::ALL
            .into_iter()
            .filter(|ability| match self.assignments.get(ability) {
                Some(holder) => *holder == slot,
                None => true,
            })
            .collect()
    }

    fn assign(&mut self, slot: StatSlot, ability: Option<Ability>) {
        if let Some(current) = self.slot_ability(slot) {
            self.assignments.remove(&current);
        }
        if let Some(ability) = ability {
            if let Some(previous) = self.assignments.insert(ability, slot) {
                if previous != slot {
                    self.set_slot_ability(previous, None);
                }
            }
        }
        self.set_slot_ability(slot, ability);
    }

    fn slot_ability(&self, slot: StatSlot) -> Option<Ability> {
        match slot {
            StatSlot::Column(index) => self.columns.get(index).and_then(|c| c.ability),
            StatSlot::Remaining => self.remaining_ability,
        }
    }

    fn set_slot_ability(&mut self, slot: StatSlot, ability: Option<Ability>) {
        match slot {
            StatSlot::Column(index) => {
                if let Some(column) = self.columns.get_mut(index) {
                    column.ability = ability;
                }
            }
            StatSlot::Remaining => self.remaining_ability = ability,
        }
    }
}
