//! Ability score rolling use case.

use std::sync::Arc;

use tomeforge_domain::{Ability, DomainError, StatGenerator, COLUMN_COUNT, POINT_BUDGET};

use crate::infrastructure::ports::RandomPort;

/// Drives the stat generator with the injected random source.
pub struct RollAbilityScores {
    random: Arc<dyn RandomPort>,
}

impl RollAbilityScores {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Rolls a fresh five-column set.
    pub fn execute(&self) -> StatGenerator {
        let generator = StatGenerator::new(|| self.roll_d6());
        log_budget(&generator);
        generator
    }

    /// Rerolls every die, keeping ability assignments.
    pub fn reroll(&self, generator: &mut StatGenerator) {
        generator.roll_dice(|| self.roll_d6());
        log_budget(generator);
    }

    /// Rolls and assigns columns to abilities in sheet order; the last
    /// ability takes the remaining points.
    pub fn execute_in_sheet_order(&self) -> Result<StatGenerator, DomainError> {
        let mut generator = self.execute();
        for (column, ability) in Ability::ALL.into_iter().take(COLUMN_COUNT).enumerate() {
            generator.update_ability(column, Some(ability))?;
        }
        generator.update_remaining_column_ability(Ability::ALL.get(COLUMN_COUNT).copied());
        Ok(generator)
    }

    fn roll_d6(&self) -> u8 {
        // DiceState clamps anyway; keep the cast lossless
        self.random.gen_range(1, 6).clamp(1, 6) as u8
    }
}

fn log_budget(generator: &StatGenerator) {
    let over = generator.points_over_budget();
    if over > 0 {
        // Remaining points floor at zero without telling the user
        tracing::debug!(
            total_used = generator.total_used(),
            budget = POINT_BUDGET,
            over_budget = over,
            "Stat roll exceeds point budget"
        );
    } else {
        tracing::debug!(
            total_used = generator.total_used(),
            remaining = generator.remaining_points(),
            "Rolled ability scores"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SeededRandom;
    use crate::infrastructure::ports::MockRandomPort;

    #[test]
    fn test_execute_uses_random_port() {
        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .withf(|min, max| *min == 1 && *max == 6)
            .times(20)
            .return_const(4);

        let generator = RollAbilityScores::new(Arc::new(random)).execute();
        assert!(generator
            .columns()
            .iter()
            .all(|column| column.total() == 16));
        // 5 x 16 = 80 > 72
        assert_eq!(generator.remaining_points(), 0);
        assert_eq!(generator.points_over_budget(), 8);
    }

    #[test]
    fn test_seeded_rolls_are_reproducible() {
        let first = RollAbilityScores::new(Arc::new(SeededRandom::new(7))).execute();
        let second = RollAbilityScores::new(Arc::new(SeededRandom::new(7))).execute();
        assert_eq!(first.columns(), second.columns());
    }

    #[test]
    fn test_reroll_keeps_assignments() {
        let use_case = RollAbilityScores::new(Arc::new(SeededRandom::new(1)));
        let mut generator = use_case.execute();
        generator.update_ability(2, Some(Ability::Wisdom)).unwrap();
        use_case.reroll(&mut generator);
        assert_eq!(generator.columns()[2].ability(), Some(Ability::Wisdom));
        assert!(generator
            .columns()
            .iter()
            .flat_map(|column| column.dice())
            .all(|die| (1..=6).contains(&die.value()) && !die.is_ignored()));
    }

    #[test]
    fn test_sheet_order_assignment() {
        let mut random = MockRandomPort::new();
        random.expect_gen_range().return_const(3);

        let generator = RollAbilityScores::new(Arc::new(random))
            .execute_in_sheet_order()
            .unwrap();
        assert_eq!(generator.columns()[0].ability(), Some(Ability::Strength));
        assert_eq!(generator.columns()[4].ability(), Some(Ability::Wisdom));
        assert_eq!(generator.remaining_ability(), Some(Ability::Charisma));
        // 5 x 12 = 60, leaving 12 for Charisma
        assert_eq!(generator.remaining_points(), 12);
        assert_eq!(generator.ability_summary().len(), 6);
    }

    #[test]
    fn test_out_of_range_random_values_are_clamped() {
        let mut random = MockRandomPort::new();
        random.expect_gen_range().return_const(9);
        let generator = RollAbilityScores::new(Arc::new(random)).execute();
        assert_eq!(generator.columns()[0].dice()[0].value(), 6);
    }
}
