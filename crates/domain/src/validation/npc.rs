//! NPC validators

use super::rules::{
    validate_choice, validate_number, validate_text, ChoiceConstraints, FieldRule,
    NumberConstraints, StringConstraints, TextPattern,
};
use super::shop::{validate_item, SHOP_THEME};
use super::{member_label, ValidationResult};
use crate::entities::{Npc, NpcAction};
use crate::value_objects::Ability;

pub const MAX_NPC_INVENTORY: usize = 50;
pub const MAX_NPC_ACTIONS: usize = 20;

pub const ALIGNMENTS: [&str; 10] = [
    "Lawful Good",
    "Neutral Good",
    "Chaotic Good",
    "Lawful Neutral",
    "True Neutral",
    "Chaotic Neutral",
    "Lawful Evil",
    "Neutral Evil",
    "Chaotic Evil",
    "Unaligned",
];

pub const CHALLENGE_RATINGS: [&str; 34] = [
    "0", "1/8", "1/4", "1/2", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13",
    "14", "15", "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "30",
];

pub const NPC_NAME: StringConstraints = StringConstraints {
    label: "NPC name",
    required: true,
    min_length: 1,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const NPC_RACE: StringConstraints = StringConstraints {
    label: "Race",
    required: true,
    min_length: 1,
    max_length: 50,
    pattern: Some(TextPattern::Name),
};

pub const NPC_CLASS: StringConstraints = StringConstraints {
    label: "Class",
    required: true,
    min_length: 1,
    max_length: 50,
    pattern: Some(TextPattern::Name),
};

pub const NPC_ALIGNMENT: ChoiceConstraints = ChoiceConstraints {
    label: "Alignment",
    allowed: &ALIGNMENTS,
};

pub const NPC_LEVEL: NumberConstraints = NumberConstraints {
    label: "Level",
    min: 1.0,
    max: 20.0,
};

pub const NPC_ARMOR_CLASS: NumberConstraints = NumberConstraints {
    label: "Armor class",
    min: 1.0,
    max: 30.0,
};

pub const NPC_HIT_POINTS: NumberConstraints = NumberConstraints {
    label: "Hit points",
    min: 1.0,
    max: 999.0,
};

pub const NPC_SPEED: NumberConstraints = NumberConstraints {
    label: "Speed",
    min: 0.0,
    max: 120.0,
};

pub const NPC_CHALLENGE_RATING: ChoiceConstraints = ChoiceConstraints {
    label: "Challenge rating",
    allowed: &CHALLENGE_RATINGS,
};

pub const NPC_DESCRIPTION: StringConstraints = StringConstraints {
    label: "NPC description",
    required: false,
    min_length: 0,
    max_length: 1000,
    pattern: None,
};

pub const ACTION_NAME: StringConstraints = StringConstraints {
    label: "Action name",
    required: true,
    min_length: 1,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const ACTION_DESCRIPTION: StringConstraints = StringConstraints {
    label: "Action description",
    required: true,
    min_length: 1,
    max_length: 500,
    pattern: None,
};

const fn ability_score(label: &'static str) -> NumberConstraints {
    NumberConstraints {
        label,
        min: 1.0,
        max: 30.0,
    }
}

/// Score bounds for each ability, labelled with its display name.
pub fn ability_score_constraints(ability: Ability) -> NumberConstraints {
    ability_score(ability.display_name())
}

/// Field rules for the NPC editor, in form order.
pub const NPC_FIELDS: [(&str, FieldRule); 17] = [
    ("name", FieldRule::Text(NPC_NAME)),
    ("race", FieldRule::Text(NPC_RACE)),
    ("class", FieldRule::Text(NPC_CLASS)),
    ("alignment", FieldRule::Choice(NPC_ALIGNMENT)),
    ("level", FieldRule::Number(NPC_LEVEL)),
    ("strength", FieldRule::Number(ability_score("Strength"))),
    ("dexterity", FieldRule::Number(ability_score("Dexterity"))),
    ("constitution", FieldRule::Number(ability_score("Constitution"))),
    ("intelligence", FieldRule::Number(ability_score("Intelligence"))),
    ("wisdom", FieldRule::Number(ability_score("Wisdom"))),
    ("charisma", FieldRule::Number(ability_score("Charisma"))),
    ("armorClass", FieldRule::Number(NPC_ARMOR_CLASS)),
    ("hitPoints", FieldRule::Number(NPC_HIT_POINTS)),
    ("speed", FieldRule::Number(NPC_SPEED)),
    ("challengeRating", FieldRule::Choice(NPC_CHALLENGE_RATING)),
    ("description", FieldRule::Text(NPC_DESCRIPTION)),
    ("theme", FieldRule::Choice(SHOP_THEME)),
];

pub fn validate_npc_name(name: &str) -> ValidationResult {
    validate_text(name, &NPC_NAME)
}

pub fn validate_npc_level(level: f64) -> ValidationResult {
    validate_number(level, &NPC_LEVEL)
}

pub fn validate_ability_score(ability: Ability, score: f64) -> ValidationResult {
    validate_number(score, &ability_score_constraints(ability))
}

pub fn validate_npc_action(action: &NpcAction) -> ValidationResult {
    [
        validate_text(&action.name, &ACTION_NAME),
        validate_text(&action.description, &ACTION_DESCRIPTION),
    ]
    .into_iter()
    .collect()
}

pub fn validate_npc(npc: &Npc) -> ValidationResult {
    let mut result: ValidationResult = [
        validate_npc_name(&npc.name),
        validate_text(&npc.race, &NPC_RACE),
        validate_text(&npc.class, &NPC_CLASS),
        validate_choice(&npc.alignment, &NPC_ALIGNMENT),
        validate_npc_level(f64::from(npc.level)),
    ]
    .into_iter()
    .collect();

    for ability in Ability::ALL {
        result.merge(validate_ability_score(
            ability,
            f64::from(npc.abilities.get(ability)),
        ));
    }

    result.merge(validate_number(f64::from(npc.armor_class), &NPC_ARMOR_CLASS));
    result.merge(validate_number(f64::from(npc.hit_points), &NPC_HIT_POINTS));
    result.merge(validate_number(f64::from(npc.speed), &NPC_SPEED));
    result.merge(validate_choice(&npc.challenge_rating, &NPC_CHALLENGE_RATING));
    result.merge(validate_text(
        npc.description.as_deref().unwrap_or_default(),
        &NPC_DESCRIPTION,
    ));
    result.merge(validate_choice(&npc.theme, &SHOP_THEME));

    if npc.inventory.len() > MAX_NPC_INVENTORY {
        result.push(format!(
            "NPC cannot have more than {} inventory items",
            MAX_NPC_INVENTORY
        ));
    }
    if npc.actions.len() > MAX_NPC_ACTIONS {
        result.push(format!("NPC cannot have more than {} actions", MAX_NPC_ACTIONS));
    }

    for (index, action) in npc.actions.iter().enumerate() {
        result.merge(validate_npc_action(action).prefixed(&member_label("Action", index)));
    }
    for (index, item) in npc.inventory.iter().enumerate() {
        result.merge(validate_item(item).prefixed(&member_label("Item", index)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;

    fn valid_npc() -> Npc {
        let mut npc = Npc::new("Bryn Ashdown", "Half-Elf", "Ranger");
        npc.alignment = "Chaotic Good".to_string();
        npc.level = 5;
        npc.armor_class = 15;
        npc.hit_points = 38;
        npc.challenge_rating = "2".to_string();
        npc
    }

    #[test]
    fn test_valid_npc() {
        assert!(validate_npc(&valid_npc()).is_valid);
    }

    #[test]
    fn test_ability_score_messages_use_display_name() {
        let mut npc = valid_npc();
        npc.abilities.wisdom = 31;
        npc.abilities.strength = 0;
        let result = validate_npc(&npc);
        assert_eq!(
            result.errors,
            vec![
                "Strength must be at least 1".to_string(),
                "Wisdom must be no more than 30".to_string(),
            ]
        );
    }

    #[test]
    fn test_challenge_rating_is_case_sensitive_choice() {
        let mut npc = valid_npc();
        npc.challenge_rating = "1/3".to_string();
        let result = validate_npc(&npc);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Challenge rating must be one of: 0, 1/8, 1/4, 1/2, 1, 2"));

        npc.challenge_rating = "1/2".to_string();
        npc.alignment = "chaotic good".to_string();
        let result = validate_npc(&npc);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Alignment must be one of:"));
    }

    #[test]
    fn test_ceilings_then_member_errors() {
        let mut npc = valid_npc();
        for _ in 0..21 {
            npc.actions.push(NpcAction::new("Claw", "Melee attack"));
        }
        npc.actions.push(NpcAction::new("Bite", ""));
        npc.inventory.push(Item::new("", "Gear", 1.0));

        let result = validate_npc(&npc);
        assert_eq!(
            result.errors,
            vec![
                "NPC cannot have more than 20 actions".to_string(),
                "Action #22: Action description is required".to_string(),
                "Item #1: Item name is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let mut npc = valid_npc();
        npc.theme = "neon".to_string();
        let result = validate_npc(&npc);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Theme must be one of: parchment"));
    }

    #[test]
    fn test_level_bounds() {
        assert!(validate_npc_level(1.0).is_valid);
        assert!(validate_npc_level(20.0).is_valid);
        assert_eq!(validate_npc_level(0.0).errors, vec!["Level must be at least 1"]);
        assert_eq!(validate_npc_level(21.0).errors, vec!["Level must be no more than 20"]);
    }

    #[test]
    fn test_field_table_names_are_unique() {
        let mut names: Vec<&str> = NPC_FIELDS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NPC_FIELDS.len());
    }
}
