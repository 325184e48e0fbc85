//! Encounter validators

use super::rules::{
    validate_choice, validate_number, validate_text, ChoiceConstraints, FieldRule,
    NumberConstraints, StringConstraints, TextPattern,
};
use super::shop::SHOP_THEME;
use super::{member_label, ValidationResult};
use crate::entities::{Encounter, EncounterNpc, Treasure};

pub const MAX_ENCOUNTER_NPCS: usize = 50;
pub const MAX_ENCOUNTER_TREASURES: usize = 100;
pub const MAX_ENCOUNTER_MAP_IMAGES: usize = 10;

pub const DIFFICULTIES: [&str; 4] = ["easy", "medium", "hard", "deadly"];

pub const ENCOUNTER_TITLE: StringConstraints = StringConstraints {
    label: "Encounter title",
    required: true,
    min_length: 1,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const ENCOUNTER_DESCRIPTION: StringConstraints = StringConstraints {
    label: "Encounter description",
    required: false,
    min_length: 0,
    max_length: 1000,
    pattern: None,
};

pub const ENCOUNTER_DIFFICULTY: ChoiceConstraints = ChoiceConstraints {
    label: "Difficulty",
    allowed: &DIFFICULTIES,
};

pub const ENCOUNTER_ENVIRONMENT: StringConstraints = StringConstraints {
    label: "Environment",
    required: false,
    min_length: 0,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const MAP_IMAGE_URL: StringConstraints = StringConstraints {
    label: "Map image URL",
    required: true,
    min_length: 1,
    max_length: 500,
    pattern: Some(TextPattern::ImageUrl),
};

pub const ENCOUNTER_NPC_NAME: StringConstraints = StringConstraints {
    label: "NPC name",
    required: true,
    min_length: 1,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const ENCOUNTER_NPC_QUANTITY: NumberConstraints = NumberConstraints {
    label: "NPC quantity",
    min: 1.0,
    max: 100.0,
};

pub const ENCOUNTER_NPC_HIT_POINTS: NumberConstraints = NumberConstraints {
    label: "Hit points",
    min: 1.0,
    max: 999.0,
};

pub const ENCOUNTER_NPC_ARMOR_CLASS: NumberConstraints = NumberConstraints {
    label: "Armor class",
    min: 1.0,
    max: 30.0,
};

pub const ENCOUNTER_NPC_NOTES: StringConstraints = StringConstraints {
    label: "Notes",
    required: false,
    min_length: 0,
    max_length: 500,
    pattern: None,
};

pub const TREASURE_NAME: StringConstraints = StringConstraints {
    label: "Treasure name",
    required: true,
    min_length: 1,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const TREASURE_VALUE: NumberConstraints = NumberConstraints {
    label: "Treasure value",
    min: 0.0,
    max: 999_999.0,
};

pub const TREASURE_QUANTITY: NumberConstraints = NumberConstraints {
    label: "Treasure quantity",
    min: 1.0,
    max: 9_999.0,
};

pub const TREASURE_DESCRIPTION: StringConstraints = StringConstraints {
    label: "Treasure description",
    required: false,
    min_length: 0,
    max_length: 500,
    pattern: None,
};

/// Field rules for the encounter editor, in form order.
pub const ENCOUNTER_FIELDS: [(&str, FieldRule); 5] = [
    ("title", FieldRule::Text(ENCOUNTER_TITLE)),
    ("description", FieldRule::Text(ENCOUNTER_DESCRIPTION)),
    ("difficulty", FieldRule::Choice(ENCOUNTER_DIFFICULTY)),
    ("environment", FieldRule::Text(ENCOUNTER_ENVIRONMENT)),
    ("theme", FieldRule::Choice(SHOP_THEME)),
];

pub fn validate_encounter_title(title: &str) -> ValidationResult {
    validate_text(title, &ENCOUNTER_TITLE)
}

pub fn validate_map_image_url(url: &str) -> ValidationResult {
    validate_text(url, &MAP_IMAGE_URL)
}

pub fn validate_encounter_npc(npc: &EncounterNpc) -> ValidationResult {
    [
        validate_text(&npc.name, &ENCOUNTER_NPC_NAME),
        validate_number(f64::from(npc.quantity), &ENCOUNTER_NPC_QUANTITY),
        validate_number(f64::from(npc.hit_points), &ENCOUNTER_NPC_HIT_POINTS),
        validate_number(f64::from(npc.armor_class), &ENCOUNTER_NPC_ARMOR_CLASS),
        validate_text(npc.notes.as_deref().unwrap_or_default(), &ENCOUNTER_NPC_NOTES),
    ]
    .into_iter()
    .collect()
}

pub fn validate_treasure(treasure: &Treasure) -> ValidationResult {
    [
        validate_text(&treasure.name, &TREASURE_NAME),
        validate_number(treasure.value, &TREASURE_VALUE),
        validate_number(f64::from(treasure.quantity), &TREASURE_QUANTITY),
        validate_text(
            treasure.description.as_deref().unwrap_or_default(),
            &TREASURE_DESCRIPTION,
        ),
    ]
    .into_iter()
    .collect()
}

pub fn validate_encounter(encounter: &Encounter) -> ValidationResult {
    let mut result: ValidationResult = [
        validate_encounter_title(&encounter.title),
        validate_text(
            encounter.description.as_deref().unwrap_or_default(),
            &ENCOUNTER_DESCRIPTION,
        ),
        validate_choice(&encounter.difficulty, &ENCOUNTER_DIFFICULTY),
        validate_text(
            encounter.environment.as_deref().unwrap_or_default(),
            &ENCOUNTER_ENVIRONMENT,
        ),
        validate_choice(&encounter.theme, &SHOP_THEME),
    ]
    .into_iter()
    .collect();

    if encounter.npcs.len() > MAX_ENCOUNTER_NPCS {
        result.push(format!(
            "Encounter cannot have more than {} NPCs",
            MAX_ENCOUNTER_NPCS
        ));
    }
    if encounter.treasures.len() > MAX_ENCOUNTER_TREASURES {
        result.push(format!(
            "Encounter cannot have more than {} treasures",
            MAX_ENCOUNTER_TREASURES
        ));
    }
    if encounter.map_images.len() > MAX_ENCOUNTER_MAP_IMAGES {
        result.push(format!(
            "Encounter cannot have more than {} map images",
            MAX_ENCOUNTER_MAP_IMAGES
        ));
    }

    for (index, npc) in encounter.npcs.iter().enumerate() {
        result.merge(validate_encounter_npc(npc).prefixed(&member_label("NPC", index)));
    }
    for (index, treasure) in encounter.treasures.iter().enumerate() {
        result.merge(validate_treasure(treasure).prefixed(&member_label("Treasure", index)));
    }
    for (index, url) in encounter.map_images.iter().enumerate() {
        result.merge(validate_map_image_url(url).prefixed(&member_label("Map image", index)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_encounter() {
        let mut encounter = Encounter::new("Goblin Ambush", "medium");
        encounter.environment = Some("Forest road".to_string());
        encounter.npcs.push(EncounterNpc::new("Goblin", 7, 15).with_quantity(4));
        encounter.treasures.push(Treasure::new("Gold coin", 1.0).with_quantity(30));
        encounter
            .map_images
            .push("https://maps.example/road.png".to_string());
        assert_eq!(validate_encounter(&encounter), ValidationResult::valid());
    }

    #[test]
    fn test_difficulty_choice() {
        let encounter = Encounter::new("Goblin Ambush", "Medium");
        assert_eq!(
            validate_encounter(&encounter).errors,
            vec!["Difficulty must be one of: easy, medium, hard, deadly"]
        );
    }

    #[test]
    fn test_map_image_url_pattern() {
        assert!(validate_map_image_url("https://maps.example/a.png").is_valid);
        assert_eq!(
            validate_map_image_url("ftp://maps.example/a.png").errors,
            vec!["Map image URL contains invalid characters. Must be an http:// or https:// link"]
        );
        assert_eq!(
            validate_map_image_url("javascript:alert(1)").errors,
            vec!["Map image URL is required"]
        );
    }

    #[test]
    fn test_ceilings_reported_once_each() {
        let mut encounter = Encounter::new("Horde", "deadly");
        for _ in 0..51 {
            encounter.npcs.push(EncounterNpc::new("Zombie", 22, 8));
        }
        for _ in 0..101 {
            encounter.treasures.push(Treasure::new("Copper", 0.01));
        }
        for _ in 0..11 {
            encounter
                .map_images
                .push("https://maps.example/crypt.png".to_string());
        }
        assert_eq!(
            validate_encounter(&encounter).errors,
            vec![
                "Encounter cannot have more than 50 NPCs".to_string(),
                "Encounter cannot have more than 100 treasures".to_string(),
                "Encounter cannot have more than 10 map images".to_string(),
            ]
        );
    }

    #[test]
    fn test_member_errors_are_positional() {
        let mut encounter = Encounter::new("Crypt", "hard");
        encounter.npcs.push(EncounterNpc::new("Ghoul", 22, 12));
        encounter.npcs.push(EncounterNpc::new("Ghast", 0, 13).with_quantity(101));
        encounter.treasures.push(Treasure::new("Idol", -5.0));

        assert_eq!(
            validate_encounter(&encounter).errors,
            vec![
                "NPC #2: NPC quantity must be no more than 100".to_string(),
                "NPC #2: Hit points must be at least 1".to_string(),
                "Treasure #1: Treasure value must be at least 0".to_string(),
            ]
        );
    }
}
