//! Spell card validators

use super::rules::{
    validate_choice, validate_number, validate_text, ChoiceConstraints, FieldRule,
    NumberConstraints, StringConstraints, TextPattern,
};
use super::shop::SHOP_THEME;
use super::ValidationResult;
use crate::entities::SpellCard;

pub const SPELL_SCHOOLS: [&str; 8] = [
    "Abjuration",
    "Conjuration",
    "Divination",
    "Enchantment",
    "Evocation",
    "Illusion",
    "Necromancy",
    "Transmutation",
];

pub const SPELL_NAME: StringConstraints = StringConstraints {
    label: "Spell name",
    required: true,
    min_length: 1,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const SPELL_LEVEL: NumberConstraints = NumberConstraints {
    label: "Spell level",
    min: 0.0,
    max: 9.0,
};

pub const SPELL_SCHOOL: ChoiceConstraints = ChoiceConstraints {
    label: "School",
    allowed: &SPELL_SCHOOLS,
};

const fn short_text(label: &'static str, max_length: usize) -> StringConstraints {
    StringConstraints {
        label,
        required: true,
        min_length: 1,
        max_length,
        pattern: None,
    }
}

pub const SPELL_CASTING_TIME: StringConstraints = short_text("Casting time", 50);
pub const SPELL_RANGE: StringConstraints = short_text("Range", 50);
pub const SPELL_COMPONENTS: StringConstraints = short_text("Components", 100);
pub const SPELL_DURATION: StringConstraints = short_text("Duration", 50);
pub const SPELL_DESCRIPTION: StringConstraints = short_text("Spell description", 1000);

/// Field rules for the spell card editor, in form order.
pub const SPELL_CARD_FIELDS: [(&str, FieldRule); 9] = [
    ("name", FieldRule::Text(SPELL_NAME)),
    ("level", FieldRule::Number(SPELL_LEVEL)),
    ("school", FieldRule::Choice(SPELL_SCHOOL)),
    ("castingTime", FieldRule::Text(SPELL_CASTING_TIME)),
    ("range", FieldRule::Text(SPELL_RANGE)),
    ("components", FieldRule::Text(SPELL_COMPONENTS)),
    ("duration", FieldRule::Text(SPELL_DURATION)),
    ("description", FieldRule::Text(SPELL_DESCRIPTION)),
    ("theme", FieldRule::Choice(SHOP_THEME)),
];

pub fn validate_spell_card(card: &SpellCard) -> ValidationResult {
    [
        validate_text(&card.name, &SPELL_NAME),
        validate_number(f64::from(card.level), &SPELL_LEVEL),
        validate_choice(&card.school, &SPELL_SCHOOL),
        validate_text(&card.casting_time, &SPELL_CASTING_TIME),
        validate_text(&card.range, &SPELL_RANGE),
        validate_text(&card.components, &SPELL_COMPONENTS),
        validate_text(&card.duration, &SPELL_DURATION),
        validate_text(&card.description, &SPELL_DESCRIPTION),
        validate_choice(&card.theme, &SHOP_THEME),
    ]
    .into_iter()
    .collect()
}
