//! Spell card entity - a themed reference card for one spell

use serde::{Deserialize, Serialize};

use super::shop::default_theme;
use crate::validation::sanitize_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellCard {
    pub name: String,
    /// 0 for cantrips
    pub level: i32,
    /// One of [`SPELL_SCHOOLS`](crate::validation::SPELL_SCHOOLS)
    pub school: String,
    pub casting_time: String,
    pub range: String,
    /// e.g. "V, S, M (a pinch of sulfur)"
    pub components: String,
    pub duration: String,
    pub description: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl SpellCard {
    pub fn new(name: impl Into<String>, level: i32, school: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            school: school.into(),
            casting_time: "1 action".to_string(),
            range: "Self".to_string(),
            components: "V, S".to_string(),
            duration: "Instantaneous".to_string(),
            description: String::new(),
            theme: default_theme(),
        }
    }

    /// Card subtitle, e.g. "Evocation cantrip" or "3rd-level Evocation".
    pub fn level_line(&self) -> String {
        match self.level {
            0 => format!("{} cantrip", self.school),
            level => format!("{}-level {}", ordinal(level), self.school),
        }
    }

    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize_string(&self.name),
            level: self.level,
            school: sanitize_string(&self.school),
            casting_time: sanitize_string(&self.casting_time),
            range: sanitize_string(&self.range),
            components: sanitize_string(&self.components),
            duration: sanitize_string(&self.duration),
            description: sanitize_string(&self.description),
            theme: sanitize_string(&self.theme),
        }
    }
}

fn ordinal(n: i32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_line() {
        assert_eq!(SpellCard::new("Fire Bolt", 0, "Evocation").level_line(), "Evocation cantrip");
        assert_eq!(SpellCard::new("Fireball", 3, "Evocation").level_line(), "3rd-level Evocation");
        assert_eq!(SpellCard::new("Shield", 1, "Abjuration").level_line(), "1st-level Abjuration");
        assert_eq!(SpellCard::new("Wish", 9, "Conjuration").level_line(), "9th-level Conjuration");
    }

    #[test]
    fn test_sanitized() {
        let mut card = SpellCard::new("Fireball", 3, "Evocation");
        card.description = "A <b>bright</b> streak ".to_string();
        assert_eq!(card.sanitized().description, "A bright streak");
    }
}
