//! NPC entity - a named character with ability scores, combat stats and inventory

use serde::{Deserialize, Serialize};

use super::shop::default_theme;
use super::{sanitize_optional, Item};
use crate::ids::ActionId;
use crate::validation::sanitize_string;
use crate::value_objects::{ability_modifier, AbilityScores, StatGenerator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub name: String,
    pub race: String,
    pub class: String,
    /// One of [`ALIGNMENTS`](crate::validation::ALIGNMENTS)
    pub alignment: String,
    pub level: i32,
    #[serde(default)]
    pub abilities: AbilityScores,
    pub armor_class: i32,
    pub hit_points: i32,
    /// Walking speed in feet
    #[serde(default = "default_speed")]
    pub speed: i32,
    /// One of [`CHALLENGE_RATINGS`](crate::validation::CHALLENGE_RATINGS)
    pub challenge_rating: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actions: Vec<NpcAction>,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_speed() -> i32 {
    30
}

/// Something an NPC can do on its turn (an attack, a trait, a reaction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcAction {
    #[serde(default)]
    pub id: ActionId,
    pub name: String,
    pub description: String,
}

impl NpcAction {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ActionId::new(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            name: sanitize_string(&self.name),
            description: sanitize_string(&self.description),
        }
    }
}

impl Npc {
    /// A level-1 commoner-style sheet ready for editing.
    pub fn new(name: impl Into<String>, race: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            race: race.into(),
            class: class.into(),
            alignment: "True Neutral".to_string(),
            level: 1,
            abilities: AbilityScores::default(),
            armor_class: 10,
            hit_points: 4,
            speed: default_speed(),
            challenge_rating: "0".to_string(),
            description: None,
            actions: Vec::new(),
            inventory: Vec::new(),
            theme: default_theme(),
        }
    }

    /// Copies the generator's assigned scores onto this sheet.
    pub fn apply_rolled_abilities(&mut self, generator: &StatGenerator) {
        generator.apply_to(&mut self.abilities);
    }

    /// Proficiency bonus by level: +2 at 1-4, rising by one every four levels.
    pub fn proficiency_bonus(&self) -> i32 {
        (self.level.max(1) - 1) / 4 + 2
    }

    /// Passive Perception without proficiency: 10 + WIS modifier.
    pub fn passive_perception(&self) -> i32 {
        10 + ability_modifier(self.abilities.wisdom)
    }

    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize_string(&self.name),
            race: sanitize_string(&self.race),
            class: sanitize_string(&self.class),
            alignment: sanitize_string(&self.alignment),
            level: self.level,
            abilities: self.abilities,
            armor_class: self.armor_class,
            hit_points: self.hit_points,
            speed: self.speed,
            challenge_rating: sanitize_string(&self.challenge_rating),
            description: sanitize_optional(&self.description),
            actions: self.actions.iter().map(NpcAction::sanitized).collect(),
            inventory: self.inventory.iter().map(Item::sanitized).collect(),
            theme: sanitize_string(&self.theme),
        }
    }
}
