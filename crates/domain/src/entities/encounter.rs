//! Encounter entity - a scenario brief with linked NPCs, treasure and maps

use serde::{Deserialize, Serialize};

use super::sanitize_optional;
use super::shop::default_theme;
use crate::ids::{ContentId, EncounterNpcId, TreasureId};
use crate::validation::sanitize_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// One of [`DIFFICULTIES`](crate::validation::DIFFICULTIES)
    pub difficulty: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub npcs: Vec<EncounterNpc>,
    #[serde(default)]
    pub treasures: Vec<Treasure>,
    /// Links to uploaded battle maps
    #[serde(default)]
    pub map_images: Vec<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// A participant in an encounter, optionally linked to a saved NPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterNpc {
    #[serde(default)]
    pub id: EncounterNpcId,
    #[serde(default)]
    pub npc_id: Option<ContentId>,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    pub hit_points: i32,
    pub armor_class: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treasure {
    #[serde(default)]
    pub id: TreasureId,
    pub name: String,
    /// Value in gold pieces
    pub value: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

impl Encounter {
    pub fn new(title: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            difficulty: difficulty.into(),
            environment: None,
            npcs: Vec::new(),
            treasures: Vec::new(),
            map_images: Vec::new(),
            theme: default_theme(),
        }
    }

    /// Total creature count across all NPC rows.
    pub fn creature_count(&self) -> i32 {
        self.npcs.iter().map(|npc| npc.quantity.max(0)).sum()
    }

    /// Combined gold value of all treasure rows.
    pub fn treasure_value(&self) -> f64 {
        self.treasures
            .iter()
            .map(|treasure| treasure.value * f64::from(treasure.quantity.max(0)))
            .sum()
    }

    pub fn sanitized(&self) -> Self {
        Self {
            title: sanitize_string(&self.title),
            description: sanitize_optional(&self.description),
            difficulty: sanitize_string(&self.difficulty),
            environment: sanitize_optional(&self.environment),
            npcs: self.npcs.iter().map(EncounterNpc::sanitized).collect(),
            treasures: self.treasures.iter().map(Treasure::sanitized).collect(),
            map_images: self.map_images.iter().map(|url| sanitize_string(url)).collect(),
            theme: sanitize_string(&self.theme),
        }
    }
}

impl EncounterNpc {
    pub fn new(name: impl Into<String>, hit_points: i32, armor_class: i32) -> Self {
        Self {
            id: EncounterNpcId::new(),
            npc_id: None,
            name: name.into(),
            quantity: default_quantity(),
            hit_points,
            armor_class,
            notes: None,
        }
    }

    /// Links this row to a saved NPC.
    pub fn linked_to(mut self, npc_id: ContentId) -> Self {
        self.npc_id = Some(npc_id);
        self
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            npc_id: self.npc_id,
            name: sanitize_string(&self.name),
            quantity: self.quantity,
            hit_points: self.hit_points,
            armor_class: self.armor_class,
            notes: sanitize_optional(&self.notes),
        }
    }
}

impl Treasure {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            id: TreasureId::new(),
            name: name.into(),
            value,
            quantity: default_quantity(),
            description: None,
        }
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            name: sanitize_string(&self.name),
            value: self.value,
            quantity: self.quantity,
            description: sanitize_optional(&self.description),
        }
    }
}
