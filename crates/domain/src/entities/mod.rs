//! Content entities authored by a game master

mod encounter;
mod item;
mod npc;
mod shop;
mod spell_card;

use std::fmt;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use encounter::{Encounter, EncounterNpc, Treasure};
pub use item::Item;
pub use npc::{Npc, NpcAction};
pub use shop::Shop;
pub use spell_card::SpellCard;

use crate::error::DomainError;
use crate::validation::{self, sanitize_string, ValidationResult};

/// Sanitizes an optional free-text field, dropping it when nothing is left.
pub(crate) fn sanitize_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(sanitize_string)
        .filter(|clean| !clean.is_empty())
}

/// The top-level kinds of content that are saved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Shop,
    Npc,
    Encounter,
    SpellCard,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Shop,
        ContentKind::Npc,
        ContentKind::Encounter,
        ContentKind::SpellCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shop => "shop",
            Self::Npc => "npc",
            Self::Encounter => "encounter",
            Self::SpellCard => "spell_card",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "shop" => Ok(Self::Shop),
            "npc" => Ok(Self::Npc),
            "encounter" => Ok(Self::Encounter),
            "spell_card" | "spell" => Ok(Self::SpellCard),
            _ => Err(DomainError::parse(format!("Unknown content kind: {}", s))),
        }
    }
}

/// Behavior shared by every independently saved entity.
pub trait Content:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: ContentKind;

    /// Copy with all free text passed through the persistence sanitizer.
    fn sanitized(&self) -> Self;

    /// Whole-object validation (fields, then ceilings, then members).
    fn validate(&self) -> ValidationResult;

    /// Title or name used in listings and logs.
    fn display_name(&self) -> &str;
}

impl Content for Shop {
    const KIND: ContentKind = ContentKind::Shop;

    fn sanitized(&self) -> Self {
        Shop::sanitized(self)
    }

    fn validate(&self) -> ValidationResult {
        validation::validate_shop(self)
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl Content for Npc {
    const KIND: ContentKind = ContentKind::Npc;

    fn sanitized(&self) -> Self {
        Npc::sanitized(self)
    }

    fn validate(&self) -> ValidationResult {
        validation::validate_npc(self)
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Content for Encounter {
    const KIND: ContentKind = ContentKind::Encounter;

    fn sanitized(&self) -> Self {
        Encounter::sanitized(self)
    }

    fn validate(&self) -> ValidationResult {
        validation::validate_encounter(self)
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl Content for SpellCard {
    const KIND: ContentKind = ContentKind::SpellCard;

    fn sanitized(&self) -> Self {
        SpellCard::sanitized(self)
    }

    fn validate(&self) -> ValidationResult {
        validation::validate_spell_card(self)
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
