//! Presentation theme identifiers.
//!
//! The core never renders anything; it only carries the identifier that the
//! preview pane and print export use to pick their styling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Parchment,
    Dark,
    Arcane,
    Nature,
    Royal,
    Infernal,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Self::Parchment,
        Self::Dark,
        Self::Arcane,
        Self::Nature,
        Self::Royal,
        Self::Infernal,
    ];

    /// Identifiers accepted by the theme choice rule.
    pub const IDS: [&'static str; 6] = ["parchment", "dark", "arcane", "nature", "royal", "infernal"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parchment => "parchment",
            Self::Dark => "dark",
            Self::Arcane => "arcane",
            Self::Nature => "nature",
            Self::Royal => "royal",
            Self::Infernal => "infernal",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown theme: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_variants() {
        for (theme, id) in Theme::ALL.iter().zip(Theme::IDS) {
            assert_eq!(theme.as_str(), id);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(Theme::from_str("Dark"), Ok(Theme::Dark));
        assert_eq!(Theme::from_str(" arcane "), Ok(Theme::Arcane));
        assert!(Theme::from_str("neon").is_err());
    }

    #[test]
    fn test_default_is_parchment() {
        assert_eq!(Theme::default(), Theme::Parchment);
    }
}
