//! Item entity - a priced line in a shop or an NPC's inventory

use serde::{Deserialize, Serialize};

use super::sanitize_optional;
use crate::ids::ItemId;
use crate::validation::sanitize_string;

/// An item that can be stocked by a shop or carried by an NPC.
///
/// Simple data struct: any combination of values can be constructed, and
/// [`validate_item`](crate::validation::validate_item) reports what is wrong
/// before a save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    /// Grouping shown as a heading in the shop preview (e.g., "Potions")
    pub category: String,
    /// Price in gold pieces; fractions express silver and copper
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

impl Item {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            category: category.into(),
            price,
            quantity: default_quantity(),
            description: None,
        }
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Copy with every free-text field run through the persistence sanitizer.
    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            name: sanitize_string(&self.name),
            category: sanitize_string(&self.category),
            price: self.price,
            quantity: self.quantity,
            description: sanitize_optional(&self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let item = Item::new("Healing Potion", "Potions", 50.0);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_sanitized_cleans_text_and_drops_empty_description() {
        let item = Item::new("  <b>Rope</b> ", "Gear", 1.0).with_description("<i></i>");
        let clean = item.sanitized();
        assert_eq!(clean.name, "Rope");
        assert_eq!(clean.description, None);
        assert_eq!(clean.id, item.id);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let item: Item =
            serde_json::from_str(r#"{"name":"Torch","category":"Gear","price":0.01}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, 0.01);
    }
}
