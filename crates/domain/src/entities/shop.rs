//! Shop entity - a titled inventory of priced items grouped by category

use serde::{Deserialize, Serialize};

use super::{sanitize_optional, Item};
use crate::validation::sanitize_string;
use crate::value_objects::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub title: String,
    #[serde(default)]
    pub shopkeeper: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Presentation theme identifier (see [`Theme::IDS`])
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

pub(super) fn default_theme() -> String {
    Theme::default().as_str().to_string()
}

impl Shop {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            shopkeeper: None,
            location: None,
            description: None,
            theme: default_theme(),
            items: Vec::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme.as_str().to_string();
        self
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Distinct categories in first-seen order, as the preview groups them.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    /// Items belonging to one category, in list order.
    pub fn items_in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Item> {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn sanitized(&self) -> Self {
        Self {
            title: sanitize_string(&self.title),
            shopkeeper: sanitize_optional(&self.shopkeeper),
            location: sanitize_optional(&self.location),
            description: sanitize_optional(&self.description),
            theme: sanitize_string(&self.theme),
            items: self.items.iter().map(Item::sanitized).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shop() -> Shop {
        let mut shop = Shop::new("The Gilded Flask");
        shop.add_item(Item::new("Healing Potion", "Potions", 50.0));
        shop.add_item(Item::new("Longsword", "Weapons", 15.0));
        shop.add_item(Item::new("Antitoxin", "Potions", 50.0));
        shop
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(sample_shop().categories(), vec!["Potions", "Weapons"]);
    }

    #[test]
    fn test_items_in_category() {
        let shop = sample_shop();
        let names: Vec<&str> = shop
            .items_in_category("Potions")
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Healing Potion", "Antitoxin"]);
    }

    #[test]
    fn test_new_uses_default_theme() {
        assert_eq!(Shop::new("x").theme, "parchment");
        assert_eq!(Shop::new("x").with_theme(Theme::Royal).theme, "royal");
    }

    #[test]
    fn test_sanitized_covers_items() {
        let mut shop = Shop::new(" <em>Bazaar</em> ");
        shop.shopkeeper = Some("onclick=steal() Mira".to_string());
        shop.add_item(Item::new("<script>x</script>Lamp", "Gear", 2.0));

        let clean = shop.sanitized();
        assert_eq!(clean.title, "Bazaar");
        assert_eq!(clean.shopkeeper.as_deref(), Some("Mira"));
        assert_eq!(clean.items[0].name, "xLamp");
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let json = serde_json::to_value(sample_shop()).unwrap();
        assert_eq!(json["title"], "The Gilded Flask");
        assert_eq!(json["items"][0]["category"], "Potions");
        assert!(json.get("shopkeeper").is_some());
    }
}
