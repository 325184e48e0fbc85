//! Shop and item validators

use super::rules::{
    validate_choice, validate_number, validate_text, ChoiceConstraints, FieldRule,
    NumberConstraints, StringConstraints, TextPattern,
};
use super::{member_label, ValidationResult};
use crate::entities::{Item, Shop};
use crate::value_objects::Theme;

/// Most items a single shop may list
pub const MAX_SHOP_ITEMS: usize = 100;

pub const SHOP_TITLE: StringConstraints = StringConstraints {
    label: "Shop title",
    required: true,
    min_length: 1,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const SHOP_SHOPKEEPER: StringConstraints = StringConstraints {
    label: "Shopkeeper name",
    required: false,
    min_length: 0,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const SHOP_LOCATION: StringConstraints = StringConstraints {
    label: "Shop location",
    required: false,
    min_length: 0,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const SHOP_DESCRIPTION: StringConstraints = StringConstraints {
    label: "Shop description",
    required: false,
    min_length: 0,
    max_length: 1000,
    pattern: None,
};

pub const SHOP_THEME: ChoiceConstraints = ChoiceConstraints {
    label: "Theme",
    allowed: &Theme::IDS,
};

pub const ITEM_NAME: StringConstraints = StringConstraints {
    label: "Item name",
    required: true,
    min_length: 1,
    max_length: 100,
    pattern: Some(TextPattern::Name),
};

pub const ITEM_CATEGORY: StringConstraints = StringConstraints {
    label: "Item category",
    required: true,
    min_length: 1,
    max_length: 50,
    pattern: Some(TextPattern::Category),
};

pub const ITEM_PRICE: NumberConstraints = NumberConstraints {
    label: "Item price",
    min: 0.0,
    max: 999_999.0,
};

pub const ITEM_QUANTITY: NumberConstraints = NumberConstraints {
    label: "Item quantity",
    min: 0.0,
    max: 9_999.0,
};

pub const ITEM_DESCRIPTION: StringConstraints = StringConstraints {
    label: "Item description",
    required: false,
    min_length: 0,
    max_length: 500,
    pattern: None,
};

/// Field rules for the shop editor, in form order.
pub const SHOP_FIELDS: [(&str, FieldRule); 5] = [
    ("title", FieldRule::Text(SHOP_TITLE)),
    ("shopkeeper", FieldRule::Text(SHOP_SHOPKEEPER)),
    ("location", FieldRule::Text(SHOP_LOCATION)),
    ("description", FieldRule::Text(SHOP_DESCRIPTION)),
    ("theme", FieldRule::Choice(SHOP_THEME)),
];

/// Field rules for the item row editor, in form order.
pub const ITEM_FIELDS: [(&str, FieldRule); 5] = [
    ("name", FieldRule::Text(ITEM_NAME)),
    ("category", FieldRule::Text(ITEM_CATEGORY)),
    ("price", FieldRule::Number(ITEM_PRICE)),
    ("quantity", FieldRule::Number(ITEM_QUANTITY)),
    ("description", FieldRule::Text(ITEM_DESCRIPTION)),
];

pub fn validate_shop_title(title: &str) -> ValidationResult {
    validate_text(title, &SHOP_TITLE)
}

pub fn validate_item_name(name: &str) -> ValidationResult {
    validate_text(name, &ITEM_NAME)
}

pub fn validate_item_category(category: &str) -> ValidationResult {
    validate_text(category, &ITEM_CATEGORY)
}

pub fn validate_item_price(price: f64) -> ValidationResult {
    validate_number(price, &ITEM_PRICE)
}

pub fn validate_item_quantity(quantity: f64) -> ValidationResult {
    validate_number(quantity, &ITEM_QUANTITY)
}

pub fn validate_item(item: &Item) -> ValidationResult {
    [
        validate_item_name(&item.name),
        validate_item_category(&item.category),
        validate_item_price(item.price),
        validate_item_quantity(f64::from(item.quantity)),
        validate_text(item.description.as_deref().unwrap_or_default(), &ITEM_DESCRIPTION),
    ]
    .into_iter()
    .collect()
}

pub fn validate_shop(shop: &Shop) -> ValidationResult {
    let mut result: ValidationResult = [
        validate_shop_title(&shop.title),
        validate_text(shop.shopkeeper.as_deref().unwrap_or_default(), &SHOP_SHOPKEEPER),
        validate_text(shop.location.as_deref().unwrap_or_default(), &SHOP_LOCATION),
        validate_text(shop.description.as_deref().unwrap_or_default(), &SHOP_DESCRIPTION),
        validate_choice(&shop.theme, &SHOP_THEME),
    ]
    .into_iter()
    .collect();

    if shop.items.len() > MAX_SHOP_ITEMS {
        result.push(format!("Shop cannot have more than {} items", MAX_SHOP_ITEMS));
    }

    for (index, item) in shop.items.iter().enumerate() {
        result.merge(validate_item(item).prefixed(&member_label("Item", index)));
    }
    result
}
