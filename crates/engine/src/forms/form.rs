//! Named, ordered collection of tracked fields.

use std::collections::HashMap;

use tomeforge_domain::validation::{
    ENCOUNTER_FIELDS, ITEM_FIELDS, NPC_FIELDS, SHOP_FIELDS, SPELL_CARD_FIELDS,
};
use tomeforge_domain::{FieldRule, FieldValue, Theme, ValidationResult};

use super::field::{FieldState, FieldTracker};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// Form state for one editor. Field order follows the rule table.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldTracker>,
}

impl FormState {
    /// Builds a form with every field empty and untouched.
    pub fn new(rules: &[(&'static str, FieldRule)]) -> Self {
        Self {
            fields: rules
                .iter()
                .map(|(name, rule)| FieldTracker::new(*name, *rule, FieldValue::default()))
                .collect(),
        }
    }

    /// Builds a form whose named fields start from `values`.
    ///
    /// Those values are also what `reset_form(None)` returns to.
    pub fn with_values(
        rules: &[(&'static str, FieldRule)],
        values: &HashMap<&str, FieldValue>,
    ) -> Result<Self, FormError> {
        if let Some(unknown) = values
            .keys()
            .find(|name| !rules.iter().any(|(rule_name, _)| *rule_name == **name))
        {
            return Err(FormError::UnknownField(unknown.to_string()));
        }
        Ok(Self {
            fields: rules
                .iter()
                .map(|(name, rule)| {
                    let initial = values.get(name).cloned().unwrap_or_default();
                    FieldTracker::new(*name, *rule, initial)
                })
                .collect(),
        })
    }

    /// Entity editors open on the default theme, matching the entity constructors.
    fn with_default_theme(rules: &[(&'static str, FieldRule)]) -> Self {
        let theme = FieldValue::text(Theme::default().as_str());
        Self {
            fields: rules
                .iter()
                .map(|(name, rule)| {
                    let initial = if *name == "theme" {
                        theme.clone()
                    } else {
                        FieldValue::default()
                    };
                    FieldTracker::new(*name, *rule, initial)
                })
                .collect(),
        }
    }

    pub fn shop_form() -> Self {
        Self::with_default_theme(&SHOP_FIELDS)
    }

    pub fn item_form() -> Self {
        Self::new(&ITEM_FIELDS)
    }

    pub fn npc_form() -> Self {
        Self::with_default_theme(&NPC_FIELDS)
    }

    pub fn encounter_form() -> Self {
        Self::with_default_theme(&ENCOUNTER_FIELDS)
    }

    pub fn spell_card_form() -> Self {
        Self::with_default_theme(&SPELL_CARD_FIELDS)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldTracker::name)
    }

    pub fn field(&self, name: &str) -> Result<FieldState, FormError> {
        Ok(self.tracker(name)?.state())
    }

    pub fn update_field(&self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        self.tracker(name)?.update_value(value);
        Ok(())
    }

    pub fn mark_field_as_touched(&self, name: &str) -> Result<(), FormError> {
        self.tracker(name)?.mark_as_touched();
        Ok(())
    }

    pub fn force_field_validation(&self, name: &str) -> Result<ValidationResult, FormError> {
        Ok(self.tracker(name)?.force_validation())
    }

    /// Validates every field now, marking all of them touched.
    ///
    /// Errors are flattened in field order.
    pub fn validate_all_fields(&self) -> ValidationResult {
        self.fields
            .iter()
            .map(FieldTracker::force_validation)
            .collect()
    }

    /// Resets every field. Fields named in `values` take that value and keep
    /// it as their new initial value; the rest return to their initial value.
    pub fn reset_form(&self, values: Option<&HashMap<&str, FieldValue>>) -> Result<(), FormError> {
        if let Some(values) = values {
            if let Some(unknown) = values.keys().find(|name| self.tracker(name).is_err()) {
                return Err(FormError::UnknownField(unknown.to_string()));
            }
        }
        for field in &self.fields {
            let value = values.and_then(|values| values.get(field.name()).cloned());
            field.reset(value);
        }
        Ok(())
    }

    /// True when no field currently reports errors.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| field.state().is_valid)
    }

    pub fn has_touched_fields(&self) -> bool {
        self.fields.iter().any(|field| field.state().has_been_touched)
    }

    pub fn values(&self) -> Vec<(&'static str, FieldValue)> {
        self.fields
            .iter()
            .map(|field| (field.name(), field.state().value))
            .collect()
    }

    fn tracker(&self, name: &str) -> Result<&FieldTracker, FormError> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}
