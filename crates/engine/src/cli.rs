//! Commands behind the `tomeforge` binary.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use tomeforge_domain::{
    Content, ContentKind, Encounter, Npc, Shop, SpellCard, StatGenerator, ValidationResult,
    POINT_BUDGET,
};

pub const USAGE: &str = "Usage: tomeforge <command>

Commands:
  validate <shop|npc|encounter|spell_card> <file.json>
  roll [seed]";

/// Parses `json` as the given kind of content and runs its validator.
pub fn validate_json(kind: ContentKind, json: &str) -> anyhow::Result<ValidationResult> {
    match kind {
        ContentKind::Shop => validate_as::<Shop>(json),
        ContentKind::Npc => validate_as::<Npc>(json),
        ContentKind::Encounter => validate_as::<Encounter>(json),
        ContentKind::SpellCard => validate_as::<SpellCard>(json),
    }
}

pub fn validate_file(kind: ContentKind, path: &Path) -> anyhow::Result<ValidationResult> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    validate_json(kind, &json).with_context(|| format!("validating {}", path.display()))
}

fn validate_as<T: Content>(json: &str) -> anyhow::Result<ValidationResult> {
    let content: T =
        serde_json::from_str(json).with_context(|| format!("parsing {} JSON", T::KIND))?;
    tracing::debug!(kind = %T::KIND, name = content.display_name(), "Validating content");
    Ok(content.validate())
}

pub fn format_validation(result: &ValidationResult) -> String {
    if result.is_valid {
        return "valid".to_string();
    }
    let mut out = format!("invalid ({} errors)", result.errors.len());
    for error in &result.errors {
        let _ = write!(out, "\n  - {}", error);
    }
    out
}

/// Column dice (ignored dice in brackets), totals and the ability summary.
pub fn format_roll(generator: &StatGenerator) -> String {
    let mut out = String::new();
    for (index, column) in generator.columns().iter().enumerate() {
        let dice: Vec<String> = column
            .dice()
            .iter()
            .map(|die| {
                if die.is_ignored() {
                    format!("[{}]", die.value())
                } else {
                    die.value().to_string()
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "Column {}: {} = {}",
            index + 1,
            dice.join(" "),
            column.total()
        );
    }
    let _ = writeln!(
        out,
        "Used {} of {}, remaining {}",
        generator.total_used(),
        POINT_BUDGET,
        generator.remaining_points()
    );
    for entry in generator.ability_summary() {
        let _ = writeln!(
            out,
            "{} {:>2} ({})",
            entry.ability.abbreviation(),
            entry.score,
            entry.modifier_display()
        );
    }
    out
}
