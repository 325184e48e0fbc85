//! Text sanitizers for user-entered content.
//!
//! Two variants exist:
//! - [`sanitize_input`] runs on every keystroke. It neutralises markup
//!   without trimming so the caret does not jump while typing.
//! - [`sanitize_string`] runs before validation and persistence. It removes
//!   tags and script-like tokens entirely and trims the result.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Maximum stored length of any free-text field, in characters.
pub const MAX_TEXT_LENGTH: usize = 1000;

static ANGLE_BRACKETS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>]").expect("valid regex"));

// Live typing only strips the markers themselves
static JS_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("valid regex"));
static HANDLER_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bon\w+\s*=").expect("valid regex"));

// Persistence strips the whole token up to the next whitespace
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static JS_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:\S*").expect("valid regex"));
static HANDLER_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bon\w+\s*=\s*\S*").expect("valid regex"));

/// Lightweight cleanup for text as it is being typed.
///
/// Does not trim, so leading/trailing whitespace the user just typed survives.
pub fn sanitize_input(value: &str) -> String {
    let cleaned = ANGLE_BRACKETS_RE.replace_all(value, "");
    let cleaned = JS_MARKER_RE.replace_all(&cleaned, "");
    let cleaned = HANDLER_MARKER_RE.replace_all(&cleaned, "");
    truncate_chars(&cleaned, MAX_TEXT_LENGTH).to_string()
}

/// Full cleanup applied before validation and storage.
///
/// Idempotent: `sanitize_string(&sanitize_string(x)) == sanitize_string(x)`.
pub fn sanitize_string(value: &str) -> String {
    // A removal can splice a new token together ("<<b>b>"), so strip until stable.
    // Every pass that changes the text shortens it, which bounds the loop.
    let mut current = value.to_string();
    loop {
        let next = strip_markup(&current);
        if next == current {
            break;
        }
        current = next;
    }

    let trimmed = truncate_chars(current.trim(), MAX_TEXT_LENGTH);
    trimmed.trim_end().to_string()
}

fn strip_markup(value: &str) -> String {
    let cleaned = TAG_RE.replace_all(value, "");
    let cleaned = ANGLE_BRACKETS_RE.replace_all(&cleaned, "");
    let cleaned = JS_TOKEN_RE.replace_all(&cleaned, "");
    HANDLER_TOKEN_RE.replace_all(&cleaned, "").into_owned()
}

fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}
