//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;

static FLOAT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.0$").expect("valid regex"));

/// Trim an employee id and drop the `.0` left by spreadsheet exports.
pub fn normalize_id(id: &str) -> String {
    FLOAT_SUFFIX.replace(id.trim(), "").trim().to_string()
}

/// Key used to match people by name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// "BUDI  santoso" -> "Budi  Santoso"
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Render a boolean cell: the marker when set, blank otherwise.
pub fn mark(value: bool, marker: &str) -> String {
    if value {
        marker.to_string()
    } else {
        String::new()
    }
}

