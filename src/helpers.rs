use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("Invalid regex"));

/// Machine-readable id for a label: lowercase, with every character outside
/// `[A-Za-z0-9_]` replaced by `-`.
#[must_use]
pub fn string_to_element_id(s: &str) -> String {
    NON_WORD.replace_all(&s.to_lowercase(), "-").into_owned()
}
