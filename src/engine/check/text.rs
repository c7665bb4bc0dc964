use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("whitespace pattern is valid"));
static FOREIGN_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S ]").expect("foreign whitespace pattern is valid"));
static CONSECUTIVE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("consecutive space pattern is valid"));
static LEADING_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]").expect("leading digit pattern is valid"));

pub(crate) fn has_whitespace(text: &str) -> bool {
    WHITESPACE.is_match(text)
}

/// Any whitespace other than U+0020.
pub(crate) fn has_foreign_whitespace(text: &str) -> bool {
    FOREIGN_WHITESPACE.is_match(text)
}

pub(crate) fn has_consecutive_spaces(text: &str) -> bool {
    CONSECUTIVE_SPACES.is_match(text)
}

pub(crate) fn has_edge_space(text: &str) -> bool {
    text.trim() != text
}

pub(crate) fn has_leading_digit(text: &str) -> bool {
    LEADING_DIGIT.is_match(text)
}

/// Position of the first item that has an equal item later in the list.
///
/// The earliest item whose value occurs more than once is always such an
/// item, so counting occurrences first keeps this linear.
pub(crate) fn first_repeated<S>(items: &[S]) -> Option<usize>
where
    S: AsRef<str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(item.as_ref()).or_default() += 1;
    }
    items
        .iter()
        .position(|item| counts.get(item.as_ref()).is_some_and(|count| *count > 1))
}
