//! Column-aligned rendering of query results.
//!
//! Lengths are measured in characters, and truncation never splits a
//! multi-byte character.

use super::MatchResult;

pub const INSTALLED_MARKER: &str = "[*]";
pub const NOT_INSTALLED_MARKER: &str = "[-]";
pub const ELLIPSIS: &str = "...";

/// Width of the longest identity, or 0 when there are none.
pub fn alignment_width<'a, I>(identities: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    identities
        .into_iter()
        .map(|identity| identity.chars().count())
        .max()
        .unwrap_or(0)
}

/// Pad `identity` with trailing spaces up to `width`. Longer identities are
/// returned whole.
pub fn pad(identity: &str, width: usize) -> String {
    format!("{:<width$}", identity, width = width)
}

/// Render search results, one line per result, in result order.
///
/// Each line is `marker padded-identity description`, where the marker tells
/// whether `is_installed` holds for the identity. Lines longer than
/// `max_columns` lose the tail of their description and end with `...`.
pub fn render<F>(results: &[MatchResult], is_installed: F, max_columns: usize) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let width = alignment_width(results.iter().map(|r| r.identity.as_str()));

    results
        .iter()
        .map(|result| {
            let marker = if is_installed(&result.identity) {
                INSTALLED_MARKER
            } else {
                NOT_INSTALLED_MARKER
            };
            let head = format!("{} {}", marker, pad(&result.identity, width));
            fit_line(&head, &result.description, max_columns)
        })
        .collect()
}

/// Render one listing line: padded identity followed by the description.
pub fn listing_line(identity: &str, description: &str, width: usize) -> String {
    format!("{} {}", pad(identity, width), description)
}

fn fit_line(head: &str, description: &str, max_columns: usize) -> String {
    let line = format!("{} {}", head, description);
    if line.chars().count() <= max_columns {
        return line;
    }

    let head_len = head.chars().count();
    match max_columns.checked_sub(head_len + 1 + ELLIPSIS.len()) {
        Some(room) => {
            let kept: String = description.chars().take(room).collect();
            format!("{} {}{}", head, kept, ELLIPSIS)
        }
        // Not even the head fits; keep the identity whole.
        None => format!("{}{}", head.trim_end(), ELLIPSIS),
    }
}
