//! Multi-strategy package pattern matching.

use crate::package::{PackageMetadata, VirtualResolver};

/// Decides whether a query pattern matches a package record.
///
/// A pattern matches when any of these holds:
/// - the record provides a virtual package named by the pattern
/// - the pattern, as a case-sensitive shell glob, matches the whole identity
/// - the pattern occurs in the identity or description, ignoring case
pub struct PatternMatcher<'a, V: VirtualResolver> {
    resolver: &'a V,
}

impl<'a, V: VirtualResolver> PatternMatcher<'a, V> {
    pub fn new(resolver: &'a V) -> Self {
        Self { resolver }
    }

    pub fn matches(&self, record: &PackageMetadata, pattern: &str) -> bool {
        self.resolver.provides_virtual(record, pattern)
            || glob_matches(&record.identity, pattern)
            || contains_ignore_case(&record.identity, pattern)
            || (!record.description.is_empty()
                && contains_ignore_case(&record.description, pattern))
    }
}

/// Anchored glob match. Patterns that fail to compile never match.
pub fn glob_matches(identity: &str, pattern: &str) -> bool {
    compile_glob(pattern).is_some_and(|p| p.matches(identity))
}

/// Compile a shell glob with the `glob` crate.
///
/// The crate only accepts `**` as a whole path component and spells a
/// negated class `[!...]`, so runs of `*` are collapsed and a leading `[^`
/// is rewritten first. Both forms mean the same thing to `fnmatch`.
pub fn compile_glob(pattern: &str) -> Option<glob::Pattern> {
    glob::Pattern::new(&normalize_glob(pattern)).ok()
}

fn normalize_glob(pattern: &str) -> String {
    let mut normalized = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                normalized.push('*');
                while chars.next_if_eq(&'*').is_some() {}
            }
            '[' if chars.next_if_eq(&'^').is_some() => normalized.push_str("[!"),
            _ => normalized.push(c),
        }
    }
    normalized
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
