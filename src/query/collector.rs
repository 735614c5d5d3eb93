/// A package that matched a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub identity: String,
    pub description: String,
}

/// Accumulates matches in discovery order.
///
/// Nothing is deduplicated: a package matched by two patterns is collected
/// twice.
#[derive(Debug, Default)]
pub struct ResultCollector {
    results: Vec<MatchResult>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(&mut self, identity: &str, description: &str) {
        self.results.push(MatchResult {
            identity: identity.to_string(),
            description: description.to_string(),
        });
    }

    pub fn count(&self) -> usize {
        self.results.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }
}
