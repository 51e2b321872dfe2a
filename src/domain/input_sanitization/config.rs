use serde::{Deserialize, Serialize};

/// Operator keywords, removed before the bare characters.
///
/// Longer keywords precede their prefixes (`$gte` before `$gt`) so that a
/// keyword is never left half-deleted.
const OPERATOR_KEYWORDS: [&str; 12] = [
    "$where", "$regex", "$gte", "$lte", "$gt", "$lt", "$ne", "$nin", "$and", "$or", "$not",
    "$nor",
];

/// Characters with structural meaning in document filters and field paths
const STRUCTURAL_CHARS: [&str; 4] = ["$", "{", "}", "."];

/// Denylist sanitization configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizerConfig {
    /// Substrings deleted from input, one pass each, in this order
    pub denylist: Vec<String>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        let denylist = OPERATOR_KEYWORDS
            .iter()
            .chain(STRUCTURAL_CHARS.iter())
            .map(|s| s.to_string())
            .collect();

        Self { denylist }
    }
}

impl SanitizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern; it runs after every existing entry
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if !pattern.is_empty() && !self.denylist.contains(&pattern) {
            self.denylist.push(pattern);
        }
        self
    }
}
