use once_cell::sync::Lazy;
use std::sync::Arc;

use super::config::SanitizerConfig;

/// Cached default configuration
static DEFAULT_CONFIG: Lazy<Arc<SanitizerConfig>> =
    Lazy::new(|| Arc::new(SanitizerConfig::default()));

/// Strategy for neutralising free text before it reaches a query or is persisted
pub trait QuerySanitizer: Send + Sync {
    fn sanitize(&self, input: &str) -> String;

    /// Absent values pass through unchanged
    fn sanitize_optional(&self, input: Option<&str>) -> Option<String> {
        input.map(|s| self.sanitize(s))
    }
}

/// Literal substring deletion over a fixed denylist.
///
/// Each entry is applied once, in order; this is not iterated to a fixed
/// point. With the default list every `$` is removed in a pass after all
/// keywords, so no `$`-prefixed operator survives, but words such as `where`
/// may remain.
#[derive(Debug, Clone)]
pub struct DenylistSanitizer {
    config: Arc<SanitizerConfig>,
}

impl DenylistSanitizer {
    pub fn new(config: SanitizerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn with_cached_config() -> Self {
        Self {
            config: Arc::clone(&DEFAULT_CONFIG),
        }
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// True if any denylisted substring occurs in `input`
    pub fn contains_blocked_patterns(&self, input: &str) -> bool {
        self.config
            .denylist
            .iter()
            .any(|pattern| input.contains(pattern.as_str()))
    }
}

impl Default for DenylistSanitizer {
    fn default() -> Self {
        Self::with_cached_config()
    }
}

impl QuerySanitizer for DenylistSanitizer {
    fn sanitize(&self, input: &str) -> String {
        self.config
            .denylist
            .iter()
            .fold(input.to_string(), |acc, pattern| {
                if acc.contains(pattern.as_str()) {
                    acc.replace(pattern.as_str(), "")
                } else {
                    acc
                }
            })
    }
}
