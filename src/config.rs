//! Store configuration parsed from environment variables.

use crate::lifecycle::DEFAULT_PAGE_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardsConfig {
    /// Page size the store starts with, before any fetch reports its own.
    pub page_limit: u64,
}

impl Default for BoardsConfig {
    fn default() -> Self {
        Self { page_limit: DEFAULT_PAGE_LIMIT }
    }
}

impl BoardsConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BOARDS_PAGE_LIMIT`: default 50; zero or unparseable values fall back
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self { page_limit: parse_positive_u64(lookup("BOARDS_PAGE_LIMIT").as_deref(), DEFAULT_PAGE_LIMIT) }
    }
}

fn parse_positive_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
