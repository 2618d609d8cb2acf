//! Grammar validation errors.

use thiserror::Error;

/// Errors raised while building a [`super::Grammar`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Rules mention kinds that neither the lexer nor any `Replace` action
    /// produces. Sorted and deduplicated.
    #[error("Unknown tokens: {}", .0.join(", "))]
    UnknownTokens(Vec<String>),

    /// The table has no rules.
    #[error("No rules")]
    Empty,

    /// A rule key is blank.
    #[error("Empty rule key")]
    EmptyRule,

    /// Two rules normalize to the same key.
    #[error("Duplicate rule: {0}")]
    DuplicateRule(String),

    /// A reducer reads a token index past the end of its rule.
    #[error("Reducer for '{key}' reads token {index}, past the end of the rule")]
    BadReducer { key: String, index: usize },

    /// Single-token replacements loop back on themselves.
    #[error("Replace cycle: {}", .0.join(" -> "))]
    ReplaceCycle(Vec<String>),
}

impl GrammarError {
    /// Create an unknown-token error, sorting and deduplicating the kinds.
    pub fn unknown_tokens<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kinds: Vec<String> = kinds.into_iter().map(Into::into).collect();
        kinds.sort();
        kinds.dedup();
        Self::UnknownTokens(kinds)
    }
}
