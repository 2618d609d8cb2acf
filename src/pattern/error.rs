//! Compile errors for lexer patterns.

use std::fmt::Display;

use thiserror::Error;

/// Errors raised while assembling a lexer regex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// One or more `(?&label)` references name no define. Lists every
    /// missing label, sorted and comma separated.
    #[error("Undefined fragment: {0}")]
    UndefinedFragment(String),

    /// A chain of references returns to a label already being expanded.
    #[error("Cyclic fragment reference: {}", .0.join(" -> "))]
    CyclicFragment(Vec<String>),

    /// Two defines share a label.
    #[error("Duplicate fragment label: {0}")]
    DuplicateLabel(String),

    /// The regex engine rejected a pattern.
    #[error("Invalid pattern for {label}: {message}")]
    Invalid { label: String, message: String },
}

impl CompileError {
    /// Create an undefined-fragment error from every missing label.
    pub fn undefined<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        labels.sort();
        labels.dedup();
        Self::UndefinedFragment(labels.join(", "))
    }

    /// Create an invalid-pattern error.
    pub fn invalid(label: impl Into<String>, message: impl Display) -> Self {
        Self::Invalid {
            label: label.into(),
            message: message.to_string(),
        }
    }
}
