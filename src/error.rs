//! Crate-level error type.
//!
//! Errors only arise while building parsers. Parsing text never fails.

use thiserror::Error;

use crate::grammar::GrammarError;
use crate::pattern::CompileError;

/// Errors raised while constructing trait parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A lexer pattern failed to compile.
    #[error("Lexer for {trait_name}: {source}")]
    Compile {
        trait_name: String,
        #[source]
        source: CompileError,
    },

    /// A rule table failed validation.
    #[error("Grammar for {trait_name}: {source}")]
    Grammar {
        trait_name: String,
        #[source]
        source: GrammarError,
    },

    /// No traits were configured for extraction.
    #[error("No traits configured")]
    NoTraits,
}

impl Error {
    /// Wrap a lexer compile error for the named trait.
    pub fn compile(trait_name: impl Into<String>, source: CompileError) -> Self {
        Self::Compile {
            trait_name: trait_name.into(),
            source,
        }
    }

    /// Wrap a grammar error for the named trait.
    pub fn grammar(trait_name: impl Into<String>, source: GrammarError) -> Self {
        Self::Grammar {
            trait_name: trait_name.into(),
            source,
        }
    }
}

/// Result alias for parser construction.
pub type Result<T> = std::result::Result<T, Error>;
