//! Tokenizer over a compiled lexer regex.
//!
//! Text matched by no lex rule is skipped, so adjacent tokens need not be
//! adjacent in the source. Every stream ends with a zero-width
//! [`SENTINEL`] token at `text.len()`.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::pattern::{CompileError, CompiledRegex, Fragment};

/// Kind of the end-of-stream token.
pub const SENTINEL: &str = "-END-";

/// A typed span of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: SmolStr,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: impl Into<SmolStr>, start: usize, end: usize) -> Self {
        Self {
            kind: kind.into(),
            start,
            end,
        }
    }

    /// The end-of-stream token for `text`.
    pub fn sentinel(text: &str) -> Self {
        Self::new(SENTINEL, text.len(), text.len())
    }

    pub fn is_sentinel(&self) -> bool {
        self.kind == SENTINEL
    }

    /// The source text this token covers.
    pub fn text<'a>(&self, raw: &'a str) -> &'a str {
        raw.get(self.start..self.end).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Turns text into tokens.
#[derive(Debug, Clone)]
pub struct Lexer {
    regex: CompiledRegex,
}

impl Lexer {
    pub fn new(regex: CompiledRegex) -> Self {
        Self { regex }
    }

    /// Compile a lexer from defines and ordered lex rules.
    pub fn compile(defines: &[Fragment], lex_rules: &[Fragment]) -> Result<Self, CompileError> {
        CompiledRegex::compile(defines, lex_rules).map(Self::new)
    }

    /// Kinds this lexer can emit, not counting the sentinel.
    pub fn kinds(&self) -> FxHashSet<SmolStr> {
        self.regex.kinds()
    }

    /// Tokenize `text`, appending the sentinel.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = self
            .regex
            .find_iter(text)
            .map(|(kind, start, end)| Token { kind, start, end })
            .collect();
        tokens.push(Token::sentinel(text));
        tracing::trace!(count = tokens.len(), "tokenized");
        tokens
    }
}
