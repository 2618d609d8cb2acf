//! Regex fragment registry and compiler.
//!
//! Grammars are authored as two lists of [`Fragment`]s:
//! - **defines**: named, reusable vocabulary (`decimal`, `range`, `metric_mass`)
//! - **lex rules**: recognizers whose labels become token kinds
//!
//! Any pattern may reference a define with `(?&label)`. References are
//! inlined as non-capturing groups before compilation, so a define may be
//! used before it is declared. The lex rules are joined into one
//! alternation of named groups; at a given offset the earliest listed rule
//! that matches wins.
//!
//! All patterns compile case-insensitive with verbose syntax: whitespace is
//! ignored and `#` starts a comment.

mod error;
mod registry;
pub mod vocabulary;

pub use error::CompileError;
pub use registry::FragmentRegistry;

use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

// Fully inlined lexers are large; the default limit is too small for them.
const SIZE_LIMIT: usize = 64 * (1 << 20);

/// A named regex snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub label: String,
    pub pattern: String,
}

impl Fragment {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }
}

/// A lexer regex with its capture groups mapped back to token kinds.
///
/// Cheap to clone; the compiled program is shared.
#[derive(Debug, Clone)]
pub struct CompiledRegex {
    regex: Arc<Regex>,
    /// (capture group index, kind) in precedence order
    groups: Arc<[(usize, SmolStr)]>,
}

impl CompiledRegex {
    /// Compile `lex_rules` against the vocabulary in `defines`.
    ///
    /// Fails if a define label repeats, a reference names no define, the
    /// references form a cycle, or the resulting pattern is rejected by the
    /// regex engine.
    pub fn compile(defines: &[Fragment], lex_rules: &[Fragment]) -> Result<Self, CompileError> {
        let registry = FragmentRegistry::from_fragments(defines.iter().cloned())?;
        registry.check_references(lex_rules)?;

        let mut pattern = String::new();
        let mut names = Vec::with_capacity(lex_rules.len());
        for (i, rule) in lex_rules.iter().enumerate() {
            if !is_kind_label(&rule.label) {
                return Err(CompileError::invalid(
                    &rule.label,
                    "token kinds must be non-empty word characters",
                ));
            }
            let expanded = registry.expand(&rule.pattern)?;
            // Labels may repeat across precedence levels; group names may not.
            let group = format!("g{i}_{}", rule.label);
            if i > 0 {
                pattern.push_str("\n|");
            }
            pattern.push_str(&format!("(?P<{group}>{expanded}\n)"));
            names.push((group, SmolStr::new(&rule.label)));
        }

        let regex = build(&pattern).map_err(|err| {
            locate_invalid(&registry, lex_rules)
                .unwrap_or_else(|| CompileError::invalid("lexer", err))
        })?;

        let groups = names
            .into_iter()
            .filter_map(|(group, kind)| {
                regex
                    .capture_names()
                    .position(|name| name == Some(group.as_str()))
                    .map(|index| (index, kind))
            })
            .collect();

        tracing::debug!(
            rules = lex_rules.len(),
            defines = defines.len(),
            "compiled lexer regex"
        );

        Ok(Self {
            regex: Arc::new(regex),
            groups,
        })
    }

    /// Every token kind this regex can produce.
    pub fn kinds(&self) -> FxHashSet<SmolStr> {
        self.groups.iter().map(|(_, kind)| kind.clone()).collect()
    }

    /// Iterate over `(kind, start, end)` for each non-empty match.
    pub fn find_iter(&self, text: &str) -> impl Iterator<Item = (SmolStr, usize, usize)> {
        self.regex.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            if whole.is_empty() {
                return None;
            }
            self.groups
                .iter()
                .find(|(index, _)| caps.get(*index).is_some())
                .map(|(_, kind)| (kind.clone(), whole.start(), whole.end()))
        })
    }

    /// The full pattern source, after reference inlining.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile with the flags every grammar is authored for.
pub(crate) fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .ignore_whitespace(true)
        .size_limit(SIZE_LIMIT)
        .build()
}

fn is_kind_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// Find the first lex rule that fails on its own so the error can name it.
fn locate_invalid(registry: &FragmentRegistry, lex_rules: &[Fragment]) -> Option<CompileError> {
    lex_rules.iter().find_map(|rule| {
        let expanded = registry.expand(&rule.pattern).ok()?;
        build(&expanded).err().map(|err| CompileError::invalid(&rule.label, err))
    })
}
