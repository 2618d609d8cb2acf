//! Named fragment storage and reference inlining.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};
use rustc_hash::FxHashSet;

use super::{CompileError, Fragment};

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\?&(\w+)\)").expect("valid reference pattern"));

/// Define fragments keyed by label, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FragmentRegistry {
    fragments: IndexMap<String, String>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting duplicate labels.
    pub fn from_fragments(
        fragments: impl IntoIterator<Item = Fragment>,
    ) -> Result<Self, CompileError> {
        let mut registry = Self::new();
        for fragment in fragments {
            registry.insert(fragment)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, fragment: Fragment) -> Result<(), CompileError> {
        if self.fragments.contains_key(&fragment.label) {
            return Err(CompileError::DuplicateLabel(fragment.label));
        }
        self.fragments.insert(fragment.label, fragment.pattern);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fragments.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.fragments.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    /// Report every reference, in the defines or in `lex_rules`, that names
    /// no define. All missing labels go into one error.
    pub fn check_references(&self, lex_rules: &[Fragment]) -> Result<(), CompileError> {
        let missing: FxHashSet<&str> = self
            .fragments
            .values()
            .map(String::as_str)
            .chain(lex_rules.iter().map(|rule| rule.pattern.as_str()))
            .flat_map(references)
            .filter(|label| !self.contains(label))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CompileError::undefined(missing))
        }
    }

    /// Inline every `(?&label)` in `pattern`, recursively.
    pub fn expand(&self, pattern: &str) -> Result<String, CompileError> {
        let mut path = Vec::new();
        self.expand_inner(pattern, &mut path)
    }

    fn expand_inner(&self, pattern: &str, path: &mut Vec<String>) -> Result<String, CompileError> {
        let mut failure = None;
        let expanded = REFERENCE.replace_all(pattern, |caps: &Captures| {
            if failure.is_some() {
                return String::new();
            }
            let label = &caps[1];
            match self.expand_label(label, path) {
                // Trailing newline closes any `#` comment inside the fragment
                Ok(body) => format!("(?:{body}\n)"),
                Err(err) => {
                    failure = Some(err);
                    String::new()
                }
            }
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(expanded.into_owned()),
        }
    }

    fn expand_label(&self, label: &str, path: &mut Vec<String>) -> Result<String, CompileError> {
        if path.iter().any(|seen| seen == label) {
            let mut cycle = path.clone();
            cycle.push(label.to_string());
            return Err(CompileError::CyclicFragment(cycle));
        }
        let body = self
            .get(label)
            .ok_or_else(|| CompileError::undefined([label]))?;

        path.push(label.to_string());
        let expanded = self.expand_inner(body, path);
        path.pop();
        expanded
    }
}

fn references(pattern: &str) -> impl Iterator<Item = &str> {
    REFERENCE
        .captures_iter(pattern)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}
