//! Rule tables and lookup windows.
//!
//! A rule is a space-separated sequence of token kinds and an [`Action`].
//! For every kind the grammar precomputes the windows needed to rebuild any
//! rule that mentions it from the parser's state: a kind at position `i` of
//! a rule of length `len` needs `i + 1` tokens from the stack (itself
//! included) and `len - i - 1` from the pending queue.
//!
//! Windows are sorted longest first, ties going to more look-behind. The
//! parser takes the first window that rebuilds a known rule, which makes
//! the longest match win without backtracking.

mod error;

pub use error::GrammarError;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::lexer::SENTINEL;
use crate::reduce::Reducer;

/// What a matched rule does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Merge the match into one token of this kind and keep parsing
    Replace(SmolStr),
    /// Emit a result; the matched tokens leave the stream
    Reduce(Reducer),
}

impl Action {
    pub fn replace(kind: impl Into<SmolStr>) -> Self {
        Self::Replace(kind.into())
    }
}

impl From<Reducer> for Action {
    fn from(reducer: Reducer) -> Self {
        Self::Reduce(reducer)
    }
}

/// A normalized rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub key: String,
    pub len: usize,
    pub action: Action,
}

impl Rule {
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.key.split(' ')
    }
}

/// Tokens needed from the stack (`behind`) and the queue (`ahead`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub behind: usize,
    pub ahead: usize,
}

impl Window {
    pub fn new(behind: usize, ahead: usize) -> Self {
        Self { behind, ahead }
    }

    pub fn span(&self) -> usize {
        self.behind + self.ahead
    }
}

/// A validated rule table with its window map.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: IndexMap<String, Rule, FxBuildHasher>,
    windows: FxHashMap<SmolStr, Vec<Window>>,
}

impl Grammar {
    /// Normalize, validate and index `rules`.
    ///
    /// Every kind a rule mentions must come from `lexer_kinds`, from a
    /// `Replace` action in the same table, or be the end sentinel. All
    /// unknown kinds are reported together.
    pub fn build<K, I>(rules: I, lexer_kinds: &FxHashSet<SmolStr>) -> Result<Self, GrammarError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Action)>,
    {
        let mut table: IndexMap<String, Rule, FxBuildHasher> = IndexMap::default();
        for (key, action) in rules {
            let key = normalize(key.as_ref());
            if key.is_empty() {
                return Err(GrammarError::EmptyRule);
            }
            let len = key.split(' ').count();
            if let Action::Reduce(reducer) = &action {
                let index = reducer.max_index();
                if index >= len {
                    return Err(GrammarError::BadReducer { key, index });
                }
            }
            if table.contains_key(&key) {
                return Err(GrammarError::DuplicateRule(key));
            }
            table.insert(key.clone(), Rule { key, len, action });
        }

        if table.is_empty() {
            return Err(GrammarError::Empty);
        }

        validate_kinds(&table, lexer_kinds)?;
        validate_replacements(&table)?;

        let windows = build_windows(&table);
        tracing::debug!(
            rules = table.len(),
            kinds = windows.len(),
            "built grammar"
        );

        Ok(Self {
            rules: table,
            windows,
        })
    }

    /// Windows for `kind`, longest first. Empty when no rule mentions it.
    pub fn windows(&self, kind: &str) -> &[Window] {
        self.windows.get(kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn rule(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Collapse runs of whitespace in a rule key to single spaces.
pub fn normalize(key: &str) -> String {
    key.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn validate_kinds(
    table: &IndexMap<String, Rule, FxBuildHasher>,
    lexer_kinds: &FxHashSet<SmolStr>,
) -> Result<(), GrammarError> {
    let produced: FxHashSet<&str> = table
        .values()
        .filter_map(|rule| match &rule.action {
            Action::Replace(kind) => Some(kind.as_str()),
            Action::Reduce(_) => None,
        })
        .collect();

    let unknown: Vec<&str> = table
        .values()
        .flat_map(Rule::kinds)
        .filter(|kind| {
            *kind != SENTINEL && !lexer_kinds.contains(*kind) && !produced.contains(kind)
        })
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(GrammarError::unknown_tokens(unknown))
    }
}

// Single-token replacements form a graph with at most one edge per kind.
// A loop in it would rename a token forever.
fn validate_replacements(
    table: &IndexMap<String, Rule, FxBuildHasher>,
) -> Result<(), GrammarError> {
    let edges: FxHashMap<&str, &str> = table
        .values()
        .filter_map(|rule| match &rule.action {
            Action::Replace(kind) if rule.len == 1 => Some((rule.key.as_str(), kind.as_str())),
            _ => None,
        })
        .collect();

    let starts = table
        .values()
        .filter(|rule| rule.len == 1)
        .map(|rule| rule.key.as_str());
    for start in starts {
        let mut path = vec![start];
        let mut current = start;
        while let Some(&next) = edges.get(current) {
            if let Some(pos) = path.iter().position(|kind| *kind == next) {
                let mut cycle: Vec<String> = path[pos..].iter().map(|k| k.to_string()).collect();
                cycle.push(next.to_string());
                return Err(GrammarError::ReplaceCycle(cycle));
            }
            path.push(next);
            current = next;
        }
    }
    Ok(())
}

fn build_windows(table: &IndexMap<String, Rule, FxBuildHasher>) -> FxHashMap<SmolStr, Vec<Window>> {
    let mut windows: FxHashMap<SmolStr, Vec<Window>> = FxHashMap::default();
    for rule in table.values() {
        for (i, kind) in rule.kinds().enumerate() {
            let window = Window::new(i + 1, rule.len - i - 1);
            let entry = windows.entry(SmolStr::new(kind)).or_default();
            if !entry.contains(&window) {
                entry.push(window);
            }
        }
    }
    for list in windows.values_mut() {
        list.sort_by(|a, b| (b.span(), b.behind).cmp(&(a.span(), a.behind)));
    }
    windows
}
