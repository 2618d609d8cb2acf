//! A complete parser for one trait.

use crate::error::{Error, Result};
use crate::grammar::{Action, Grammar};
use crate::lexer::Lexer;
use crate::pattern::Fragment;
use crate::reduce::ParsedTrait;

use super::shift_reduce;

/// Adjusts or vetoes one result, given the unmodified source text.
pub type FixUp = fn(ParsedTrait, &str) -> Option<ParsedTrait>;

/// Rewrites the full result list of one parse.
pub type PostProcess = fn(Vec<ParsedTrait>, &str) -> Vec<ParsedTrait>;

/// Lexer, grammar and hooks for one trait. Immutable once built, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct TraitParser {
    name: String,
    lexer: Lexer,
    grammar: Grammar,
    fix_up: Option<FixUp>,
    post_process: Option<PostProcess>,
}

impl TraitParser {
    pub fn new(name: impl Into<String>, lexer: Lexer, grammar: Grammar) -> Self {
        Self {
            name: name.into(),
            lexer,
            grammar,
            fix_up: None,
            post_process: None,
        }
    }

    /// Compile the lexer and validate the rules against its kinds.
    pub fn build<K, I>(
        name: impl Into<String>,
        defines: &[Fragment],
        lex_rules: &[Fragment],
        rules: I,
    ) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Action)>,
    {
        let name = name.into();
        let lexer = Lexer::compile(defines, lex_rules).map_err(|e| Error::compile(&name, e))?;
        let grammar = Grammar::build(rules, &lexer.kinds()).map_err(|e| Error::grammar(&name, e))?;
        tracing::debug!(trait_name = %name, rules = grammar.len(), "built trait parser");
        Ok(Self::new(name, lexer, grammar))
    }

    pub fn with_fix_up(mut self, fix_up: FixUp) -> Self {
        self.fix_up = Some(fix_up);
        self
    }

    pub fn with_post_process(mut self, post_process: PostProcess) -> Self {
        self.post_process = Some(post_process);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parse `text` into results stamped with this trait's name.
    pub fn parse(&self, text: &str) -> Vec<ParsedTrait> {
        let tokens = self.lexer.tokenize(text);
        let mut results: Vec<ParsedTrait> = shift_reduce(&self.grammar, tokens, text)
            .into_iter()
            .map(|mut parsed| {
                parsed.trait_name.clone_from(&self.name);
                parsed
            })
            .collect();

        if let Some(fix_up) = self.fix_up {
            results = results
                .into_iter()
                .filter_map(|parsed| fix_up(parsed, text))
                .collect();
        }
        if let Some(post_process) = self.post_process {
            results = post_process(results, text);
        }
        results
    }

    /// Parse `text` from a named record field.
    pub fn parse_field(&self, text: &str, field: &str) -> Vec<ParsedTrait> {
        let mut results = self.parse(text);
        for parsed in &mut results {
            parsed.field = Some(field.to_string());
        }
        results
    }
}
