//! The shift-reduce loop.

use std::collections::VecDeque;

use crate::grammar::{Action, Grammar, Rule, Window};
use crate::lexer::Token;
use crate::reduce::ParsedTrait;

/// Parse `tokens` (ending in the sentinel) against `grammar`.
///
/// Each step looks up the windows of the stack's top kind, longest first.
/// The first window whose kinds spell a rule wins: its look-ahead tokens
/// are shifted and the rule's tokens popped. A `Replace` pushes one merged
/// token back for further matching; a `Reduce` emits a result and drops
/// the tokens. With no match, one token is shifted; with nothing left to
/// shift, parsing stops.
pub fn shift_reduce(grammar: &Grammar, tokens: Vec<Token>, raw: &str) -> Vec<ParsedTrait> {
    let mut queue: VecDeque<Token> = tokens.into();
    let mut stack: Vec<Token> = Vec::with_capacity(queue.len());
    let mut results = Vec::new();
    let mut key = String::new();

    // Runs until the queue is drained and nothing on the stack matches, so
    // a merge that consumes the sentinel is still reduced.
    loop {
        let Some((rule, window)) = find_longest_match(grammar, &stack, &queue, &mut key) else {
            let Some(token) = queue.pop_front() else {
                break;
            };
            tracing::trace!(kind = %token.kind, start = token.start, "shift");
            stack.push(token);
            continue;
        };

        stack.extend(queue.drain(..window.ahead));
        let matched = stack.split_off(stack.len() - rule.len);
        let (Some(first), Some(last)) = (matched.first(), matched.last()) else {
            continue;
        };

        match &rule.action {
            Action::Replace(kind) => {
                tracing::trace!(rule = %rule.key, kind = %kind, "replace");
                stack.push(Token::new(kind.clone(), first.start, last.end));
            }
            Action::Reduce(reducer) => match reducer.apply(&matched, raw) {
                Some(parsed) => {
                    tracing::debug!(rule = %rule.key, start = parsed.start, end = parsed.end, "reduce");
                    results.push(parsed);
                }
                None => tracing::debug!(rule = %rule.key, "reducer vetoed match"),
            },
        }
    }

    results
}

// The first window of the top-of-stack kind that spells a rule. Windows
// reaching past either end of the state are skipped.
fn find_longest_match<'g>(
    grammar: &'g Grammar,
    stack: &[Token],
    queue: &VecDeque<Token>,
    key: &mut String,
) -> Option<(&'g Rule, Window)> {
    let tos = stack.last()?;
    grammar.windows(&tos.kind).iter().find_map(|&window| {
        if window.behind > stack.len() || window.ahead > queue.len() {
            return None;
        }
        key.clear();
        let behind = &stack[stack.len() - window.behind..];
        for (i, token) in behind.iter().chain(queue.iter().take(window.ahead)).enumerate() {
            if i > 0 {
                key.push(' ');
            }
            key.push_str(&token.kind);
        }
        grammar.rule(key.as_str()).map(|rule| (rule, window))
    })
}
