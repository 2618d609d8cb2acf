//! Shift-reduce parser.
//!
//! - [`shift_reduce`]: the engine, over a token stream and a [`Grammar`]
//! - [`TraitParser`]: a lexer, grammar and hooks bundled per trait
//!
//! Parsing never fails. Text no rule matches simply yields no result.

mod engine;
mod trait_parser;

pub use engine::shift_reduce;
pub use trait_parser::{FixUp, PostProcess, TraitParser};
