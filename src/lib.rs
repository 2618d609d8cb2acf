//! # traiter
//!
//! Trait extraction from free-text museum specimen annotations.
//!
//! Every trait shares one engine: a regex-fragment compiler builds a lexer,
//! the lexer turns text into typed token spans, and a table-driven
//! shift-reduce parser finds the longest matching rule anchored at the top
//! of its stack. Matched token runs become [`ParsedTrait`] values through
//! reducers.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract   → Batch driver: ExtractOptions, Extractor, rayon fan-out
//!   ↓
//! traits    → Per-trait lexers, rule tables, fix-ups
//!   ↓
//! parser    → Shift-reduce engine, TraitParser
//!   ↓
//! grammar   → Rule, Action, Window, Grammar::build
//!   ↓
//! reduce    → Reducers, ParsedTrait, Value, Units, Flag
//!   ↓
//! lexer     → Token, Lexer::tokenize, end-of-stream sentinel
//!   ↓
//! pattern   → Fragment, FragmentRegistry, CompiledRegex, shared vocabulary
//!   ↓
//! base      → Unit table, number parsing
//! ```

// ============================================================================
// MODULES (dependency order: base → pattern → lexer → reduce → grammar → parser → traits → extract)
// ============================================================================

/// Foundation primitives: unit conversion, number parsing
pub mod base;

/// Regex fragment registry and compiler
pub mod pattern;

/// Tokenizer over a compiled lexer regex
pub mod lexer;

/// Reducers and the parsed trait model
pub mod reduce;

/// Rule tables and lookup windows
pub mod grammar;

/// Shift-reduce parser
pub mod parser;

/// Trait definitions built on the engine
pub mod traits;

/// Record-level extraction and batch processing
pub mod extract;

mod error;

pub use error::{Error, Result};

// Re-export the core surface
pub use extract::{ExtractOptions, Extractor, Record};
pub use grammar::{Action, Grammar, GrammarError, Rule, Window};
pub use lexer::{Lexer, SENTINEL, Token};
pub use parser::TraitParser;
pub use pattern::{CompileError, CompiledRegex, Fragment, FragmentRegistry};
pub use reduce::{Flag, ParsedTrait, Reducer, Units, Value};
pub use traits::TraitKind;
