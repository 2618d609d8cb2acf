//! Trait definitions.
//!
//! Each trait is an ordered list of lex rules, a rule table and optional
//! hooks, built into a [`TraitParser`]. Numeric traits share the fragments
//! in [`vocabulary::DEFINES`](crate::pattern::vocabulary::DEFINES).
//!
//! Lex rule order is precedence: at any offset the first rule that matches
//! wins, so keys come before the generic `word` rule and compound numbers
//! come before plain ranges.

mod body_mass;
mod ear_length;
mod fix_up;
mod hind_foot_length;
mod life_stage;
mod sex;
mod tail_length;
mod testes_size;
mod testes_state;
mod total_length;

use std::fmt;

use crate::error::Result;
use crate::grammar::Action;
use crate::parser::TraitParser;

/// Length unit kinds, for traits that keep metric, feet and inches apart.
const LENGTH_UNITS: [&str; 3] = ["metric_len", "feet", "inches"];

/// The traits this crate knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TraitKind {
    Sex,
    LifeStage,
    TotalLength,
    TailLength,
    HindFootLength,
    EarLength,
    BodyMass,
    TestesState,
    TestesSize,
}

impl TraitKind {
    pub const ALL: [TraitKind; 9] = [
        Self::Sex,
        Self::LifeStage,
        Self::TotalLength,
        Self::TailLength,
        Self::HindFootLength,
        Self::EarLength,
        Self::BodyMass,
        Self::TestesState,
        Self::TestesSize,
    ];

    /// The name stamped on every result of this trait.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sex => "sex",
            Self::LifeStage => "life_stage",
            Self::TotalLength => "total_length",
            Self::TailLength => "tail_length",
            Self::HindFootLength => "hind_foot_length",
            Self::EarLength => "ear_length",
            Self::BodyMass => "body_mass",
            Self::TestesState => "testes_state",
            Self::TestesSize => "testes_size",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Compile this trait's lexer and validate its rule table.
    pub fn build(self) -> Result<TraitParser> {
        let name = self.name();
        match self {
            Self::Sex => sex::parser(name),
            Self::LifeStage => life_stage::parser(name),
            Self::TotalLength => total_length::parser(name),
            Self::TailLength => tail_length::parser(name),
            Self::HindFootLength => hind_foot_length::parser(name),
            Self::EarLength => ear_length::parser(name),
            Self::BodyMass => body_mass::parser(name),
            Self::TestesState => testes_state::parser(name),
            Self::TestesSize => testes_size::parser(name),
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered rule table under construction.
#[derive(Debug, Default)]
struct RuleTable {
    rules: Vec<(String, Action)>,
}

impl RuleTable {
    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, key: impl Into<String>, action: impl Into<Action>) -> &mut Self {
        self.rules.push((key.into(), action.into()));
        self
    }

    /// Add `template` once per unit kind, substituted for `{units}`.
    fn add_per_unit(&mut self, template: &str, units: &[&str], action: impl Into<Action>) -> &mut Self {
        let action = action.into();
        for unit in units {
            self.rules
                .push((template.replace("{units}", unit), action.clone()));
        }
        self
    }

    fn take(&mut self) -> Vec<(String, Action)> {
        std::mem::take(&mut self.rules)
    }
}
