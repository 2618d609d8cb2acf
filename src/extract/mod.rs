//! Record-level extraction.
//!
//! An [`Extractor`] builds every configured [`TraitParser`] once and then
//! runs them over plain text, single records or batches of records. Built
//! parsers are immutable, so batches fan out over rayon without locking.

mod options;

pub use options::ExtractOptions;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::parser::TraitParser;
use crate::reduce::ParsedTrait;

/// One specimen record: field names to free text, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub fields: IndexMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field.
    pub fn with_field(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.insert(name.into(), text.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, text)| (name.into(), text.into()))
                .collect(),
        }
    }
}

/// Runs the configured trait parsers.
#[derive(Debug, Clone)]
pub struct Extractor {
    parsers: Vec<TraitParser>,
    options: ExtractOptions,
}

impl Extractor {
    /// Build every configured trait. Definition errors surface here.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        if options.traits.is_empty() {
            return Err(Error::NoTraits);
        }
        let parsers = options
            .traits
            .iter()
            .map(|kind| kind.build())
            .collect::<Result<Vec<_>>>()?;
        info!(
            traits = parsers.len(),
            parallel = options.parallel,
            "extractor ready"
        );
        Ok(Self { parsers, options })
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn parsers(&self) -> &[TraitParser] {
        &self.parsers
    }

    /// Every trait found in `text`, grouped by trait in configured order.
    pub fn extract(&self, text: &str) -> Vec<ParsedTrait> {
        self.parsers
            .iter()
            .flat_map(|parser| parser.parse(text))
            .collect()
    }

    /// Every trait found in each field, fields in record order. Results
    /// carry the field name.
    pub fn extract_record(&self, record: &Record) -> Vec<ParsedTrait> {
        record
            .fields
            .iter()
            .flat_map(|(field, text)| {
                self.parsers
                    .iter()
                    .flat_map(move |parser| parser.parse_field(text, field))
            })
            .collect()
    }

    /// Extract each record. Output order matches input order.
    pub fn extract_batch(&self, records: &[Record]) -> Vec<Vec<ParsedTrait>> {
        let parallel = self.options.use_parallel(records.len());
        debug!(records = records.len(), parallel, "extracting batch");
        if parallel {
            records
                .par_iter()
                .map(|record| self.extract_record(record))
                .collect()
        } else {
            records
                .iter()
                .map(|record| self.extract_record(record))
                .collect()
        }
    }
}
