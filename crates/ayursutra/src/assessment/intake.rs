mod batch;

pub use batch::{AssessmentCsvImporter, CsvIntakeError};

use super::domain::{Answer, Category};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw questionnaire submission as received from a caller.
///
/// This is the permissive edge of the model: values may be null or empty,
/// keys may name categories the questionnaire does not know, and answer
/// strings may be unrecognized. None of that is an error; entries that do
/// not resolve simply contribute nothing to the score. Structurally
/// malformed payloads (not an object of nullable strings) fail in the
/// deserializer before an `AnswerSet` ever exists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, Option<String>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), Some(value.into())))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, category: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(category.into(), Some(value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Yields the typed answers that matched a known category and answer
    /// value. Null, empty, and unrecognized entries are skipped.
    pub fn resolved(&self) -> impl Iterator<Item = Answer> + '_ {
        self.entries.iter().filter_map(|(key, value)| {
            let value = value.as_deref()?;
            if value.trim().is_empty() {
                return None;
            }
            let category = Category::from_key(key)?;
            Answer::parse(category, value)
        })
    }
}
