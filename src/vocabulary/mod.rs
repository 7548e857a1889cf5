//! Vocabulary validation
//!
//! Free-form flower/style input is filtered against a fixed allow-list:
//! - Candidates are trimmed (and lower-cased for case-insensitive lists)
//! - Anything not in the list is dropped silently
//! - Order and repetition survive, since repeats encode stem count
//!
//! An empty result is not an error here; callers decide whether the
//! field was required.

mod catalog;

pub use catalog::{
    bouquet_flowers, decoration_flowers, FlowerCategory, DECORATION_FLOWERS, FLOWER_CATEGORIES,
    RIBBON_COLORS,
};

use serde::{Deserialize, Serialize};

/// Raw list input: either a comma-delimited string or an already-split list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawList {
    Joined(String),
    Items(Vec<String>),
}

impl RawList {
    /// Split into individual candidates (untrimmed)
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            RawList::Joined(s) => s.split(',').collect(),
            RawList::Items(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// A whitespace-only string counts as an absent field
    pub fn is_blank(&self) -> bool {
        matches!(self, RawList::Joined(s) if s.trim().is_empty())
    }
}

impl From<&str> for RawList {
    fn from(s: &str) -> Self {
        RawList::Joined(s.to_string())
    }
}

impl From<Vec<String>> for RawList {
    fn from(items: Vec<String>) -> Self {
        RawList::Items(items)
    }
}

impl From<&[&str]> for RawList {
    fn from(items: &[&str]) -> Self {
        RawList::Items(items.iter().map(|s| s.to_string()).collect())
    }
}

/// Ordered set of canonical labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping repeated labels
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !out.contains(&label) {
                out.push(label);
            }
        }
        Self { labels: out }
    }

    /// Same vocabulary with every label lower-cased
    pub fn lowered(&self) -> Self {
        Self::new(self.labels.iter().map(|l| l.to_lowercase()))
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.labels.iter().any(|l| l == candidate)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels joined for error messages and prompts
    pub fn joined(&self) -> String {
        self.labels.join(", ")
    }
}

/// Filter `input` against `vocabulary`.
///
/// With `case_insensitive`, candidates are lower-cased before the
/// membership test; the vocabulary must already be lower-case.
pub fn normalize(input: &RawList, vocabulary: &Vocabulary, case_insensitive: bool) -> Vec<String> {
    input
        .candidates()
        .into_iter()
        .map(|c| {
            let c = c.trim();
            if case_insensitive {
                c.to_lowercase()
            } else {
                c.to_string()
            }
        })
        .filter(|c| vocabulary.contains(c))
        .collect()
}
