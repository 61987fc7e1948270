//! Relevance keywords.
//!
//! Scoring is driven by a [`KeywordSet`] fixed for the whole run. Where it
//! comes from is decided by a [`KeywordProvider`]: the default
//! [`StaticKeywords::kinetics`] vocabulary ignores the job text, while
//! [`JobKeywords`] derives terms from it.

use std::collections::BTreeSet;
use std::fmt;

/// Chemical-kinetics vocabulary used when no other provider is chosen.
pub const KINETICS_TERMS: &[&str] = &[
    "reaction",
    "kinetics",
    "rate",
    "mechanism",
    "rate law",
    "activation energy",
    "arrhenius",
    "collision theory",
    "transition state",
    "order",
    "first-order",
    "second-order",
];

/// An immutable set of lowercase relevance terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    terms: BTreeSet<String>,
}

impl KeywordSet {
    /// Build a set, lowercasing every term and dropping empty ones.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Iterate the terms in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the set has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether the set contains a term (case-insensitive).
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.to_lowercase())
    }
}

impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// Source of the keyword set for a run.
pub trait KeywordProvider {
    /// Produce the keyword set, optionally looking at the job description.
    fn keywords(&self, job: &str) -> KeywordSet;

    /// Short name used in logs and diagnostics.
    fn name(&self) -> &str;
}

/// A fixed keyword list, independent of the job text.
#[derive(Debug, Clone)]
pub struct StaticKeywords {
    set: KeywordSet,
}

impl StaticKeywords {
    /// Use an explicit list of terms.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            set: KeywordSet::new(terms),
        }
    }

    /// The chemical-kinetics vocabulary.
    pub fn kinetics() -> Self {
        Self::new(KINETICS_TERMS)
    }
}

impl Default for StaticKeywords {
    fn default() -> Self {
        Self::kinetics()
    }
}

impl KeywordProvider for StaticKeywords {
    fn keywords(&self, _job: &str) -> KeywordSet {
        self.set.clone()
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Derives keywords from the job description.
///
/// Words are lowercased, split on whitespace and stripped of `,.()` at both
/// ends; only words longer than `min_len` characters are kept.
#[derive(Debug, Clone)]
pub struct JobKeywords {
    min_len: usize,
}

impl JobKeywords {
    /// Keep words longer than `min_len` characters.
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }
}

impl Default for JobKeywords {
    fn default() -> Self {
        Self::new(3)
    }
}

impl KeywordProvider for JobKeywords {
    fn keywords(&self, job: &str) -> KeywordSet {
        let lowered = job.to_lowercase();
        // Length is checked before stripping punctuation.
        let words = lowered
            .split_whitespace()
            .filter(|w| w.chars().count() > self.min_len)
            .map(|w| w.trim_matches(|c| matches!(c, ',' | '.' | '(' | ')')));
        KeywordSet::new(words)
    }

    fn name(&self) -> &str {
        "job"
    }
}

/// Which provider a run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordSource {
    /// The static kinetics vocabulary
    #[default]
    Static,
    /// Terms derived from the job description
    Job,
}

impl KeywordSource {
    /// Instantiate the provider for this source.
    pub fn provider(self) -> Box<dyn KeywordProvider> {
        match self {
            KeywordSource::Static => Box::new(StaticKeywords::kinetics()),
            KeywordSource::Job => Box::new(JobKeywords::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinetics_vocabulary() {
        let set = StaticKeywords::kinetics().keywords("anything at all");
        assert_eq!(set.len(), 12);
        assert!(set.contains("rate law"));
        assert!(set.contains("Arrhenius"));
        assert!(set.contains("second-order"));
        assert!(!set.contains("enzyme"));
    }

    #[test]
    fn test_static_ignores_job() {
        let provider = StaticKeywords::default();
        assert_eq!(
            provider.keywords("Prepare a literature review on GNNs"),
            provider.keywords("")
        );
    }

    #[test]
    fn test_keyword_set_lowercases_and_dedups() {
        let set = KeywordSet::new(["Rate", "rate", "", "ORDER"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["order", "rate"]);
        assert_eq!(set.to_string(), "order, rate");
    }

    #[test]
    fn test_job_keywords() {
        let set = JobKeywords::default()
            .keywords("Identify key concepts (reaction kinetics, mechanisms) for exam prep.");
        assert!(set.contains("identify"));
        assert!(set.contains("reaction"));
        assert!(set.contains("kinetics"));
        assert!(set.contains("mechanisms"));
        assert!(set.contains("prep"));
        // "key" and "for" are too short
        assert!(!set.contains("key"));
        assert!(!set.contains("for"));
    }

    #[test]
    fn test_job_keywords_drop_words_stripped_to_nothing() {
        let set = JobKeywords::default().keywords("(...) rates");
        // an empty term would match every page
        assert!(!set.contains(""));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["rates"]);
    }

    #[test]
    fn test_keyword_source_provider() {
        assert_eq!(KeywordSource::default(), KeywordSource::Static);
        assert_eq!(KeywordSource::Static.provider().name(), "static");
        assert_eq!(KeywordSource::Job.provider().name(), "job");
    }
}
