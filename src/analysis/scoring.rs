//! Keyword-overlap page scoring.

use crate::keywords::KeywordSet;

/// Scores page text against a fixed keyword set.
#[derive(Debug, Clone)]
pub struct PageScorer {
    keywords: KeywordSet,
}

impl PageScorer {
    /// Create a scorer for the given keywords.
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    /// The keywords this scorer matches.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Count how many keywords occur in the page text.
    ///
    /// Matching is case-insensitive substring containment; each keyword
    /// counts at most once. Zero means the page is irrelevant.
    pub fn score(&self, page_text: &str) -> u32 {
        let text = page_text.to_lowercase();
        self.keywords.iter().filter(|kw| text.contains(kw)).count() as u32
    }
}
