//! Section and subsection records.

use serde::{Deserialize, Serialize};

/// A relevant page before ranking.
///
/// The raw score is only a sort key and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSection {
    /// Document file name
    pub document: String,
    /// Page number (1-indexed)
    pub page: u32,
    /// Detected heading of the page
    pub section_title: String,
    /// Number of keywords found on the page
    pub score: u32,
}

impl ScoredSection {
    /// Create a scored section.
    pub fn new(
        document: impl Into<String>,
        page: u32,
        title: impl Into<String>,
        score: u32,
    ) -> Self {
        Self {
            document: document.into(),
            page,
            section_title: title.into(),
            score,
        }
    }

    /// Convert into a ranked section, dropping the raw score.
    pub fn into_ranked(self, importance_rank: u32) -> RankedSection {
        RankedSection {
            document: self.document,
            page: self.page,
            section_title: self.section_title,
            importance_rank,
        }
    }
}

/// A relevant page with its position in the global ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSection {
    /// Document file name
    pub document: String,
    /// Page number (1-indexed)
    pub page: u32,
    /// Detected heading of the page
    pub section_title: String,
    /// Dense 1-based rank across all documents
    pub importance_rank: u32,
}

impl RankedSection {
    /// The `(document, page)` pair identifying this section.
    pub fn key(&self) -> (&str, u32) {
        (&self.document, self.page)
    }
}

/// Full text of a top-ranked page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    /// Document file name
    pub document: String,
    /// Page number (1-indexed)
    pub page: u32,
    /// Page text with surrounding whitespace trimmed
    pub refined_text: String,
}
