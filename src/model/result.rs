//! Run-level result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RankedSection, Subsection};

/// Timestamp layout: ISO-8601 UTC with microseconds and a trailing `Z`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Metadata describing the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// File names of the documents that were processed, in scan order
    pub documents: Vec<String>,
    /// Persona description, verbatim
    pub persona: String,
    /// Job description, verbatim
    pub job: String,
    /// When the run was assembled
    pub timestamp: String,
}

impl RunMetadata {
    /// Create metadata stamped with the given time.
    pub fn new(
        documents: Vec<String>,
        persona: impl Into<String>,
        job: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            documents,
            persona: persona.into(),
            job: job.into(),
            timestamp: format_timestamp(at),
        }
    }
}

/// The complete output of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Run metadata
    pub metadata: RunMetadata,
    /// Relevant pages ordered by ascending importance rank
    pub extracted_sections: Vec<RankedSection>,
    /// Full text of the top-ranked pages
    pub subsection_analysis: Vec<Subsection>,
}

impl RunResult {
    /// Whether any relevant page was found.
    pub fn has_sections(&self) -> bool {
        !self.extracted_sections.is_empty()
    }
}

/// Format a UTC time the way run metadata expects it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
