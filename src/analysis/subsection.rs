//! Subsection extraction for the top-ranked pages.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::{RankedSection, Subsection};
use crate::source::TextSource;

/// Default number of subsections per run.
pub const DEFAULT_MAX_SUBSECTIONS: usize = 3;

/// Lookup of loaded documents by name.
pub trait DocumentLookup {
    /// The text source for a document, if it is part of the run.
    fn source(&self, document: &str) -> Option<&dyn TextSource>;
}

/// Look at the first `limit` ranked entries and return the full text,
/// trimmed, of each distinct `(document, page)` pair among them.
///
/// Repeated pairs inside the window are skipped, not replaced by later
/// entries, so fewer than `limit` subsections can come back.
pub fn extract_subsections<D>(
    ranked: &[RankedSection],
    documents: &D,
    limit: usize,
) -> Result<Vec<Subsection>>
where
    D: DocumentLookup + ?Sized,
{
    let mut seen = HashSet::new();
    let mut subsections = Vec::with_capacity(limit.min(ranked.len()));

    for section in ranked.iter().take(limit) {
        if !seen.insert(section.key()) {
            continue;
        }

        let source = documents
            .source(&section.document)
            .ok_or_else(|| Error::DocumentNotFound(section.document.clone()))?;
        let text = source
            .page_text(section.page)
            .map_err(|e| e.in_document(&section.document))?;

        subsections.push(Subsection {
            document: section.document.clone(),
            page: section.page,
            refined_text: text.trim().to_string(),
        });
    }

    Ok(subsections)
}
