//! Relevance analysis: page scoring, heading detection, ranking and
//! subsection extraction.

mod heading;
mod ranking;
mod scoring;
mod subsection;

pub use heading::{detect_heading, HeadingOptions};
pub use ranking::rank_sections;
pub use scoring::PageScorer;
pub use subsection::{extract_subsections, DocumentLookup, DEFAULT_MAX_SUBSECTIONS};

use crate::error::Result;
use crate::model::ScoredSection;
use crate::source::TextSource;

/// Score and heading of a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    /// Page number (1-indexed)
    pub page: u32,
    /// Number of keywords found
    pub score: u32,
    /// Detected heading, or `None` when the page was not relevant
    pub heading: Option<String>,
}

/// Score every page of a document, in page order.
///
/// Headings are only detected for pages with a positive score.
pub fn analyze_document<S>(
    source: &S,
    scorer: &PageScorer,
    heading: &HeadingOptions,
) -> Result<Vec<PageReport>>
where
    S: TextSource + ?Sized,
{
    let mut reports = Vec::with_capacity(source.page_count() as usize);

    for page in 1..=source.page_count() {
        let score = scorer.score(&source.page_text(page)?);
        let title = if score > 0 {
            Some(detect_heading(&source.styled_runs(page)?, heading))
        } else {
            None
        };

        log::debug!("page {}: score={} heading={:?}", page, score, title);
        reports.push(PageReport {
            page,
            score,
            heading: title,
        });
    }

    Ok(reports)
}

/// Turn page reports into scored sections, keeping only relevant pages.
pub fn scored_sections(document: &str, reports: Vec<PageReport>) -> Vec<ScoredSection> {
    reports
        .into_iter()
        .filter_map(|r| {
            r.heading
                .map(|title| ScoredSection::new(document, r.page, title, r.score))
        })
        .collect()
}
