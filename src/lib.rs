//! # docrank
//!
//! Persona-driven page ranking for batches of PDF documents.
//!
//! Every page is scored by how many relevance keywords it contains, pages
//! with no matches are dropped, and the rest are ranked globally across the
//! batch. Each ranked page carries a heading picked from its largest text,
//! and the top pages are returned with their full text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docrank::{analyze_dir, render};
//!
//! fn main() -> docrank::Result<()> {
//!     // Reads persona.txt, job.txt and every *.pdf in the directory
//!     let result = analyze_dir("input")?;
//!     println!("{}", render::to_json(&result, render::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Text sources**: [`source::TextSource`] yields page text and styled runs
//! - **Scoring**: [`analysis::PageScorer`] counts keyword hits per page
//! - **Headings**: [`analysis::detect_heading`] picks the largest-font run
//! - **Ranking**: [`analysis::rank_sections`] sorts stably by score
//! - **Subsections**: [`analysis::extract_subsections`] re-reads the top pages
//!
//! Documents are processed in file name order, which decides how equal
//! scores are ranked.

pub mod analysis;
pub mod detect;
pub mod error;
pub mod input;
pub mod keywords;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use analysis::{HeadingOptions, PageScorer};
pub use error::{Error, Result};
pub use input::{scan_input_dir, RunInputs};
pub use keywords::{JobKeywords, KeywordProvider, KeywordSet, KeywordSource, StaticKeywords};
pub use model::{RankedSection, RunMetadata, RunResult, ScoredSection, Subsection};
pub use options::{AnalyzeOptions, ErrorMode};
pub use pipeline::{Analyzer, DocumentSet};
pub use render::JsonFormat;
pub use source::{LopdfSource, MemoryPage, MemorySource, StyledRun, TextSource};

use std::path::Path;

/// Rank the PDFs of a directory with default options.
///
/// The directory must contain `persona.txt` and `job.txt`.
///
/// # Example
///
/// ```no_run
/// let result = docrank::analyze_dir("/app/input").unwrap();
/// for section in &result.extracted_sections {
///     println!("{} {} {}", section.importance_rank, section.document, section.page);
/// }
/// ```
pub fn analyze_dir<P: AsRef<Path>>(dir: P) -> Result<RunResult> {
    analyze_dir_with_options(dir, AnalyzeOptions::default())
}

/// Rank the PDFs of a directory with custom options.
///
/// # Example
///
/// ```no_run
/// use docrank::{analyze_dir_with_options, AnalyzeOptions, KeywordSource};
///
/// let options = AnalyzeOptions::new()
///     .strict()
///     .with_keyword_source(KeywordSource::Job);
/// let result = analyze_dir_with_options("input", options).unwrap();
/// ```
pub fn analyze_dir_with_options<P: AsRef<Path>>(
    dir: P,
    options: AnalyzeOptions,
) -> Result<RunResult> {
    let dir = dir.as_ref();
    let inputs = RunInputs::from_dir(dir)?;
    Analyzer::from_options(options).run_dir(dir, &inputs)
}
