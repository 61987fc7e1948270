//! The ranking pipeline.
//!
//! Documents are scored one at a time in the order they were added. Ranking
//! waits until every document is done, then the top pages are re-read for
//! their full text and everything is assembled into a [`RunResult`].

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::analysis::{
    analyze_document, extract_subsections, rank_sections, scored_sections, DocumentLookup,
    PageScorer,
};
use crate::error::Result;
use crate::input::{document_name, scan_input_dir, RunInputs};
use crate::keywords::{KeywordProvider, KeywordSet};
use crate::model::{RunMetadata, RunResult};
use crate::options::{AnalyzeOptions, ErrorMode};
use crate::source::{LopdfSource, TextSource};

/// A named document ready for analysis.
pub struct LoadedDocument {
    name: String,
    source: Box<dyn TextSource>,
}

impl LoadedDocument {
    /// Document file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The document's pages.
    pub fn source(&self) -> &dyn TextSource {
        self.source.as_ref()
    }
}

/// The documents of a run, in discovery order.
#[derive(Default)]
pub struct DocumentSet {
    documents: Vec<LoadedDocument>,
}

impl DocumentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document. Names must be unique within a run.
    pub fn push(&mut self, name: impl Into<String>, source: impl TextSource + 'static) {
        self.documents.push(LoadedDocument {
            name: name.into(),
            source: Box::new(source),
        });
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_document(
        mut self,
        name: impl Into<String>,
        source: impl TextSource + 'static,
    ) -> Self {
        self.push(name, source);
        self
    }

    /// Open every PDF in a directory, in file name order.
    ///
    /// A file that cannot be opened is skipped with a warning in lenient
    /// mode and aborts in strict mode. An unreadable directory always fails.
    pub fn open_dir(dir: &Path, mode: ErrorMode) -> Result<Self> {
        let mut set = Self::new();
        for path in scan_input_dir(dir)? {
            let name = document_name(&path);
            match LopdfSource::open(&path) {
                Ok(source) => set.push(name, source),
                Err(e) if mode == ErrorMode::Lenient => {
                    log::warn!("Skipping {}: {}", name, e);
                }
                Err(e) => return Err(e.in_document(&name)),
            }
        }
        Ok(set)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate documents in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &LoadedDocument> {
        self.documents.iter()
    }
}

impl DocumentLookup for DocumentSet {
    fn source(&self, document: &str) -> Option<&dyn TextSource> {
        self.documents
            .iter()
            .find(|d| d.name == document)
            .map(|d| d.source())
    }
}

/// Runs the scoring, ranking and extraction stages.
pub struct Analyzer {
    options: AnalyzeOptions,
    provider: Box<dyn KeywordProvider>,
}

impl Analyzer {
    /// Create an analyzer with an explicit keyword provider.
    pub fn new(options: AnalyzeOptions, provider: Box<dyn KeywordProvider>) -> Self {
        Self { options, provider }
    }

    /// Create an analyzer using the provider named in the options.
    pub fn from_options(options: AnalyzeOptions) -> Self {
        let provider = options.keyword_source.provider();
        Self::new(options, provider)
    }

    /// The options of this analyzer.
    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// The keyword set a run with this job description would use.
    pub fn keywords(&self, job: &str) -> KeywordSet {
        self.provider.keywords(job)
    }

    /// Open every PDF in `dir` and run the pipeline over them.
    pub fn run_dir(&self, dir: &Path, inputs: &RunInputs) -> Result<RunResult> {
        let documents = DocumentSet::open_dir(dir, self.options.error_mode)?;
        self.run(inputs, &documents)
    }

    /// Run the pipeline, stamping the result with the current time.
    pub fn run(&self, inputs: &RunInputs, documents: &DocumentSet) -> Result<RunResult> {
        self.run_at(inputs, documents, Utc::now())
    }

    /// Run the pipeline with an explicit timestamp.
    pub fn run_at(
        &self,
        inputs: &RunInputs,
        documents: &DocumentSet,
        at: DateTime<Utc>,
    ) -> Result<RunResult> {
        let keywords = self.keywords(&inputs.job);
        log::info!(
            "Scoring {} document(s) with {} {} keyword(s)",
            documents.len(),
            keywords.len(),
            self.provider.name()
        );
        let scorer = PageScorer::new(keywords);

        let mut processed = Vec::with_capacity(documents.len());
        let mut sections = Vec::new();

        for doc in documents.iter() {
            match analyze_document(doc.source(), &scorer, &self.options.heading) {
                Ok(reports) => {
                    let found = scored_sections(doc.name(), reports);
                    log::debug!("{}: {} relevant page(s)", doc.name(), found.len());
                    sections.extend(found);
                    processed.push(doc.name().to_string());
                }
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Skipping {}: {}", doc.name(), e);
                }
                Err(e) => return Err(e.in_document(doc.name())),
            }
        }

        let ranked = rank_sections(sections);
        let subsections = extract_subsections(&ranked, documents, self.options.max_subsections)?;

        log::info!(
            "Ranked {} section(s) across {} document(s), {} subsection(s)",
            ranked.len(),
            processed.len(),
            subsections.len()
        );

        Ok(RunResult {
            metadata: RunMetadata::new(processed, inputs.persona.clone(), inputs.job.clone(), at),
            extracted_sections: ranked,
            subsection_analysis: subsections,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::from_options(AnalyzeOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::keywords::StaticKeywords;
    use crate::source::{MemoryPage, MemorySource, StyledRun};

    /// A source whose text extraction fails on a given page.
    struct BrokenSource {
        pages: u32,
        broken_page: u32,
    }

    impl TextSource for BrokenSource {
        fn page_count(&self) -> u32 {
            self.pages
        }

        fn page_text(&self, page: u32) -> Result<String> {
            if page == self.broken_page {
                Err(Error::TextExtract(format!("Page {}: bad stream", page)))
            } else {
                Ok("reaction rate".to_string())
            }
        }

        fn styled_runs(&self, _page: u32) -> Result<Vec<StyledRun>> {
            Ok(vec![StyledRun::new("Broken Doc Heading", 16.0)])
        }
    }

    fn inputs() -> RunInputs {
        RunInputs::new("Chemistry student", "Study reaction kinetics")
    }

    fn good_doc() -> MemorySource {
        MemorySource::new().with_page(
            MemoryPage::with_text("Arrhenius and activation energy")
                .with_run("Temperature Effects", 16.0),
        )
    }

    #[test]
    fn test_lenient_skips_failed_document() {
        let docs = DocumentSet::new()
            .with_document("a.pdf", BrokenSource { pages: 3, broken_page: 2 })
            .with_document("b.pdf", good_doc());

        let result = Analyzer::default().run(&inputs(), &docs).unwrap();
        assert_eq!(result.metadata.documents, vec!["b.pdf"]);
        // page 1 of a.pdf scored before the failure, but must not leak through
        assert!(result.extracted_sections.iter().all(|s| s.document == "b.pdf"));
        assert_eq!(result.subsection_analysis.len(), 1);
    }

    #[test]
    fn test_strict_aborts() {
        let docs = DocumentSet::new()
            .with_document("b.pdf", good_doc())
            .with_document("a.pdf", BrokenSource { pages: 2, broken_page: 1 });

        let analyzer = Analyzer::from_options(AnalyzeOptions::new().strict());
        let err = analyzer.run(&inputs(), &docs).unwrap_err();
        assert!(err.to_string().contains("a.pdf"));
    }

    #[test]
    fn test_custom_provider() {
        let docs = DocumentSet::new().with_document(
            "bio.pdf",
            MemorySource::new().with_page(MemoryPage::with_text("Enzyme catalysis")),
        );

        let default_result = Analyzer::default().run(&inputs(), &docs).unwrap();
        assert!(default_result.extracted_sections.is_empty());

        let analyzer = Analyzer::new(
            AnalyzeOptions::default(),
            Box::new(StaticKeywords::new(["enzyme"])),
        );
        let result = analyzer.run(&inputs(), &docs).unwrap();
        assert_eq!(result.extracted_sections.len(), 1);
        assert_eq!(result.extracted_sections[0].section_title, "Untitled");
    }

    #[test]
    fn test_lookup_by_name() {
        let docs = DocumentSet::new().with_document("b.pdf", good_doc());
        assert!(docs.source("b.pdf").is_some());
        assert!(docs.source("a.pdf").is_none());
    }
}
