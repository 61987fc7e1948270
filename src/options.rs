//! Run options and configuration.

use crate::analysis::{HeadingOptions, DEFAULT_MAX_SUBSECTIONS};
use crate::keywords::KeywordSource;

/// Options for a ranking run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// How per-document failures are handled
    pub error_mode: ErrorMode,

    /// Maximum number of subsections in the result
    pub max_subsections: usize,

    /// Heading detection settings
    pub heading: HeadingOptions,

    /// Where the keyword set comes from
    pub keyword_source: KeywordSource,
}

impl AnalyzeOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Abort the run on the first document failure.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Skip failing documents and continue.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the subsection limit.
    pub fn with_max_subsections(mut self, max: usize) -> Self {
        self.max_subsections = max;
        self
    }

    /// Set heading detection options.
    pub fn with_heading(mut self, heading: HeadingOptions) -> Self {
        self.heading = heading;
        self
    }

    /// Choose the keyword provider.
    pub fn with_keyword_source(mut self, source: KeywordSource) -> Self {
        self.keyword_source = source;
        self
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            max_subsections: DEFAULT_MAX_SUBSECTIONS,
            heading: HeadingOptions::default(),
            keyword_source: KeywordSource::Static,
        }
    }
}

/// Error handling mode for per-document failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the run on any document error
    Strict,
    /// Log and skip the failing document
    #[default]
    Lenient,
}
