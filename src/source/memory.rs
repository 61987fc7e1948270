//! In-memory text source.

use super::{StyledRun, TextSource};
use crate::error::{Error, Result};

/// One page of pre-extracted content.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    /// Plain text of the page
    pub text: String,
    /// Styled runs in layout order
    pub runs: Vec<StyledRun>,
}

impl MemoryPage {
    /// Create a page from plain text with no styled runs.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Add a styled run.
    pub fn with_run(mut self, text: impl Into<String>, size: f32) -> Self {
        self.runs.push(StyledRun::new(text, size));
        self
    }
}

/// A [`TextSource`] backed by pages held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<MemoryPage>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page; pages are numbered in insertion order starting at 1.
    pub fn with_page(mut self, page: MemoryPage) -> Self {
        self.pages.push(page);
        self
    }

    fn page(&self, page: u32) -> Result<&MemoryPage> {
        page.checked_sub(1)
            .and_then(|idx| self.pages.get(idx as usize))
            .ok_or(Error::PageOutOfRange(page, self.page_count()))
    }
}

impl FromIterator<MemoryPage> for MemorySource {
    fn from_iter<I: IntoIterator<Item = MemoryPage>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

impl TextSource for MemorySource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        Ok(self.page(page)?.text.clone())
    }

    fn styled_runs(&self, page: u32) -> Result<Vec<StyledRun>> {
        Ok(self.page(page)?.runs.clone())
    }
}
