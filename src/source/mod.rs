//! Text source abstraction.
//!
//! The ranking pipeline never touches a PDF library directly. It reads pages
//! through [`TextSource`], which offers exactly two capabilities: the plain
//! text of page N and the styled text runs of page N. [`LopdfSource`] is the
//! production implementation; [`MemorySource`] serves tests and callers that
//! already hold extracted text.

mod memory;
mod pdf;

pub use memory::{MemoryPage, MemorySource};
pub use pdf::LopdfSource;

use crate::error::Result;

/// A fragment of page text with its font size.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    /// Text content as it appears in the content stream
    pub text: String,
    /// Effective font size in points
    pub size: f32,
}

impl StyledRun {
    /// Create a new styled run.
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }
}

/// Read-only access to the pages of one document.
///
/// Page numbers are 1-based. Runs are returned in layout order, which for
/// PDFs is content stream order.
pub trait TextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Full plain text of a page.
    fn page_text(&self, page: u32) -> Result<String>;

    /// Styled text runs of a page, in layout order.
    fn styled_runs(&self, page: u32) -> Result<Vec<StyledRun>>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn page_count(&self) -> u32 {
        (**self).page_count()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        (**self).page_text(page)
    }

    fn styled_runs(&self, page: u32) -> Result<Vec<StyledRun>> {
        (**self).styled_runs(page)
    }
}
