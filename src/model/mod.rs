//! Records produced by the ranking pipeline.
//!
//! A [`ScoredSection`] is created for every relevant page, turned into a
//! [`RankedSection`] once the global order is known, and the top pages are
//! expanded into [`Subsection`]s. Everything is collected into a
//! [`RunResult`] for serialization.

mod result;
mod section;

pub use result::{format_timestamp, RunMetadata, RunResult};
pub use section::{RankedSection, ScoredSection, Subsection};
