//! Output rendering for run results.

mod json;
mod text;

pub use json::{to_json, write_result, JsonFormat};
pub use text::to_summary;
