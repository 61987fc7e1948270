//! JSON rendering of run results.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::RunResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a run result.
pub fn to_json(result: &RunResult, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(result),
        JsonFormat::Compact => serde_json::to_string(result),
    };

    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Write a run result into `dir/file_name`, creating the directory.
///
/// Returns the path of the written file.
pub fn write_result(
    result: &RunResult,
    dir: &Path,
    file_name: &str,
    format: JsonFormat,
) -> Result<PathBuf> {
    let json = to_json(result, format)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, json)?;
    Ok(path)
}
