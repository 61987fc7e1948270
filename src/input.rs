//! Run inputs: persona and job descriptions, and the document directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default persona file name inside the input directory.
pub const PERSONA_FILE: &str = "persona.txt";

/// Default job description file name inside the input directory.
pub const JOB_FILE: &str = "job.txt";

/// Persona and job text for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInputs {
    /// Persona description
    pub persona: String,
    /// Job description
    pub job: String,
}

impl RunInputs {
    /// Create inputs from text already in memory.
    pub fn new(persona: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            job: job.into(),
        }
    }

    /// Read both files. Either one missing is fatal.
    pub fn load(persona: &Path, job: &Path) -> Result<Self> {
        Ok(Self {
            persona: load_text(persona)?,
            job: load_text(job)?,
        })
    }

    /// Read `persona.txt` and `job.txt` from a directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::load(&dir.join(PERSONA_FILE), &dir.join(JOB_FILE))
    }
}

/// Read a UTF-8 text file and trim surrounding whitespace.
pub fn load_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map(|text| text.trim().to_string())
        .map_err(|source| Error::MissingInput {
            path: path.to_path_buf(),
            source,
        })
}

/// List the PDF files of a directory, sorted by file name.
///
/// The extension check is case-insensitive. The sort fixes discovery order,
/// which decides how equal scores are ranked.
pub fn scan_input_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && entry.file_type()?.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// The file name of a path as a display string.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_text_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona.txt");
        fs::write(&path, "\n  Undergraduate Chemistry Student \n\n").unwrap();
        assert_eq!(load_text(&path).unwrap(), "Undergraduate Chemistry Student");
    }

    #[test]
    fn test_missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PERSONA_FILE), "Student").unwrap();

        let err = RunInputs::from_dir(dir.path()).unwrap_err();
        match err {
            Error::MissingInput { path, .. } => assert!(path.ends_with(JOB_FILE)),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_scan_sorted_pdfs_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.pdf", "a.PDF", "b.pdf", "notes.txt", "job.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("folder.pdf")).unwrap();

        let names: Vec<String> = scan_input_dir(dir.path())
            .unwrap()
            .iter()
            .map(|p| document_name(p))
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            scan_input_dir(&dir.path().join("nope")),
            Err(Error::Io(_))
        ));
    }
}
