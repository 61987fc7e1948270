//! PDF header sniffing.
//!
//! Documents are checked for the `%PDF-x.y` magic before they are handed to
//! the parser, so a mislabelled file fails fast with [`Error::UnknownFormat`].

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Read the header of a file and return its PDF version string.
pub fn sniff_pdf_version<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;
    pdf_version_from_bytes(&header)
}

/// Return the PDF version from a header byte slice.
pub fn pdf_version_from_bytes(data: &[u8]) -> Result<String> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let version = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version).to_string();

    let mut chars = version.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(major), Some('.'), Some(minor))
            if major.is_ascii_digit() && minor.is_ascii_digit() =>
        {
            Ok(version)
        }
        _ => Err(Error::UnsupportedVersion(version)),
    }
}

/// Check whether a byte slice starts with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    pdf_version_from_bytes(data).is_ok()
}
