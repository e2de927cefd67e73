//! PDF page operations — chapter splitting and text extraction.

pub mod extract;
pub mod split;

#[cfg(test)]
mod testutil;

use std::path::{Path, PathBuf};

use summary_core::error::{Result, SummaryError};

/// Pick the source PDF from the input folder.
///
/// Takes the lexicographically first file with a `.pdf` extension (compared
/// case-insensitively), so repeated runs against the same folder always pick
/// the same file.
pub fn find_input_pdf(input_dir: &Path) -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();
    candidates.into_iter().next().ok_or_else(|| {
        SummaryError::Pdf(format!("No PDF files found in {}", input_dir.display()))
    })
}
