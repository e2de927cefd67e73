//! Plain-text extraction from chapter PDFs.

use std::path::Path;

use lopdf::Document;

use summary_core::error::{Result, SummaryError};

/// Extract the text of every page, concatenated in page order with no
/// separator inserted between pages.
///
/// An empty or whitespace-only result is an error: it means the PDF is
/// scanned or image-only and there is nothing to summarize.
pub fn extract(pdf_path: &Path) -> Result<String> {
    let doc = Document::load(pdf_path).map_err(|e| {
        SummaryError::Pdf(format!("Failed to load {}: {}", pdf_path.display(), e))
    })?;

    let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    page_numbers.sort();

    let mut text = String::new();
    for page_num in page_numbers {
        text.push_str(&doc.extract_text(&[page_num]).unwrap_or_default());
    }

    if text.trim().is_empty() {
        return Err(SummaryError::EmptyText(pdf_path.display().to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{make_pdf, numbered_pages};

    #[test]
    fn test_extract_concatenates_pages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.pdf");
        let texts = numbered_pages(3);
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        make_pdf(&path, &refs);

        let text = extract(&path).unwrap();
        let p1 = text.find("Page 1").unwrap();
        let p2 = text.find("Page 2").unwrap();
        let p3 = text.find("Page 3").unwrap();
        assert!(p1 < p2 && p2 < p3);
    }

    #[test]
    fn test_extract_empty_pdf_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scanned.pdf");
        make_pdf(&path, &["", ""]);

        let err = extract(&path).unwrap_err();
        assert!(matches!(err, SummaryError::EmptyText(_)));
    }

    #[test]
    fn test_extract_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(&dir.path().join("nope.pdf")).unwrap_err();
        assert!(matches!(err, SummaryError::Pdf(_)));
    }
}
