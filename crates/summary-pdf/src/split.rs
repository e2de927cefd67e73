//! Chapter splitting — carve an inclusive page range into its own PDF.

use std::path::Path;

use lopdf::Document;

use summary_core::error::{Result, SummaryError};
use summary_core::manifest::ChapterEntry;

/// Write pages [start_page, end_page] (1-indexed, inclusive) of the source
/// PDF to `output_path`, preserving page content and order.
///
/// An out-of-range request is an error; the range is never silently clamped
/// to the document length.
pub fn split(
    input_path: &Path,
    start_page: u32,
    end_page: u32,
    output_path: &Path,
) -> Result<()> {
    let mut doc = Document::load(input_path).map_err(|e| {
        SummaryError::Pdf(format!("Failed to load {}: {}", input_path.display(), e))
    })?;

    let total = doc.get_pages().len() as u32;
    if start_page < 1 || end_page < start_page || end_page > total {
        return Err(SummaryError::PageRange {
            start: start_page,
            end: end_page,
            total,
        });
    }

    // lopdf page numbers are 1-based, same as the manifest
    let pages_to_remove: Vec<u32> = (1..start_page).chain(end_page + 1..=total).collect();
    if !pages_to_remove.is_empty() {
        doc.delete_pages(&pages_to_remove);
    }

    doc.prune_objects();
    doc.renumber_objects();
    doc.compress();

    doc.save(output_path).map_err(|e| {
        SummaryError::Pdf(format!("Failed to write {}: {}", output_path.display(), e))
    })?;

    log::info!("Chapter saved: {}", output_path.display());
    Ok(())
}

/// Split one chapter PDF per manifest entry into `output_dir`.
///
/// Any split failure (including an out-of-range entry) aborts the run;
/// malformed lines were already dropped at manifest parse time.
pub fn split_chapters(
    input_path: &Path,
    entries: &[ChapterEntry],
    output_dir: &Path,
) -> Result<()> {
    for entry in entries {
        let output_path = output_dir.join(entry.file_name());
        split(input_path, entry.start_page, entry.end_page, &output_path)?;
    }
    Ok(())
}
