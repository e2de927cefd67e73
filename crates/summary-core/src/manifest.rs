//! Chapter manifest parsing.
//!
//! The manifest is a plain text file with one chapter per line:
//! `name start_page end_page`, whitespace-separated, pages 1-indexed and
//! inclusive. Malformed lines are skipped with a warning; the line's
//! position still counts toward the numbering of later chapters.

use std::path::Path;

use crate::error::{Result, SummaryError};

/// One valid manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    /// 1-based line position in the manifest, counting skipped lines.
    pub index: usize,
    pub name: String,
    pub start_page: u32,
    pub end_page: u32,
}

impl ChapterEntry {
    /// Output file name for this chapter, e.g. `01_intro.pdf`.
    pub fn file_name(&self) -> String {
        format!("{:02}_{}.pdf", self.index, self.name)
    }

    /// Number of pages in the inclusive range.
    pub fn page_count(&self) -> u32 {
        self.end_page - self.start_page + 1
    }
}

/// Parse manifest text into chapter entries, skipping malformed lines.
pub fn parse_manifest(contents: &str) -> Vec<ChapterEntry> {
    let mut entries = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let index = line_no + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            log::warn!("Skipping invalid line: {}", line);
            continue;
        }

        let name = tokens[0];
        let (start_page, end_page) = match (tokens[1].parse::<u32>(), tokens[2].parse::<u32>()) {
            (Ok(start), Ok(end)) => (start, end),
            _ => {
                log::warn!("Invalid page numbers in line: {}", line);
                continue;
            }
        };

        if start_page < 1 || end_page < start_page {
            log::warn!("Invalid page range in line: {}", line);
            continue;
        }

        entries.push(ChapterEntry {
            index,
            name: name.to_string(),
            start_page,
            end_page,
        });
    }

    entries
}

/// Read and parse the manifest file. A missing file is a fatal error.
pub fn load_manifest(path: &Path) -> Result<Vec<ChapterEntry>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        SummaryError::Manifest(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(parse_manifest(&contents))
}
