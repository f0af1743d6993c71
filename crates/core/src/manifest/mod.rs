//! Dataset shortname list parsing.
//!
//! The input file is UTF-8 text with one shortname per line. Blank lines
//! and lines starting with `#` are ignored. Order is preserved; duplicates
//! are tolerated.

use std::io;
use std::path::Path;

/// Parse shortnames out of the raw file contents.
pub fn parse_shortnames(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and parse the shortname list at `path`.
///
/// Missing or unreadable files surface as the `io::Error`; the caller
/// decides whether that is fatal.
pub fn read_shortnames(path: &Path) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_shortnames(&contents))
}
