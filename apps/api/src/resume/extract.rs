//! Resume text extraction — PDF by default, behind a swappable trait.

use crate::errors::AppError;

/// Extracts plain text from an uploaded resume document.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>` so handlers never name a
/// concrete backend and tests can feed plain text instead of building PDFs.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, data: &[u8]) -> Result<String, AppError>;
}

/// Default backend: PDF text extraction via `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, AppError> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("could not read PDF: {e}")))
    }
}

/// Normalizes extracted text for matching: lowercase, everything outside
/// `[a-z0-9+.# ]` becomes a space, whitespace runs collapse to one space.
/// Keeps `+ . #` so tokens like "c++", "node.js", and "c#" survive.
pub fn normalize_text(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '+' | '.' | '#' => c,
            _ => ' ',
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_text("Java AND SQL"), "java and sql");
    }

    #[test]
    fn test_normalize_keeps_plus_dot_hash() {
        assert_eq!(normalize_text("C++, C#, Node.js!"), "c++ c# node.js");
    }

    #[test]
    fn test_normalize_collapses_whitespace_and_newlines() {
        assert_eq!(
            normalize_text("skills:\n\tpython,   sql"),
            "skills python sql"
        );
    }

    #[test]
    fn test_normalize_strips_other_punctuation() {
        assert_eq!(normalize_text("(java) [sql] {dbms}"), "java sql dbms");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_text("  \n "), "");
    }
}
