// Text source abstraction
//
// This module defines the boundary between document decoding (scanner PDF →
// linearized text) and the extraction engine. Decoders live outside this
// crate; whatever they produce arrives here as ordered chunks of plain text
// with explicit line breaks. Everything after this point is format-agnostic.

use anyhow::Result;
use std::path::PathBuf;

/// Separator decoders conventionally place between page texts when they
/// flatten a multi-page document into a single stream.
pub const PAGE_SEPARATOR: char = '\u{0C}';

/// Supplies ordered text chunks to the extraction engine.
///
/// One chunk per logical unit, typically a page. Chunk order is load-bearing:
/// merged findings follow it.
pub trait TextSource {
    /// Ordered text chunks, one per logical unit.
    fn chunks(&self) -> Result<Vec<String>>;

    /// Source name for logging.
    fn name(&self) -> String;
}

/// Reads already-extracted report text from a UTF-8 file.
///
/// Splits the stream back into per-page chunks on form-feed separators by
/// default; a file without separators is a single chunk either way.
pub struct PlainTextSource {
    path: PathBuf,
    split_pages: bool,
}

impl PlainTextSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            split_pages: true,
        }
    }

    /// Treat the whole file as one chunk even when page separators are
    /// present.
    pub fn single_chunk(mut self) -> Self {
        self.split_pages = false;
        self
    }
}

impl TextSource for PlainTextSource {
    fn chunks(&self) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(&self.path)?;
        if self.split_pages && text.contains(PAGE_SEPARATOR) {
            Ok(text.split(PAGE_SEPARATOR).map(str::to_string).collect())
        } else {
            Ok(vec![text])
        }
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory chunks, for tests and embedding callers.
pub struct StringChunks {
    chunks: Vec<String>,
}

impl StringChunks {
    pub fn new(chunks: Vec<String>) -> Self {
        Self { chunks }
    }
}

impl TextSource for StringChunks {
    fn chunks(&self) -> Result<Vec<String>> {
        Ok(self.chunks.clone())
    }

    fn name(&self) -> String {
        format!("<memory: {} chunks>", self.chunks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_splits_on_form_feed() {
        let path = std::env::temp_dir().join("scanparse_source_split_test.txt");
        std::fs::write(&path, "page one\u{0C}page two\u{0C}page three").unwrap();

        let source = PlainTextSource::new(&path);
        let chunks = source.chunks().unwrap();
        assert_eq!(chunks, vec!["page one", "page two", "page three"]);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn single_chunk_keeps_stream_whole() {
        let path = std::env::temp_dir().join("scanparse_source_whole_test.txt");
        std::fs::write(&path, "page one\u{0C}page two").unwrap();

        let source = PlainTextSource::new(&path).single_chunk();
        let chunks = source.chunks().unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].contains('\u{0C}'));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = PlainTextSource::new("/nonexistent/scanparse_input.txt");
        assert!(source.chunks().is_err());
    }

    #[test]
    fn string_chunks_pass_through_in_order() {
        let source = StringChunks::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(source.chunks().unwrap(), vec!["a", "b"]);
    }
}
