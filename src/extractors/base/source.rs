// Source buffer and text-slice cache
//
// Shared by the programming and markup engines. One buffer per extractor
// instance, reinitialized once per file.

use std::collections::HashMap;
use tracing::debug;

use super::types::SourceEncoding;
use crate::syntax::{Point, SyntaxNode};

/// Text-slice cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceStats {
    pub hits: usize,
    pub misses: usize,
}

/// Source text of the file being extracted, plus the `(start_byte, end_byte)`
/// text cache.
#[derive(Debug, Default)]
pub struct SourceBuffer {
    text: String,
    lines: Vec<String>,
    encoding: SourceEncoding,
    /// Re-encoded bytes for non-UTF-8 sources; UTF-8 slices `text` directly
    encoded: Option<Vec<u8>>,
    text_cache: HashMap<(usize, usize), String>,
    stats: SliceStats,
}

impl SourceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new file's text and drop everything cached for the previous one
    pub fn initialize(&mut self, text: &str, encoding: SourceEncoding) {
        self.text = text.to_string();
        self.lines = text.split('\n').map(str::to_string).collect();
        self.encoding = encoding;
        self.encoded = match encoding {
            SourceEncoding::Utf8 => None,
            other => Some(other.encode(text)),
        };
        self.text_cache.clear();
        self.stats = SliceStats::default();

        debug!(
            "Source initialized: {} bytes, {} lines, encoding {}",
            self.text.len(),
            self.lines.len(),
            encoding
        );
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    pub fn stats(&self) -> SliceStats {
        self.stats
    }

    pub fn cached_slices(&self) -> usize {
        self.text_cache.len()
    }

    /// Text covered by `node`.
    ///
    /// Byte offsets first; when that yields nothing, the row/column fallback.
    /// Never fails: the worst case is an empty string, which is cached too.
    pub fn node_text<N: SyntaxNode>(&mut self, node: &N) -> String {
        self.cached_text(node, true)
    }

    /// Text covered by `node`, using row/column positions only
    pub fn node_text_by_position<N: SyntaxNode>(&mut self, node: &N) -> String {
        self.cached_text(node, false)
    }

    fn cached_text<N: SyntaxNode>(&mut self, node: &N, use_byte_offsets: bool) -> String {
        let key = node.byte_range();
        if let Some(text) = self.text_cache.get(&key) {
            self.stats.hits += 1;
            return text.clone();
        }
        self.stats.misses += 1;

        let byte_text = if use_byte_offsets {
            self.slice_bytes(key.0, key.1)
        } else {
            None
        };

        let text = match byte_text {
            Some(text) if !text.is_empty() => text,
            _ => self.slice_points(node.start_point(), node.end_point()),
        };

        self.text_cache.insert(key, text.clone());
        text
    }

    fn slice_bytes(&self, start: usize, end: usize) -> Option<String> {
        let bytes = match &self.encoded {
            Some(encoded) => encoded.as_slice(),
            None => self.text.as_bytes(),
        };
        let slice = bytes.get(start..end)?;
        self.encoding.decode(slice)
    }

    fn slice_points(&self, start: Point, end: Point) -> String {
        if self.lines.is_empty() || start.row >= self.lines.len() || end.row < start.row {
            return String::new();
        }

        let last_row = self.lines.len() - 1;
        let (end_row, end_column) = if end.row > last_row {
            (last_row, usize::MAX)
        } else {
            (end.row, end.column)
        };

        let first = &self.lines[start.row];
        let start_column = self.utf8_column(first, start.column);
        if start.row == end_row {
            let end_column = self.utf8_column(first, end_column);
            return clamped_slice(first, start_column, end_column).to_string();
        }

        let mut parts = vec![clamped_slice(first, start_column, first.len())];
        for line in &self.lines[start.row + 1..end_row] {
            parts.push(line.as_str());
        }
        let last = &self.lines[end_row];
        parts.push(clamped_slice(last, 0, self.utf8_column(last, end_column)));
        parts.join("\n")
    }

    /// Map a column in the parser's encoding to a UTF-8 byte offset into `line`.
    ///
    /// UTF-16 columns count two bytes per code unit.
    fn utf8_column(&self, line: &str, column: usize) -> usize {
        if self.encoding == SourceEncoding::Utf8 {
            return column;
        }

        let mut units = 0usize;
        for (offset, ch) in line.char_indices() {
            if units >= column {
                return offset;
            }
            units += ch.len_utf16() * 2;
        }
        line.len()
    }
}

/// Slice `line` between two byte columns, clamped to the line and to char boundaries
fn clamped_slice(line: &str, start: usize, end: usize) -> &str {
    let floor = |mut index: usize| {
        index = index.min(line.len());
        while index > 0 && !line.is_char_boundary(index) {
            index -= 1;
        }
        index
    };

    let (start, end) = (floor(start), floor(end));
    if start >= end {
        ""
    } else {
        &line[start..end]
    }
}
