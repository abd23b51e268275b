// Common metadata extraction
//
// The fields every element carries regardless of language. Shared by the
// programming engine (which adds docstring and complexity) and the markup
// engine (which passes neither).

use super::source::SourceBuffer;
use super::types::CommonMetadata;
use crate::syntax::SyntaxNode;

/// Derive line range and raw text for `node`.
///
/// Rows are 0-based, lines 1-based inclusive. A node that ends at column 0 of
/// a later row (trailing newline) ends on the previous line.
pub fn common_metadata<N: SyntaxNode>(
    source: &mut SourceBuffer,
    node: &N,
    docstring: Option<String>,
    complexity: Option<u32>,
) -> CommonMetadata {
    let (start_line, end_line) = line_range(node);

    CommonMetadata {
        start_line,
        end_line,
        raw_text: source.node_text(node),
        docstring,
        complexity,
    }
}

pub fn line_range<N: SyntaxNode>(node: &N) -> (u32, u32) {
    let start = node.start_point();
    let end = node.end_point();
    (start.row as u32 + 1, end.row as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::types::SourceEncoding;
    use crate::syntax::SyntaxArena;

    #[test]
    fn test_lines_are_one_based_inclusive() {
        let source = "# Title\n\nbody\n";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "document", 0, source.len());
        // Heading node includes its trailing newline, so it ends on row 1
        let heading = arena.add(Some(root), "atx_heading", 0, 8);
        let body = arena.add(Some(root), "paragraph", 9, 13);

        let mut buffer = SourceBuffer::new();
        buffer.initialize(source, SourceEncoding::Utf8);

        let metadata = common_metadata(&mut buffer, &arena.node(heading), None, None);
        assert_eq!((metadata.start_line, metadata.end_line), (1, 2));
        assert_eq!(metadata.raw_text, "# Title\n");

        assert_eq!(line_range(&arena.node(body)), (3, 3));
        assert_eq!(line_range(&arena.node(root)), (1, 4));
    }

    #[test]
    fn test_end_line_follows_end_row_at_column_zero() {
        let source = "def f():\n    pass\n";
        let mut arena = SyntaxArena::new(source);
        let function = arena.add(None, "function_definition", 0, source.len());

        let node = arena.node(function);
        assert_eq!(node.end_point().column, 0);
        assert_eq!(line_range(&node), (1, 3));
    }
}
