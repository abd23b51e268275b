//! Syntax node abstraction shared by both extraction engines
//!
//! The engines never talk to tree-sitter directly. They walk any handle that
//! implements [`SyntaxNode`]: real `tree_sitter::Node`s from a parsed tree, or
//! [`ArenaNode`]s from a hand-built [`SyntaxArena`] (used for trees produced by
//! other parsers and for deterministic tests).

pub mod arena;

pub use arena::{ArenaNode, NodeIndex, SyntaxArena};

use serde::{Deserialize, Serialize};

/// Zero-based (row, column) position. Columns are byte offsets within the row,
/// the same convention tree-sitter uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<tree_sitter::Point> for Point {
    fn from(point: tree_sitter::Point) -> Self {
        Self {
            row: point.row,
            column: point.column,
        }
    }
}

/// Read-only handle to a node owned by some parse tree.
///
/// Handles are cheap `Copy` values. `node_id` must be stable for the lifetime of
/// the tree and unique per node: the programming engine deduplicates by it,
/// while the markup engine deduplicates by byte range.
pub trait SyntaxNode: Copy {
    fn kind(&self) -> &str;
    fn node_id(&self) -> usize;
    fn start_byte(&self) -> usize;
    fn end_byte(&self) -> usize;
    fn start_point(&self) -> Point;
    fn end_point(&self) -> Point;
    /// Ordered children, anonymous tokens included
    fn child_nodes(&self) -> Vec<Self>;
    fn field_child(&self, field_name: &str) -> Option<Self>;
    fn prev_sibling_node(&self) -> Option<Self>;
    fn parent_node(&self) -> Option<Self>;
    fn is_named_node(&self) -> bool;

    fn byte_range(&self) -> (usize, usize) {
        (self.start_byte(), self.end_byte())
    }

    /// Previous sibling, skipping anonymous tokens such as `{` or `,`
    fn prev_named_sibling_node(&self) -> Option<Self> {
        let mut current = self.prev_sibling_node();
        while let Some(sibling) = current {
            if sibling.is_named_node() {
                return Some(sibling);
            }
            current = sibling.prev_sibling_node();
        }
        None
    }

    fn named_child_nodes(&self) -> Vec<Self> {
        self.child_nodes()
            .into_iter()
            .filter(|child| child.is_named_node())
            .collect()
    }

    fn first_child_of_kind(&self, kind: &str) -> Option<Self> {
        self.child_nodes()
            .into_iter()
            .find(|child| child.kind() == kind)
    }

    fn children_of_kind(&self, kind: &str) -> Vec<Self> {
        self.child_nodes()
            .into_iter()
            .filter(|child| child.kind() == kind)
            .collect()
    }

    /// Nearest ancestor whose kind is one of `kinds`
    fn ancestor_of_kinds(&self, kinds: &[&str]) -> Option<Self> {
        let mut current = self.parent_node();
        while let Some(parent) = current {
            if kinds.contains(&parent.kind()) {
                return Some(parent);
            }
            current = parent.parent_node();
        }
        None
    }
}

impl SyntaxNode for tree_sitter::Node<'_> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn node_id(&self) -> usize {
        self.id()
    }

    fn start_byte(&self) -> usize {
        tree_sitter::Node::start_byte(self)
    }

    fn end_byte(&self) -> usize {
        tree_sitter::Node::end_byte(self)
    }

    fn start_point(&self) -> Point {
        self.start_position().into()
    }

    fn end_point(&self) -> Point {
        self.end_position().into()
    }

    fn child_nodes(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        self.children(&mut cursor).collect()
    }

    fn field_child(&self, field_name: &str) -> Option<Self> {
        self.child_by_field_name(field_name)
    }

    fn prev_sibling_node(&self) -> Option<Self> {
        self.prev_sibling()
    }

    fn parent_node(&self) -> Option<Self> {
        self.parent()
    }

    fn is_named_node(&self) -> bool {
        self.is_named()
    }
}
