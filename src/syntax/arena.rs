//! Index-based syntax tree
//!
//! `SyntaxArena` owns every node in a flat `Vec`; handles are `(arena, index)`
//! pairs, so node identity is the index and never depends on value equality.
//! Points are derived from byte offsets against the arena's source text.

use std::fmt;

use super::{Point, SyntaxNode};

pub type NodeIndex = usize;

#[derive(Debug, Clone)]
struct ArenaEntry {
    kind: String,
    field: Option<String>,
    named: bool,
    start_byte: usize,
    end_byte: usize,
    start: Point,
    end: Point,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

#[derive(Debug, Clone, Default)]
pub struct SyntaxArena {
    line_starts: Vec<usize>,
    entries: Vec<ArenaEntry>,
}

impl SyntaxArena {
    /// Create an empty arena whose node positions are computed against `source`
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(offset, _)| offset + 1),
        );

        Self {
            line_starts,
            entries: Vec::new(),
        }
    }

    /// Add a named node. The first node added without a parent is the root.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an index previously returned by this arena.
    pub fn add(
        &mut self,
        parent: Option<NodeIndex>,
        kind: &str,
        start_byte: usize,
        end_byte: usize,
    ) -> NodeIndex {
        self.push_entry(parent, kind, None, true, start_byte, end_byte)
    }

    /// Add a named node reachable from its parent through `field`
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an index previously returned by this arena.
    pub fn add_field(
        &mut self,
        parent: NodeIndex,
        field: &str,
        kind: &str,
        start_byte: usize,
        end_byte: usize,
    ) -> NodeIndex {
        self.push_entry(Some(parent), kind, Some(field), true, start_byte, end_byte)
    }

    /// Add an anonymous token node (punctuation, keywords)
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an index previously returned by this arena.
    pub fn add_token(
        &mut self,
        parent: NodeIndex,
        kind: &str,
        start_byte: usize,
        end_byte: usize,
    ) -> NodeIndex {
        self.push_entry(Some(parent), kind, None, false, start_byte, end_byte)
    }

    /// Handle for `index`; reading through a handle with an unknown index panics
    pub fn node(&self, index: NodeIndex) -> ArenaNode<'_> {
        ArenaNode { arena: self, index }
    }

    pub fn root(&self) -> Option<ArenaNode<'_>> {
        self.entries
            .iter()
            .position(|entry| entry.parent.is_none())
            .map(|index| self.node(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_entry(
        &mut self,
        parent: Option<NodeIndex>,
        kind: &str,
        field: Option<&str>,
        named: bool,
        start_byte: usize,
        end_byte: usize,
    ) -> NodeIndex {
        let index = self.entries.len();
        let entry = ArenaEntry {
            kind: kind.to_string(),
            field: field.map(str::to_string),
            named,
            start_byte,
            end_byte,
            start: self.point_at(start_byte),
            end: self.point_at(end_byte),
            parent,
            children: Vec::new(),
        };
        if let Some(parent) = parent {
            assert!(
                parent < index,
                "parent index {} is not in an arena of {} nodes",
                parent,
                index
            );
            self.entries[parent].children.push(index);
        }
        self.entries.push(entry);
        index
    }

    fn point_at(&self, byte: usize) -> Point {
        let row = self
            .line_starts
            .partition_point(|&line_start| line_start <= byte)
            .saturating_sub(1);
        Point::new(row, byte - self.line_starts[row])
    }
}

/// Copyable handle into a [`SyntaxArena`]
#[derive(Clone, Copy)]
pub struct ArenaNode<'a> {
    arena: &'a SyntaxArena,
    index: NodeIndex,
}

impl<'a> ArenaNode<'a> {
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    fn entry(&self) -> &'a ArenaEntry {
        &self.arena.entries[self.index]
    }
}

impl fmt::Debug for ArenaNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.entry();
        write!(
            f,
            "{}#{} [{}..{}]",
            entry.kind, self.index, entry.start_byte, entry.end_byte
        )
    }
}

impl SyntaxNode for ArenaNode<'_> {
    fn kind(&self) -> &str {
        &self.entry().kind
    }

    fn node_id(&self) -> usize {
        self.index
    }

    fn start_byte(&self) -> usize {
        self.entry().start_byte
    }

    fn end_byte(&self) -> usize {
        self.entry().end_byte
    }

    fn start_point(&self) -> Point {
        self.entry().start
    }

    fn end_point(&self) -> Point {
        self.entry().end
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.entry()
            .children
            .iter()
            .map(|&index| self.arena.node(index))
            .collect()
    }

    fn field_child(&self, field_name: &str) -> Option<Self> {
        self.entry()
            .children
            .iter()
            .find(|&&index| self.arena.entries[index].field.as_deref() == Some(field_name))
            .map(|&index| self.arena.node(index))
    }

    fn prev_sibling_node(&self) -> Option<Self> {
        let parent = self.entry().parent?;
        let siblings = &self.arena.entries[parent].children;
        let position = siblings.iter().position(|&index| index == self.index)?;
        position
            .checked_sub(1)
            .map(|previous| self.arena.node(siblings[previous]))
    }

    fn parent_node(&self) -> Option<Self> {
        self.entry().parent.map(|index| self.arena.node(index))
    }

    fn is_named_node(&self) -> bool {
        self.entry().named
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_derived_from_source() {
        let source = "fn a() {}\nfn b() {}\n";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "source_file", 0, source.len());
        let second = arena.add(Some(root), "function_item", 10, 19);

        let node = arena.node(second);
        assert_eq!(node.start_point(), Point::new(1, 0));
        assert_eq!(node.end_point(), Point::new(1, 9));
        assert_eq!(arena.node(root).end_point(), Point::new(2, 0));
    }

    #[test]
    fn test_navigation() {
        let source = "class A: pass";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "module", 0, source.len());
        let class = arena.add(Some(root), "class_definition", 0, source.len());
        let keyword = arena.add_token(class, "class", 0, 5);
        let name = arena.add_field(class, "name", "identifier", 6, 7);

        let class_node = arena.node(class);
        assert_eq!(class_node.field_child("name").map(|n| n.index()), Some(name));
        assert_eq!(class_node.child_nodes().len(), 2);
        assert_eq!(class_node.named_child_nodes().len(), 1);

        let name_node = arena.node(name);
        assert_eq!(name_node.prev_sibling_node().map(|n| n.index()), Some(keyword));
        assert!(name_node.prev_named_sibling_node().is_none());
        assert_eq!(name_node.parent_node().map(|n| n.index()), Some(class));
        assert_eq!(arena.root().map(|n| n.index()), Some(root));
    }

    #[test]
    #[should_panic(expected = "parent index 7 is not in an arena of 1 nodes")]
    fn test_unknown_parent_index_panics() {
        let mut arena = SyntaxArena::new("x");
        arena.add(None, "program", 0, 1);
        arena.add_field(7, "name", "identifier", 0, 1);
    }
}
