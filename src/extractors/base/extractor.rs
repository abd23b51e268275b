// BaseExtractor - programming-language extraction engine
//
// Owns the per-file source buffer and the two traversal caches (processed
// nodes, extracted elements) and drives handler dispatch over a syntax tree.

use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use super::error::ExtractError;
use super::registry::{ContainerTypeSet, DecisionKeywordSet, Handler, HandlerRegistry};
use super::source::SourceBuffer;
use super::tree_methods::DocstringStyle;
use super::types::{Element, ElementKind, ExtractorConfig, SourceEncoding};
use crate::syntax::SyntaxNode;

/// Base implementation for programming-language extractors
///
/// One instance per concurrently analyzed file: every extraction call takes
/// `&mut self`, and `initialize_source` is the only reset.
pub struct BaseExtractor {
    pub language: String,
    pub(crate) config: ExtractorConfig,
    pub(crate) source: SourceBuffer,
    pub(crate) container_types: ContainerTypeSet,
    pub(crate) decision_types: DecisionKeywordSet,
    pub(crate) docstring_style: DocstringStyle,
    /// Node ids dispatched during the current traversal
    processed_nodes: HashSet<usize>,
    /// Handler results per (node id, element kind), kept until the next file
    element_cache: HashMap<(usize, ElementKind), Vec<Element>>,
}

impl BaseExtractor {
    pub fn new(language: impl Into<String>, config: ExtractorConfig) -> Self {
        Self {
            language: language.into(),
            config,
            source: SourceBuffer::new(),
            container_types: ContainerTypeSet::default_containers(),
            decision_types: DecisionKeywordSet::default_decisions(),
            docstring_style: DocstringStyle::None,
            processed_nodes: HashSet::new(),
            element_cache: HashMap::new(),
        }
    }

    pub fn with_container_types(mut self, container_types: ContainerTypeSet) -> Self {
        self.container_types = container_types;
        self
    }

    pub fn with_decision_types(mut self, decision_types: DecisionKeywordSet) -> Self {
        self.decision_types = decision_types;
        self
    }

    pub fn with_docstring_style(mut self, docstring_style: DocstringStyle) -> Self {
        self.docstring_style = docstring_style;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    /// Load a new file: stores text and lines, clears every cache
    pub fn initialize_source(&mut self, text: &str, encoding: SourceEncoding) {
        self.source.initialize(text, encoding);
        self.processed_nodes.clear();
        self.element_cache.clear();
    }

    /// Get text from a node, cached per byte range
    pub fn get_node_text<N: SyntaxNode>(&mut self, node: &N) -> String {
        self.source.node_text(node)
    }

    /// Node text from line/column positions only; shares the slice cache
    pub fn get_node_text_by_position<N: SyntaxNode>(&mut self, node: &N) -> String {
        self.source.node_text_by_position(node)
    }

    pub fn is_processed<N: SyntaxNode>(&self, node: &N) -> bool {
        self.processed_nodes.contains(&node.node_id())
    }

    pub fn cached_element_count(&self) -> usize {
        self.element_cache.len()
    }

    /// Depth-bounded iterative pre-order walk dispatching `handlers`.
    ///
    /// Below the root, a node whose type is neither a handler key nor a
    /// container type is dropped together with its subtree. Results come back
    /// in document order.
    pub fn traverse_and_extract<N: SyntaxNode>(
        &mut self,
        root: Option<N>,
        handlers: &HandlerRegistry<N>,
        element_kind: ElementKind,
    ) -> Vec<Element> {
        let Some(root) = root else {
            debug!("No root node for {} {} extraction", self.language, element_kind);
            return Vec::new();
        };

        self.processed_nodes.clear();
        let max_depth = self.config.max_depth;
        let mut results = Vec::new();
        let mut stack = vec![(root, 0usize)];
        let mut visited = 0usize;

        while let Some((node, depth)) = stack.pop() {
            if depth > max_depth {
                warn!(
                    "Max depth {} exceeded at {} node (line {}), skipping subtree",
                    max_depth,
                    node.kind(),
                    node.start_point().row + 1
                );
                continue;
            }

            let handler = handlers.get(node.kind());
            if depth > 0 && handler.is_none() && !self.container_types.contains(node.kind()) {
                continue;
            }
            visited += 1;

            if let Some(handler) = handler {
                self.dispatch(node, handler, element_kind, &mut results);
            }

            for child in node.child_nodes().into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        debug!(
            "Extracted {} {} elements from {} ({} nodes visited)",
            results.len(),
            element_kind,
            self.language,
            visited
        );
        results
    }

    fn dispatch<N: SyntaxNode>(
        &mut self,
        node: N,
        handler: Handler<N>,
        element_kind: ElementKind,
        results: &mut Vec<Element>,
    ) {
        let node_id = node.node_id();
        if self.processed_nodes.contains(&node_id) {
            return;
        }

        let cache_key = (node_id, element_kind);
        if let Some(cached) = self.element_cache.get(&cache_key) {
            results.extend(cached.iter().cloned());
            self.processed_nodes.insert(node_id);
            return;
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(self, node)))
            .unwrap_or_else(|payload| Err(ExtractError::from_panic(node.kind(), payload)));

        match outcome {
            Ok(extracted) => {
                let elements = extracted.into_elements();
                results.extend(elements.iter().cloned());
                self.element_cache.insert(cache_key, elements);
            }
            Err(e) => {
                warn!(
                    "Skipping {} node at line {}: {}",
                    node.kind(),
                    node.start_point().row + 1,
                    e
                );
            }
        }

        self.processed_nodes.insert(node_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::registry::{Extracted, HandlerResult};
    use crate::extractors::base::types::ElementOptions;
    use crate::syntax::{ArenaNode, SyntaxArena};
    use std::cell::Cell;

    thread_local! {
        static CALLS: Cell<usize> = const { Cell::new(0) };
    }

    fn calls() -> usize {
        CALLS.with(Cell::get)
    }

    fn reset_calls() {
        CALLS.with(|c| c.set(0));
    }

    fn named_function(extractor: &mut BaseExtractor, node: ArenaNode<'_>) -> HandlerResult {
        CALLS.with(|c| c.set(c.get() + 1));
        let name_node = node.field_child("name").ok_or(ExtractError::MissingField {
            node_type: node.kind().to_string(),
            field: "name",
            line: node.start_point().row as u32 + 1,
        })?;
        let name = extractor.get_node_text(&name_node);
        Ok(extractor
            .create_element(&node, name, ElementKind::Function, ElementOptions::default())
            .into())
    }

    fn always_panics(_: &mut BaseExtractor, _: ArenaNode<'_>) -> HandlerResult {
        panic!("malformed node");
    }

    fn registry<'a>() -> HandlerRegistry<ArenaNode<'a>> {
        HandlerRegistry::new().with("function_definition", named_function)
    }

    fn extractor_with_depth(max_depth: usize) -> BaseExtractor {
        BaseExtractor::new(
            "test",
            ExtractorConfig {
                max_depth,
                ..Default::default()
            },
        )
    }

    /// `function foo() { if (x) {} }` as a synthetic tree
    fn foo_tree(source: &str) -> SyntaxArena {
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "program", 0, source.len());
        let function = arena.add(Some(root), "function_definition", 0, source.len());
        arena.add_token(function, "function", 0, 8);
        arena.add_field(function, "name", "identifier", 9, 12);
        arena.add_field(function, "parameters", "formal_parameters", 12, 14);
        let body = arena.add_field(function, "body", "statement_block", 15, source.len());
        let if_statement = arena.add(Some(body), "if_statement", 17, 26);
        arena.add_field(if_statement, "condition", "parenthesized_expression", 20, 23);
        arena.add_field(if_statement, "consequence", "statement_block", 24, 26);
        arena
    }

    #[test]
    fn test_extracts_synthetic_function_with_complexity() {
        let source = "function foo() { if (x) {} }";
        let arena = foo_tree(source);

        let mut extractor = extractor_with_depth(50);
        extractor.initialize_source(source, SourceEncoding::Utf8);
        let elements =
            extractor.traverse_and_extract(arena.root(), &registry(), ElementKind::Function);

        assert_eq!(elements.len(), 1);
        let foo = &elements[0];
        assert_eq!(foo.name, "foo");
        assert_eq!(foo.kind, ElementKind::Function);
        assert_eq!((foo.start_line, foo.end_line), (1, 1));
        assert_eq!(foo.complexity_score, Some(2));
        assert_eq!(foo.raw_text, source);
        assert_eq!(foo.language, "test");
    }

    #[test]
    fn test_absent_root_returns_empty() {
        let mut extractor = extractor_with_depth(50);
        extractor.initialize_source("", SourceEncoding::Utf8);
        let elements = extractor.traverse_and_extract(None, &registry(), ElementKind::Function);
        assert!(elements.is_empty());
    }

    #[test]
    fn test_depth_limit_prunes_deep_handlers() {
        // Chain of nested functions, one per line
        let depth = 12;
        let source: String = (0..=depth).map(|i| format!("f{:02}\n", i)).collect();
        let mut arena = SyntaxArena::new(&source);
        let mut parent = None;
        for i in 0..=depth {
            let start = i * 4;
            let node = arena.add(parent, "function_definition", start, source.len());
            arena.add_field(node, "name", "identifier", start, start + 3);
            parent = Some(node);
        }

        reset_calls();
        let mut extractor = extractor_with_depth(5);
        extractor.initialize_source(&source, SourceEncoding::Utf8);
        let elements =
            extractor.traverse_and_extract(arena.root(), &registry(), ElementKind::Function);

        // Depths 0..=5 are visited; 6 and below never reach a handler
        assert_eq!(calls(), 6);
        let names: Vec<_> = elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["f00", "f01", "f02", "f03", "f04", "f05"]);
    }

    #[test]
    fn test_handler_runs_once_per_kind_across_revisits() {
        let source = "function foo() { if (x) {} }";
        let arena = foo_tree(source);
        let handlers = registry();

        reset_calls();
        let mut extractor = extractor_with_depth(50);
        extractor.initialize_source(source, SourceEncoding::Utf8);

        let first = extractor.traverse_and_extract(arena.root(), &handlers, ElementKind::Function);
        let second = extractor.traverse_and_extract(arena.root(), &handlers, ElementKind::Function);

        assert_eq!(calls(), 1);
        assert_eq!(first, second);
        assert_eq!(extractor.cached_element_count(), 1);

        // A different element kind is a different cache entry
        extractor.traverse_and_extract(arena.root(), &handlers, ElementKind::Class);
        assert_eq!(calls(), 2);

        // New file: caches start over
        extractor.initialize_source(source, SourceEncoding::Utf8);
        assert_eq!(extractor.cached_element_count(), 0);
        extractor.traverse_and_extract(arena.root(), &handlers, ElementKind::Function);
        assert_eq!(calls(), 3);
    }

    #[test]
    fn test_failing_handlers_do_not_stop_traversal() {
        let source = "a\nb\nc";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "program", 0, source.len());
        let first = arena.add(Some(root), "function_definition", 0, 1);
        arena.add_field(first, "name", "identifier", 0, 1);
        arena.add(Some(root), "broken", 2, 3);
        // No name field: the handler returns MissingField
        arena.add(Some(root), "function_definition", 4, 5);

        let handlers = registry().with("broken", always_panics);
        let mut extractor = extractor_with_depth(50);
        extractor.initialize_source(source, SourceEncoding::Utf8);
        let elements = extractor.traverse_and_extract(arena.root(), &handlers, ElementKind::Function);

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "a");
        assert!(extractor.is_processed(&arena.node(first)));
    }

    #[test]
    fn test_unregistered_and_non_container_types_contribute_nothing() {
        let source = "class A { function b() {} }";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "program", 0, source.len());
        // class_declaration is neither a handler key nor a container here
        let class = arena.add(Some(root), "class_declaration", 0, source.len());
        let method = arena.add(Some(class), "function_definition", 10, 25);
        arena.add_field(method, "name", "identifier", 19, 20);

        let mut extractor = extractor_with_depth(50)
            .with_container_types(ContainerTypeSet::from_types(&["program"]));
        extractor.initialize_source(source, SourceEncoding::Utf8);
        let elements =
            extractor.traverse_and_extract(arena.root(), &registry(), ElementKind::Function);
        assert!(elements.is_empty());
        assert!(!extractor.is_processed(&arena.node(method)));
    }

    #[test]
    fn test_shared_byte_range_nodes_are_distinct() {
        // Wrapper and wrapped node cover exactly the same bytes
        let source = "f";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "program", 0, 1);
        let outer = arena.add(Some(root), "function_definition", 0, 1);
        arena.add_field(outer, "name", "identifier", 0, 1);
        let inner = arena.add(Some(outer), "function_definition", 0, 1);
        arena.add_field(inner, "name", "identifier", 0, 1);

        let mut extractor = extractor_with_depth(50);
        extractor.initialize_source(source, SourceEncoding::Utf8);
        let elements =
            extractor.traverse_and_extract(arena.root(), &registry(), ElementKind::Function);

        assert_eq!(elements.len(), 2);
        assert!(extractor.is_processed(&arena.node(outer)));
        assert!(extractor.is_processed(&arena.node(inner)));
    }

    #[test]
    fn test_absent_results_are_cached() {
        fn skip(_: &mut BaseExtractor, _: ArenaNode<'_>) -> HandlerResult {
            CALLS.with(|c| c.set(c.get() + 1));
            Ok(Extracted::Nothing)
        }

        let source = "x";
        let mut arena = SyntaxArena::new(source);
        arena.add(None, "lambda", 0, 1);

        let handlers: HandlerRegistry<ArenaNode<'_>> = HandlerRegistry::new().with("lambda", skip);
        let mut extractor = extractor_with_depth(50);
        extractor.initialize_source(source, SourceEncoding::Utf8);
        reset_calls();

        for _ in 0..2 {
            assert!(extractor
                .traverse_and_extract(arena.root(), &handlers, ElementKind::Function)
                .is_empty());
        }
        assert_eq!(calls(), 1);
        assert_eq!(extractor.cached_element_count(), 1);
    }

    #[test]
    fn test_position_text_matches_byte_text() {
        let source = "function foo() { if (x) {} }";
        let arena = foo_tree(source);
        let root = arena.root().unwrap();

        let mut extractor = extractor_with_depth(50);
        extractor.initialize_source(source, SourceEncoding::Utf8);
        assert_eq!(extractor.get_node_text_by_position(&root), source);
        assert_eq!(extractor.get_node_text(&root), source);
    }
}
