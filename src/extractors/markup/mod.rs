//! Markup extraction engine
//!
//! The lighter sibling of [`BaseExtractor`](crate::extractors::base::BaseExtractor)
//! for markup languages: a lazy pre-order node sequence plus a processed set
//! keyed by byte range. No handler registry, no element cache, no complexity.
//! Shares only the source buffer and common metadata with the programming
//! engine.

use std::collections::HashSet;
use tracing::debug;

use crate::extractors::base::metadata::common_metadata;
use crate::extractors::base::{
    Element, ElementKind, ElementOptions, ExtractorConfig, SourceBuffer, SourceEncoding,
};
use crate::syntax::SyntaxNode;

/// Lazy pre-order walk. Restart by calling `traverse_nodes` again.
pub struct PreorderNodes<N> {
    stack: Vec<N>,
}

impl<N: SyntaxNode> Iterator for PreorderNodes<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().into_iter().rev());
        Some(node)
    }
}

pub struct MarkupExtractor {
    pub language: String,
    pub(crate) config: ExtractorConfig,
    pub(crate) source: SourceBuffer,
    processed_ranges: HashSet<(usize, usize)>,
}

impl MarkupExtractor {
    pub fn new(language: impl Into<String>, config: ExtractorConfig) -> Self {
        Self {
            language: language.into(),
            config,
            source: SourceBuffer::new(),
            processed_ranges: HashSet::new(),
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    /// Load a new file; clears the text cache and the processed set
    pub fn initialize_source(&mut self, text: &str, encoding: SourceEncoding) {
        self.source.initialize(text, encoding);
        self.processed_ranges.clear();
        debug!("{} markup source initialized", self.language);
    }

    pub fn get_node_text<N: SyntaxNode>(&mut self, node: &N) -> String {
        self.source.node_text(node)
    }

    /// Every node under `root` (inclusive), in document order
    pub fn traverse_nodes<N: SyntaxNode>(&self, root: Option<N>) -> PreorderNodes<N> {
        PreorderNodes {
            stack: root.into_iter().collect(),
        }
    }

    /// Nodes sharing a byte range count as the same entity
    pub fn is_processed<N: SyntaxNode>(&self, node: &N) -> bool {
        self.processed_ranges.contains(&node.byte_range())
    }

    /// Returns `false` when the range was already marked
    pub fn mark_processed<N: SyntaxNode>(&mut self, node: &N) -> bool {
        self.processed_ranges.insert(node.byte_range())
    }

    /// Walk `root` and run `extract` on each unprocessed node of the given kinds
    pub(crate) fn collect<N, F>(
        &mut self,
        root: Option<N>,
        kinds: &[&str],
        mut extract: F,
    ) -> Vec<Element>
    where
        N: SyntaxNode,
        F: FnMut(&mut Self, N) -> Option<Element>,
    {
        let mut elements = Vec::new();
        for node in self.traverse_nodes(root) {
            if !kinds.contains(&node.kind()) || !self.mark_processed(&node) {
                continue;
            }
            if let Some(element) = extract(self, node) {
                elements.push(element);
            }
        }
        elements
    }

    /// Create an element with line range and raw text; no complexity for markup
    pub fn create_element<N: SyntaxNode>(
        &mut self,
        node: &N,
        name: String,
        kind: ElementKind,
        options: ElementOptions,
    ) -> Element {
        let common = common_metadata(&mut self.source, node, options.docstring, None);

        Element {
            name,
            kind,
            start_line: common.start_line,
            end_line: common.end_line,
            raw_text: common.raw_text,
            docstring: common.docstring,
            complexity_score: None,
            language: self.language.clone(),
            metadata: options.metadata,
            children: options.children,
        }
    }
}

/// Language plugin contract for the markup engine
///
/// Markup documents have no functions; their structural containers
/// (headings, elements) stand in for classes.
pub trait MarkupLanguage {
    fn markup(&self) -> &MarkupExtractor;
    fn markup_mut(&mut self) -> &mut MarkupExtractor;

    /// Collect elements of `kind` from an already initialized source
    fn collect_kind<N: SyntaxNode>(&mut self, root: Option<N>, kind: ElementKind) -> Vec<Element>;

    /// Structural kind reported by `extract_classes`
    fn class_kind(&self) -> ElementKind;

    fn extract_elements<N: SyntaxNode>(
        &mut self,
        root: Option<N>,
        source: &str,
        kind: ElementKind,
    ) -> Vec<Element> {
        let markup = self.markup_mut();
        let encoding = markup.config().encoding;
        markup.initialize_source(source, encoding);

        let kind = if kind == ElementKind::Class {
            self.class_kind()
        } else {
            kind
        };
        let elements = self.collect_kind(root, kind);
        debug!(
            "{} extraction found {} {} elements",
            self.markup().language,
            elements.len(),
            kind
        );
        elements
    }

    fn extract_functions<N: SyntaxNode>(
        &mut self,
        _root: Option<N>,
        _source: &str,
    ) -> Vec<Element> {
        Vec::new()
    }

    fn extract_classes<N: SyntaxNode>(&mut self, root: Option<N>, source: &str) -> Vec<Element> {
        self.extract_elements(root, source, ElementKind::Class)
    }
}
