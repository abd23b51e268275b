// Element creation methods for BaseExtractor
//
// Handlers supply identity and signature fields; everything common comes from
// here.

use super::extractor::BaseExtractor;
use super::metadata::common_metadata;
use super::types::{CommonMetadata, Element, ElementKind, ElementOptions};
use crate::syntax::SyntaxNode;

impl BaseExtractor {
    /// Line range, raw text, docstring and complexity for `node`
    pub fn extract_common_metadata<N: SyntaxNode>(&mut self, node: &N) -> CommonMetadata {
        let docstring = if self.config.include_docstrings {
            self.find_docstring(node)
        } else {
            None
        };
        let complexity = if self.config.include_complexity {
            Some(self.calculate_complexity(node))
        } else {
            None
        };

        common_metadata(&mut self.source, node, docstring, complexity)
    }

    /// Create an element - common metadata plus handler-supplied fields
    pub fn create_element<N: SyntaxNode>(
        &mut self,
        node: &N,
        name: String,
        kind: ElementKind,
        options: ElementOptions,
    ) -> Element {
        let common = self.extract_common_metadata(node);

        Element {
            name,
            kind,
            start_line: common.start_line,
            end_line: common.end_line,
            raw_text: common.raw_text,
            docstring: options.docstring.or(common.docstring),
            complexity_score: common.complexity,
            language: self.language.clone(),
            metadata: options.metadata,
            children: options.children,
        }
    }

    /// Create an element without docstring or complexity lookups (fields,
    /// constants and other leaf members)
    pub fn create_leaf_element<N: SyntaxNode>(
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
