//! Language plugin contract for the programming engine
//!
//! A plugin wraps one [`BaseExtractor`] configured with its container,
//! decision and docstring settings, and hands the engine one handler table per
//! element kind. Entry points are provided: each one reinitializes the source
//! and runs a single traversal.

use tracing::debug;

use crate::extractors::base::{BaseExtractor, Element, ElementKind, HandlerRegistry};
use crate::syntax::SyntaxNode;

pub trait LanguageExtractor {
    fn base(&self) -> &BaseExtractor;
    fn base_mut(&mut self) -> &mut BaseExtractor;

    /// Node type → handler table for functions and methods
    fn function_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N>;

    /// Node type → handler table for classes and class-like types
    fn class_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N>;

    /// Handler table for any element kind; plugins override to add variables,
    /// imports or packages
    fn handlers_for<N: SyntaxNode>(&self, kind: ElementKind) -> HandlerRegistry<N> {
        match kind {
            ElementKind::Function => self.function_handlers(),
            ElementKind::Class => self.class_handlers(),
            _ => HandlerRegistry::new(),
        }
    }

    fn extract_elements<N: SyntaxNode>(
        &mut self,
        root: Option<N>,
        source: &str,
        kind: ElementKind,
    ) -> Vec<Element> {
        let handlers = self.handlers_for::<N>(kind);
        let base = self.base_mut();
        let encoding = base.config().encoding;
        base.initialize_source(source, encoding);
        let elements = base.traverse_and_extract(root, &handlers, kind);

        debug!(
            "{} extraction found {} {} elements",
            base.language,
            elements.len(),
            kind
        );
        elements
    }

    fn extract_functions<N: SyntaxNode>(&mut self, root: Option<N>, source: &str) -> Vec<Element> {
        self.extract_elements(root, source, ElementKind::Function)
    }

    fn extract_classes<N: SyntaxNode>(&mut self, root: Option<N>, source: &str) -> Vec<Element> {
        self.extract_elements(root, source, ElementKind::Class)
    }
}
