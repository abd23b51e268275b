//! JavaScript extractor
//!
//! Functions in every syntactic form (declarations, generators, expressions,
//! arrow functions bound to a name, class methods), classes and ES module
//! imports. Documentation comes from JSDoc blocks directly above a definition,
//! looking through `export` and variable declarations.
//!
//! The TypeScript extractor reuses these handlers and settings.

pub(crate) mod functions;
pub(crate) mod imports;
pub(crate) mod types;

use crate::extractors::base::{
    BaseExtractor, ContainerTypeSet, DecisionKeywordSet, DocstringStyle, ElementKind,
    ExtractorConfig, HandlerRegistry,
};
use crate::extractors::plugin::LanguageExtractor;
use crate::syntax::SyntaxNode;

pub(crate) const CONTAINER_TYPES: &[&str] = &[
    "lexical_declaration",
    "variable_declaration",
    "variable_declarator",
    "class_declaration",
    "class",
    "field_definition",
    "assignment_expression",
    "if_statement",
    "else_clause",
    "try_statement",
    "finally_clause",
];

pub(crate) const EXTRA_DECISION_TYPES: &[&str] = &["??"];

pub(crate) const JSDOC: DocstringStyle = DocstringStyle::PrecedingComment {
    comment_kinds: &["comment"],
    markers: &["/**"],
    passthrough_kinds: &["decorator"],
    wrapper_kinds: &[
        "export_statement",
        "lexical_declaration",
        "variable_declaration",
        "variable_declarator",
    ],
};

pub struct JavaScriptExtractor {
    base: BaseExtractor,
}

impl JavaScriptExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let base = BaseExtractor::new("javascript", config)
            .with_container_types(ContainerTypeSet::default_containers().extended(CONTAINER_TYPES))
            .with_decision_types(
                DecisionKeywordSet::default_decisions().extended(EXTRA_DECISION_TYPES),
            )
            .with_docstring_style(JSDOC);
        Self { base }
    }
}

impl Default for JavaScriptExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

/// Function handlers shared with TypeScript
pub(crate) fn function_registry<N: SyntaxNode>() -> HandlerRegistry<N> {
    HandlerRegistry::new()
        .with("function_declaration", functions::extract_function)
        .with("generator_function_declaration", functions::extract_function)
        .with("function_expression", functions::extract_function)
        .with("arrow_function", functions::extract_function)
        .with("method_definition", functions::extract_method)
}

pub(crate) fn class_registry<N: SyntaxNode>() -> HandlerRegistry<N> {
    HandlerRegistry::new()
        .with("class_declaration", types::extract_class)
        .with("class", types::extract_class)
}

impl LanguageExtractor for JavaScriptExtractor {
    fn base(&self) -> &BaseExtractor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExtractor {
        &mut self.base
    }

    fn function_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        function_registry()
    }

    fn class_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        class_registry()
    }

    fn handlers_for<N: SyntaxNode>(&self, kind: ElementKind) -> HandlerRegistry<N> {
        match kind {
            ElementKind::Function => self.function_handlers(),
            ElementKind::Class => self.class_handlers(),
            ElementKind::Import => {
                HandlerRegistry::new().with("import_statement", imports::extract_import)
            }
            _ => HandlerRegistry::new(),
        }
    }
}
