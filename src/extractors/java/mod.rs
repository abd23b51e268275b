/// Java extractor: methods, type declarations, fields, imports and packages
///
/// This module is organized into focused sub-modules:
/// - helpers: Shared utility functions (modifiers, visibility, type lists)
/// - classes: Class, interface, enum, record extraction
/// - methods: Method and constructor extraction
/// - fields: Field extraction
/// - imports_packages: Import and package declaration extraction
mod classes;
mod fields;
mod helpers;
mod imports_packages;
mod methods;

use crate::extractors::base::{
    BaseExtractor, ContainerTypeSet, DecisionKeywordSet, DocstringStyle, ElementKind,
    ExtractorConfig, HandlerRegistry,
};
use crate::extractors::plugin::LanguageExtractor;
use crate::syntax::SyntaxNode;

pub(crate) const TYPE_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
];

const CONTAINER_TYPES: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "enum_body_declarations",
];

const DECISION_TYPES: &[&str] = &[
    "if_statement",
    "for_statement",
    "enhanced_for_statement",
    "while_statement",
    "do_statement",
    "catch_clause",
    "switch_label",
    "ternary_expression",
    "&&",
    "||",
];

/// Java extractor for methods, types, fields, imports and packages
pub struct JavaExtractor {
    base: BaseExtractor,
}

impl JavaExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let base = BaseExtractor::new("java", config)
            .with_container_types(ContainerTypeSet::default_containers().extended(CONTAINER_TYPES))
            .with_decision_types(DecisionKeywordSet::from_types(DECISION_TYPES))
            .with_docstring_style(DocstringStyle::PrecedingComment {
                comment_kinds: &["block_comment", "line_comment"],
                markers: &["/**"],
                passthrough_kinds: &[],
                wrapper_kinds: &[],
            });
        Self { base }
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl LanguageExtractor for JavaExtractor {
    fn base(&self) -> &BaseExtractor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExtractor {
        &mut self.base
    }

    fn function_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        HandlerRegistry::new()
            .with("method_declaration", methods::extract_method)
            .with("constructor_declaration", methods::extract_method)
    }

    fn class_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        let mut handlers = HandlerRegistry::new();
        for &node_type in TYPE_DECLARATIONS {
            handlers.register(node_type, classes::extract_type_declaration);
        }
        handlers
    }

    fn handlers_for<N: SyntaxNode>(&self, kind: ElementKind) -> HandlerRegistry<N> {
        match kind {
            ElementKind::Function => self.function_handlers(),
            ElementKind::Class => self.class_handlers(),
            ElementKind::Variable => {
                HandlerRegistry::new().with("field_declaration", fields::extract_field)
            }
            ElementKind::Import => {
                HandlerRegistry::new().with("import_declaration", imports_packages::extract_import)
            }
            ElementKind::Package => HandlerRegistry::new()
                .with("package_declaration", imports_packages::extract_package),
            _ => HandlerRegistry::new(),
        }
    }
}
