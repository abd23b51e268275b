/// Rust language extractor with support for:
/// - Functions, inherent and trait impl methods, trait method signatures
/// - Structs, enums, traits, unions (fields and variants as children)
/// - `use` declarations
/// - `///` and `/** */` outer doc comments, looking past attributes
mod functions;
mod helpers;
mod types;

use serde_json::json;

use crate::extractors::base::{
    BaseExtractor, ContainerTypeSet, DecisionKeywordSet, DocstringStyle, ElementKind,
    ElementOptions, ExtractorConfig, HandlerRegistry, HandlerResult,
};
use crate::extractors::plugin::LanguageExtractor;
use crate::syntax::SyntaxNode;

const CONTAINER_TYPES: &[&str] = &["impl_item", "trait_item", "mod_item", "function_item"];

const DECISION_TYPES: &[&str] = &[
    "if_expression",
    "match_arm",
    "while_expression",
    "for_expression",
    "loop_expression",
    "&&",
    "||",
];

/// Rust extractor that handles Rust-specific constructs
pub struct RustExtractor {
    base: BaseExtractor,
}

impl RustExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let base = BaseExtractor::new("rust", config)
            .with_container_types(ContainerTypeSet::default_containers().extended(CONTAINER_TYPES))
            .with_decision_types(DecisionKeywordSet::from_types(DECISION_TYPES))
            .with_docstring_style(DocstringStyle::PrecedingComment {
                comment_kinds: &["line_comment", "block_comment"],
                markers: &["///", "/**"],
                passthrough_kinds: &["attribute_item"],
                wrapper_kinds: &[],
            });
        Self { base }
    }
}

impl Default for RustExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl LanguageExtractor for RustExtractor {
    fn base(&self) -> &BaseExtractor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExtractor {
        &mut self.base
    }

    fn function_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        HandlerRegistry::new()
            .with("function_item", functions::extract_function)
            .with("function_signature_item", functions::extract_function)
    }

    fn class_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        HandlerRegistry::new()
            .with("struct_item", types::extract_type)
            .with("enum_item", types::extract_type)
            .with("trait_item", types::extract_type)
            .with("union_item", types::extract_type)
    }

    fn handlers_for<N: SyntaxNode>(&self, kind: ElementKind) -> HandlerRegistry<N> {
        match kind {
            ElementKind::Function => self.function_handlers(),
            ElementKind::Class => self.class_handlers(),
            ElementKind::Import => HandlerRegistry::new().with("use_declaration", extract_use),
            _ => HandlerRegistry::new(),
        }
    }
}

/// `use a::b::{c, d as e};` becomes one element named by its path tree
fn extract_use<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let path = base.required_field_text(&node, "argument")?;
    let visibility = match node.first_child_of_kind("visibility_modifier") {
        Some(modifier) => base.get_node_text(&modifier),
        None => "private".to_string(),
    };

    let mut options = ElementOptions::default().with_metadata("visibility", json!(visibility));
    if let Some(argument) = node.field_child("argument") {
        if argument.kind() == "use_as_clause" {
            if let Some(alias) = base.field_text(&argument, "alias") {
                options = options.with_metadata("alias", json!(alias));
            }
        }
    }

    Ok(base
        .create_leaf_element(&node, path, ElementKind::Import, options)
        .into())
}
