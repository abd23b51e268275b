/// Method and constructor extraction
use serde_json::json;

use super::helpers::{enclosing_type_name, extract_modifiers};
use crate::extractors::base::{BaseExtractor, ElementKind, ElementOptions, HandlerResult};
use crate::syntax::SyntaxNode;

/// Extract a method or constructor declaration
pub(crate) fn extract_method<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;
    let is_constructor = node.kind() == "constructor_declaration";

    let modifiers = extract_modifiers(base, &node);
    let parameters = match node.field_child("parameters") {
        Some(params) => base.child_texts(&params, &["formal_parameter", "spread_parameter"]),
        None => Vec::new(),
    };
    let throws = match node.first_child_of_kind("throws") {
        Some(clause) => base.child_texts(&clause, &[]),
        None => Vec::new(),
    };

    let mut options = modifiers
        .apply(ElementOptions::default())
        .with_metadata("parameters", json!(parameters))
        .with_metadata("throws", json!(throws))
        .with_metadata("isConstructor", json!(is_constructor))
        .with_metadata("isAbstract", json!(modifiers.has("abstract")));

    if let Some(return_type) = base.field_text(&node, "type") {
        options = options.with_metadata("returnType", json!(return_type));
    }
    if let Some(class_name) = enclosing_type_name(base, &node) {
        options = options
            .with_metadata("isMethod", json!(true))
            .with_metadata("className", json!(class_name));
    }

    Ok(base
        .create_element(&node, name, ElementKind::Function, options)
        .into())
}
