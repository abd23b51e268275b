/// Field extraction: one element per declarator
/// `private String name, title;` yields `name` and `title`
use serde_json::json;

use super::helpers::{enclosing_type_name, extract_modifiers};
use crate::extractors::base::{
    BaseExtractor, Element, ElementKind, ElementOptions, HandlerResult,
};
use crate::syntax::SyntaxNode;

pub(crate) fn extract_field<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let modifiers = extract_modifiers(base, &node);
    let field_type = base.field_text(&node, "type").unwrap_or_default();
    let class_name = enclosing_type_name(base, &node);
    let is_constant = modifiers.has("static") && modifiers.has("final");

    let mut fields: Vec<Element> = Vec::new();
    for declarator in node.children_of_kind("variable_declarator") {
        let Some(name) = base.field_text(&declarator, "name") else {
            continue;
        };
        let mut options = modifiers
            .apply(ElementOptions::default())
            .with_metadata("type", json!(field_type))
            .with_metadata("isConstant", json!(is_constant));
        if let Some(class_name) = &class_name {
            options = options.with_metadata("className", json!(class_name));
        }
        fields.push(base.create_leaf_element(&node, name, ElementKind::Variable, options));
    }

    Ok(fields.into())
}
