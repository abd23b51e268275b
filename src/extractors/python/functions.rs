/// Function and method extraction
/// Handles regular functions, async functions, and method detection
use serde_json::json;

use super::decorators;
use crate::extractors::base::{
    BaseExtractor, ElementKind, ElementOptions, Extracted, HandlerResult,
};
use crate::syntax::SyntaxNode;

/// Extract a function or method definition
pub(crate) fn extract_function<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;

    let parameters = match node.field_child("parameters") {
        Some(params) => base.child_texts(&params, &[]),
        None => Vec::new(),
    };
    let is_async = node.first_child_of_kind("async").is_some();
    let decorators = decorators::extract_decorators(base, &node);

    let mut options = ElementOptions::default()
        .with_metadata("parameters", json!(parameters))
        .with_metadata("isAsync", json!(is_async))
        .with_metadata("decorators", json!(decorators));

    if let Some(return_type) = base.field_text(&node, "return_type") {
        options = options.with_metadata("returnType", json!(return_type));
    }

    // Method when the nearest enclosing definition is a class
    let owner = node.ancestor_of_kinds(&["function_definition", "class_definition"]);
    let owner_class = match owner {
        Some(owner) if owner.kind() == "class_definition" => base.field_text(&owner, "name"),
        _ => None,
    };
    options = options.with_metadata("isMethod", json!(owner_class.is_some()));
    if let Some(class_name) = owner_class {
        options = options.with_metadata("className", json!(class_name));
    }

    Ok(Extracted::Single(base.create_element(
        &node,
        name,
        ElementKind::Function,
        options,
    )))
}
