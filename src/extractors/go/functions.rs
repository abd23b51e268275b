use serde_json::json;

use crate::extractors::base::{BaseExtractor, ElementKind, ElementOptions, HandlerResult};
use crate::syntax::SyntaxNode;

/// Exported identifiers start with an upper-case letter
pub(super) fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Function and method extraction for Go
///
/// A method's receiver type (pointer stripped) doubles as its class name.
pub(crate) fn extract_function<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;

    let parameters = match node.field_child("parameters") {
        Some(params) => base.child_texts(
            &params,
            &["parameter_declaration", "variadic_parameter_declaration"],
        ),
        None => Vec::new(),
    };

    let mut options = ElementOptions::default()
        .with_metadata("parameters", json!(parameters))
        .with_metadata("isExported", json!(is_exported(&name)));

    if let Some(result) = base.field_text(&node, "result") {
        options = options.with_metadata("returnType", json!(result));
    }
    if let Some(generics) = base.field_text(&node, "type_parameters") {
        options = options.with_metadata("typeParameters", json!(generics));
    }

    let receiver = node.field_child("receiver");
    options = options.with_metadata("isMethod", json!(receiver.is_some()));
    if let Some(receiver) = receiver {
        let receiver_text = base.get_node_text(&receiver);
        let receiver_text = receiver_text
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim()
            .to_string();
        options = options.with_metadata("receiver", json!(receiver_text));

        let receiver_type = receiver
            .first_child_of_kind("parameter_declaration")
            .and_then(|param| param.field_child("type"));
        if let Some(receiver_type) = receiver_type {
            let type_name = base.get_node_text(&receiver_type);
            let type_name = type_name.trim_start_matches('*');
            // Generic receivers: (l *List[T])
            let type_name = type_name.split('[').next().unwrap_or(type_name);
            options = options.with_metadata("className", json!(type_name));
        }
    }

    Ok(base
        .create_element(&node, name, ElementKind::Function, options)
        .into())
}
