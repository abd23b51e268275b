//! Function and method extraction for JavaScript
//!
//! Handles function declarations, generators, function expressions, arrow
//! functions, methods and constructors. Anonymous functions that are not
//! bound to a name (inline callbacks) are skipped.

use serde_json::json;

use crate::extractors::base::{
    BaseExtractor, ElementKind, ElementOptions, Extracted, HandlerResult,
};
use crate::syntax::SyntaxNode;

const DECLARATION_WRAPPERS: &[&str] = &[
    "variable_declarator",
    "lexical_declaration",
    "variable_declaration",
];

/// Extract any non-method function form
pub(crate) fn extract_function<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let Some(name) = binding_name(base, &node) else {
        return Ok(Extracted::Nothing);
    };

    let mut options = signature_options(base, &node)
        .with_metadata("isArrow", json!(node.kind() == "arrow_function"))
        .with_metadata(
            "isGenerator",
            json!(
                node.kind() == "generator_function_declaration"
                    || node.first_child_of_kind("*").is_some()
            ),
        )
        .with_metadata("isExported", json!(is_exported(&node)))
        .with_metadata("isMethod", json!(false));

    // Arrow functions stored in class fields behave like methods
    if let Some(class_name) = enclosing_class_name(base, &node) {
        options = options
            .with_metadata("isMethod", json!(true))
            .with_metadata("className", json!(class_name));
    }

    Ok(base
        .create_element(&node, name, ElementKind::Function, options)
        .into())
}

/// Extract a class method, getter, setter or constructor
pub(crate) fn extract_method<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;

    let method_kind = if node.first_child_of_kind("get").is_some() {
        "get"
    } else if node.first_child_of_kind("set").is_some() {
        "set"
    } else if name == "constructor" {
        "constructor"
    } else {
        "method"
    };

    let mut options = signature_options(base, &node)
        .with_metadata("isMethod", json!(true))
        .with_metadata("methodKind", json!(method_kind))
        .with_metadata("isStatic", json!(node.first_child_of_kind("static").is_some()));

    // TypeScript accessibility: public / private / protected
    if let Some(modifier) = node.first_child_of_kind("accessibility_modifier") {
        let visibility = base.get_node_text(&modifier);
        options = options.with_metadata("visibility", json!(visibility));
    }
    if let Some(class_name) = enclosing_class_name(base, &node) {
        options = options.with_metadata("className", json!(class_name));
    }

    Ok(base
        .create_element(&node, name, ElementKind::Function, options)
        .into())
}

/// Parameters, async flag and (TypeScript) return type
pub(crate) fn signature_options<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: &N,
) -> ElementOptions {
    let parameters = if let Some(single) = node.field_child("parameter") {
        vec![base.get_node_text(&single)]
    } else if let Some(params) = node.field_child("parameters") {
        params
            .named_child_nodes()
            .into_iter()
            .filter(|param| param.kind() != "comment")
            .map(|param| base.get_node_text(&param))
            .collect()
    } else {
        Vec::new()
    };

    let mut options = ElementOptions::default()
        .with_metadata("parameters", json!(parameters))
        .with_metadata("isAsync", json!(node.first_child_of_kind("async").is_some()));

    if let Some(return_type) = base.field_text(node, "return_type") {
        let return_type = return_type.trim_start_matches(':').trim().to_string();
        options = options.with_metadata("returnType", json!(return_type));
    }
    options
}

/// Own name, else the name it is bound to by its parent
pub(crate) fn binding_name<N: SyntaxNode>(base: &mut BaseExtractor, node: &N) -> Option<String> {
    if let Some(name) = base.field_text(node, "name") {
        return Some(name);
    }

    let parent = node.parent_node()?;
    let field = match parent.kind() {
        "variable_declarator" => "name",
        "assignment_expression" => "left",
        "pair" => "key",
        "field_definition" => "property",
        "public_field_definition" => "name",
        _ => return None,
    };
    base.field_text(&parent, field)
}

pub(crate) fn is_exported<N: SyntaxNode>(node: &N) -> bool {
    let mut current = node.parent_node();
    while let Some(parent) = current {
        if parent.kind() == "export_statement" {
            return true;
        }
        if !DECLARATION_WRAPPERS.contains(&parent.kind()) {
            return false;
        }
        current = parent.parent_node();
    }
    false
}

/// Name of the class whose body directly holds this member
fn enclosing_class_name<N: SyntaxNode>(base: &mut BaseExtractor, node: &N) -> Option<String> {
    let mut current = node.parent_node();
    while let Some(parent) = current {
        match parent.kind() {
            "class_body" => {
                let class = parent.parent_node()?;
                return binding_name(base, &class);
            }
            "field_definition" | "public_field_definition" => current = parent.parent_node(),
            _ => return None,
        }
    }
    None
}
