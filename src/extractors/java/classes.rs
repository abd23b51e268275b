/// Class, interface, enum and record extraction
/// Enum constants are attached as children
use serde_json::json;

use super::helpers::{clause_types, enclosing_type_name, extract_modifiers};
use crate::extractors::base::{
    BaseExtractor, Element, ElementKind, ElementOptions, HandlerResult,
};
use crate::syntax::SyntaxNode;

pub(crate) fn extract_type_declaration<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: N,
) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;
    let modifiers = extract_modifiers(base, &node);

    let class_type = match node.kind() {
        "interface_declaration" => "interface",
        "enum_declaration" => "enum",
        "record_declaration" => "record",
        _ => "class",
    };

    let superclasses = if class_type == "interface" {
        clause_types(base, &node, "extends_interfaces")
    } else {
        match node.field_child("superclass") {
            Some(superclass) => base.child_texts(&superclass, &[]),
            None => Vec::new(),
        }
    };
    let interfaces = clause_types(base, &node, "super_interfaces");

    let mut options = modifiers
        .apply(ElementOptions::default())
        .with_metadata("classType", json!(class_type))
        .with_metadata("superclasses", json!(superclasses))
        .with_metadata("interfaces", json!(interfaces))
        .with_metadata("isAbstract", json!(modifiers.has("abstract")));

    if class_type == "record" {
        let components = match node.field_child("parameters") {
            Some(params) => base.child_texts(&params, &["formal_parameter"]),
            None => Vec::new(),
        };
        options = options.with_metadata("components", json!(components));
    }
    if let Some(outer) = enclosing_type_name(base, &node) {
        options = options.with_metadata("enclosingClass", json!(outer));
    }
    if class_type == "enum" {
        options = options.with_children(enum_constants(base, &node, &name));
    }

    Ok(base
        .create_element(&node, name, ElementKind::Class, options)
        .into())
}

fn enum_constants<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: &N,
    enum_name: &str,
) -> Vec<Element> {
    let Some(body) = node.field_child("body") else {
        return Vec::new();
    };

    let mut constants = Vec::new();
    for constant in body.children_of_kind("enum_constant") {
        if let Some(name) = base.field_text(&constant, "name") {
            let options = ElementOptions::default()
                .with_metadata("className", json!(enum_name))
                .with_metadata("isConstant", json!(true));
            let element = base.create_leaf_element(&constant, name, ElementKind::Variable, options);
            constants.push(element);
        }
    }
    constants
}
