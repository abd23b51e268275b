/// Struct, enum, union and trait extraction
/// Struct and union fields and enum variants are attached as children
use serde_json::json;

use super::helpers::{derives, visibility};
use crate::extractors::base::{
    BaseExtractor, Element, ElementKind, ElementOptions, HandlerResult,
};
use crate::syntax::SyntaxNode;

pub(crate) fn extract_type<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;

    let class_type = match node.kind() {
        "enum_item" => "enum",
        "trait_item" => "trait",
        "union_item" => "union",
        _ => "struct",
    };

    let visibility = visibility(base, &node);
    let derives = derives(base, &node);
    let mut options = ElementOptions::default()
        .with_metadata("classType", json!(class_type))
        .with_metadata("visibility", json!(visibility))
        .with_metadata("derives", json!(derives));

    if let Some(generics) = base.field_text(&node, "type_parameters") {
        options = options.with_metadata("typeParameters", json!(generics));
    }

    let body = node.field_child("body");
    match (class_type, body) {
        ("trait", Some(body)) => {
            let mut methods = Vec::new();
            for item in body.named_child_nodes() {
                if matches!(item.kind(), "function_item" | "function_signature_item") {
                    if let Some(method) = base.field_text(&item, "name") {
                        methods.push(method);
                    }
                }
            }
            let supertraits = match node.field_child("bounds") {
                Some(bounds) => base.child_texts(&bounds, &[]),
                None => Vec::new(),
            };
            options = options
                .with_metadata("methods", json!(methods))
                .with_metadata("superclasses", json!(supertraits));
        }
        ("enum", Some(body)) => {
            let variants = enum_variants(base, &body, &name);
            options = options.with_children(variants);
        }
        (_, Some(body)) => {
            let fields = struct_fields(base, &body, &name);
            options = options.with_children(fields);
        }
        (_, None) => {}
    }

    Ok(base
        .create_element(&node, name, ElementKind::Class, options)
        .into())
}

/// Named fields, or positional fields named by index for tuple structs
fn struct_fields<N: SyntaxNode>(base: &mut BaseExtractor, body: &N, owner: &str) -> Vec<Element> {
    let mut fields = Vec::new();
    let mut position = 0usize;
    let mut pending_visibility: Option<String> = None;

    for child in body.named_child_nodes() {
        let (name, field_type, field_visibility) = match child.kind() {
            "field_declaration" => {
                let Some(name) = base.field_text(&child, "name") else {
                    continue;
                };
                let field_type = base.field_text(&child, "type");
                (name, field_type, visibility(base, &child))
            }
            // Tuple struct: `(pub f64, u8)`; the modifier is a sibling of its type
            "visibility_modifier" => {
                pending_visibility = Some(base.get_node_text(&child));
                continue;
            }
            "attribute_item" | "line_comment" | "block_comment" => continue,
            _ if body.kind() == "ordered_field_declaration_list" => {
                position += 1;
                let field_visibility = pending_visibility
                    .take()
                    .unwrap_or_else(|| "private".to_string());
                let field_type = base.get_node_text(&child);
                ((position - 1).to_string(), Some(field_type), field_visibility)
            }
            _ => continue,
        };

        let mut options = ElementOptions::default()
            .with_metadata("className", json!(owner))
            .with_metadata("visibility", json!(field_visibility));
        if let Some(field_type) = field_type {
            options = options.with_metadata("type", json!(field_type));
        }
        fields.push(base.create_leaf_element(&child, name, ElementKind::Variable, options));
    }
    fields
}

fn enum_variants<N: SyntaxNode>(base: &mut BaseExtractor, body: &N, owner: &str) -> Vec<Element> {
    let mut variants = Vec::new();
    for variant in body.children_of_kind("enum_variant") {
        let Some(name) = base.field_text(&variant, "name") else {
            continue;
        };
        let options = ElementOptions::default().with_metadata("className", json!(owner));
        variants.push(base.create_leaf_element(&variant, name, ElementKind::Variable, options));
    }
    variants
}
