//! Interface, type alias and enum extraction
//!
//! TypeScript-only declarations. All three are reported as class-like
//! elements, told apart by the `classType` metadata.

use serde_json::json;

use crate::extractors::base::{BaseExtractor, Element, ElementKind, ElementOptions, HandlerResult};
use crate::extractors::javascript::functions::is_exported;
use crate::syntax::SyntaxNode;

/// Extract an interface declaration
pub(crate) fn extract_interface<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;

    let extends = match node.first_child_of_kind("extends_type_clause") {
        Some(clause) => base.child_texts(&clause, &[]),
        None => Vec::new(),
    };

    let mut members = Vec::new();
    if let Some(body) = node.field_child("body") {
        for member in body.named_child_nodes() {
            if let Some(member_name) = base.field_text(&member, "name") {
                members.push(member_name);
            }
        }
    }

    let options = ElementOptions::default()
        .with_metadata("classType", json!("interface"))
        .with_metadata("superclasses", json!(extends))
        .with_metadata("members", json!(members))
        .with_metadata("isExported", json!(is_exported(&node)));

    Ok(base
        .create_element(&node, name, ElementKind::Class, options)
        .into())
}

/// Extract an enum declaration; members become children
pub(crate) fn extract_enum<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;

    let mut children = Vec::new();
    if let Some(body) = node.field_child("body") {
        for member in body.named_child_nodes() {
            let member_name = match member.kind() {
                "property_identifier" | "identifier" => Some(base.get_node_text(&member)),
                "enum_assignment" => base.field_text(&member, "name"),
                _ => None,
            };
            if let Some(member_name) = member_name {
                children.push(enum_member(base, &member, member_name, &name));
            }
        }
    }

    let options = ElementOptions::default()
        .with_metadata("classType", json!("enum"))
        .with_metadata("isConst", json!(node.first_child_of_kind("const").is_some()))
        .with_metadata("isExported", json!(is_exported(&node)))
        .with_children(children);

    Ok(base
        .create_element(&node, name, ElementKind::Class, options)
        .into())
}

fn enum_member<N: SyntaxNode>(
    base: &mut BaseExtractor,
    member: &N,
    name: String,
    enum_name: &str,
) -> Element {
    let mut options = ElementOptions::default().with_metadata("className", json!(enum_name));
    if let Some(value) = base.field_text(member, "value") {
        options = options.with_metadata("value", json!(value));
    }
    base.create_leaf_element(member, name, ElementKind::Variable, options)
}

/// Extract a `type X = ...` alias
pub(crate) fn extract_type_alias<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: N,
) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;
    let aliased = base.field_text(&node, "value").unwrap_or_default();

    let options = ElementOptions::default()
        .with_metadata("classType", json!("type"))
        .with_metadata("aliasedType", json!(aliased))
        .with_metadata("isExported", json!(is_exported(&node)));

    Ok(base
        .create_element(&node, name, ElementKind::Class, options)
        .into())
}
