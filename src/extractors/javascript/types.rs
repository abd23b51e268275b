//! Class extraction for JavaScript
//!
//! Covers class declarations and class expressions bound to a name. The
//! heritage clause is read in both its JavaScript form (`extends expr`) and
//! its TypeScript form (`extends_clause` / `implements_clause`).

use serde_json::json;

use super::functions::{binding_name, is_exported};
use crate::extractors::base::{
    BaseExtractor, ElementKind, ElementOptions, Extracted, HandlerResult,
};
use crate::syntax::SyntaxNode;

pub(crate) fn extract_class<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let Some(name) = binding_name(base, &node) else {
        return Ok(Extracted::Nothing);
    };

    let (superclasses, interfaces) = heritage(base, &node);
    let class_type = if node.kind() == "abstract_class_declaration" {
        "abstract class"
    } else {
        "class"
    };

    let options = ElementOptions::default()
        .with_metadata("classType", json!(class_type))
        .with_metadata("superclasses", json!(superclasses))
        .with_metadata("interfaces", json!(interfaces))
        .with_metadata("isExported", json!(is_exported(&node)));

    Ok(base
        .create_element(&node, name, ElementKind::Class, options)
        .into())
}

/// (superclasses, implemented interfaces)
fn heritage<N: SyntaxNode>(base: &mut BaseExtractor, node: &N) -> (Vec<String>, Vec<String>) {
    let mut superclasses = Vec::new();
    let mut interfaces = Vec::new();

    for clause in node.children_of_kind("class_heritage") {
        for part in clause.named_child_nodes() {
            match part.kind() {
                "extends_clause" => {
                    for value in part.named_child_nodes() {
                        if value.kind() != "type_arguments" {
                            superclasses.push(base.get_node_text(&value));
                        }
                    }
                }
                "implements_clause" => interfaces.extend(base.child_texts(&part, &[])),
                "comment" => {}
                _ => superclasses.push(base.get_node_text(&part)),
            }
        }
    }

    (superclasses, interfaces)
}
