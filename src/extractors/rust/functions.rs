/// Function and method extraction
/// Covers free functions, inherent and trait impl methods, and trait method signatures
use serde_json::json;

use super::helpers::{owner, visibility, Owner};
use crate::extractors::base::{BaseExtractor, ElementKind, ElementOptions, HandlerResult};
use crate::syntax::SyntaxNode;

pub(crate) fn extract_function<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;

    let parameters = match node.field_child("parameters") {
        Some(params) => params
            .named_child_nodes()
            .into_iter()
            .filter(|param| {
                !matches!(
                    param.kind(),
                    "line_comment" | "block_comment" | "attribute_item"
                )
            })
            .map(|param| base.get_node_text(&param))
            .collect(),
        None => Vec::new(),
    };

    // async / const / unsafe / extern
    let modifiers: Vec<String> = match node.first_child_of_kind("function_modifiers") {
        Some(list) => list
            .child_nodes()
            .into_iter()
            .map(|modifier| base.get_node_text(&modifier))
            .collect(),
        None => Vec::new(),
    };
    let has = |keyword: &str| modifiers.iter().any(|m| m.starts_with(keyword));

    let visibility = visibility(base, &node);
    let mut options = ElementOptions::default()
        .with_metadata("parameters", json!(parameters))
        .with_metadata("visibility", json!(visibility))
        .with_metadata("isAsync", json!(has("async")))
        .with_metadata("isUnsafe", json!(has("unsafe")))
        .with_metadata("isConst", json!(has("const")))
        .with_metadata("modifiers", json!(modifiers))
        .with_metadata("hasBody", json!(node.field_child("body").is_some()));

    if let Some(return_type) = base.field_text(&node, "return_type") {
        options = options.with_metadata("returnType", json!(return_type));
    }

    options = match owner(base, &node) {
        Owner::Impl {
            type_name,
            trait_name,
        } => {
            let options = options
                .with_metadata("isMethod", json!(true))
                .with_metadata("className", json!(type_name));
            match trait_name {
                Some(trait_name) => options.with_metadata("traitName", json!(trait_name)),
                None => options,
            }
        }
        Owner::Trait(trait_name) => options
            .with_metadata("isMethod", json!(true))
            .with_metadata("className", json!(trait_name)),
        Owner::Module => options.with_metadata("isMethod", json!(false)),
    };

    Ok(base
        .create_element(&node, name, ElementKind::Function, options)
        .into())
}
