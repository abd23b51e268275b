/// Variable extraction from assignments
/// Handles simple, annotated and tuple-unpacking assignments at module and class level
use serde_json::json;

use crate::extractors::base::{
    BaseExtractor, Element, ElementKind, ElementOptions, Extracted, HandlerResult,
};
use crate::syntax::SyntaxNode;

/// Extract the names bound by an assignment; function locals are skipped
pub(crate) fn extract_assignment<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: N,
) -> HandlerResult {
    if node.ancestor_of_kinds(&["function_definition"]).is_some() {
        return Ok(Extracted::Nothing);
    }

    let Some(left) = node.field_child("left") else {
        return Ok(Extracted::Nothing);
    };

    let targets = match left.kind() {
        "identifier" => vec![left],
        "pattern_list" | "tuple_pattern" | "list_pattern" => left
            .named_child_nodes()
            .into_iter()
            .filter(|target| target.kind() == "identifier")
            .collect(),
        // attribute and subscript targets do not bind new names
        _ => Vec::new(),
    };

    let annotation = base.field_text(&node, "type");
    let class_name = match node.ancestor_of_kinds(&["class_definition"]) {
        Some(class) => base.field_text(&class, "name"),
        None => None,
    };

    let elements: Vec<Element> = targets
        .into_iter()
        .map(|target| {
            let name = base.get_node_text(&target);
            let mut options = ElementOptions::default()
                .with_metadata("isConstant", json!(is_constant_name(&name)));
            if let Some(annotation) = &annotation {
                options = options.with_metadata("type", json!(annotation));
            }
            if let Some(class_name) = &class_name {
                options = options.with_metadata("className", json!(class_name));
            }
            base.create_leaf_element(&node, name, ElementKind::Variable, options)
        })
        .collect();

    Ok(elements.into())
}

/// UPPER_CASE names are treated as constants
fn is_constant_name(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::is_constant_name;

    #[test]
    fn test_constant_names() {
        assert!(is_constant_name("MAX_SIZE"));
        assert!(is_constant_name("V2"));
        assert!(!is_constant_name("max_size"));
        assert!(!is_constant_name("_"));
    }
}
