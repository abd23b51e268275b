/// Import statement extraction
/// `import a, b as c` yields one element per module; `from m import x, y`
/// yields a single element named after the module
use serde_json::json;

use crate::extractors::base::{
    BaseExtractor, Element, ElementKind, ElementOptions, Extracted, HandlerResult,
};
use crate::syntax::SyntaxNode;

pub(crate) fn extract_import<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let mut imported = Vec::new();
    for child in node.named_child_nodes() {
        match child.kind() {
            "dotted_name" => imported.push((base.get_node_text(&child), None)),
            "aliased_import" => {
                if let Some(name) = base.field_text(&child, "name") {
                    imported.push((name, base.field_text(&child, "alias")));
                }
            }
            _ => {}
        }
    }

    let elements: Vec<Element> = imported
        .into_iter()
        .map(|(name, alias)| {
            let mut options = ElementOptions::default().with_metadata("isFromImport", json!(false));
            if let Some(alias) = alias {
                options = options.with_metadata("alias", json!(alias));
            }
            base.create_leaf_element(&node, name, ElementKind::Import, options)
        })
        .collect();

    Ok(elements.into())
}

pub(crate) fn extract_import_from<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: N,
) -> HandlerResult {
    let module_name = base.required_field_text(&node, "module_name")?;
    let module_id = node.field_child("module_name").map(|module| module.node_id());

    let mut imported_names = Vec::new();
    for child in node.named_child_nodes() {
        if Some(child.node_id()) == module_id {
            continue;
        }
        match child.kind() {
            "dotted_name" => imported_names.push(base.get_node_text(&child)),
            "aliased_import" => {
                if let Some(name) = base.field_text(&child, "name") {
                    imported_names.push(name);
                }
            }
            "wildcard_import" => imported_names.push("*".to_string()),
            _ => {}
        }
    }

    let options = ElementOptions::default()
        .with_metadata("isFromImport", json!(true))
        .with_metadata("importedNames", json!(imported_names));

    Ok(Extracted::Single(base.create_leaf_element(
        &node,
        module_name,
        ElementKind::Import,
        options,
    )))
}
