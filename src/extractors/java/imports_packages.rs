/// Import and package declaration extraction
use serde_json::json;

use crate::extractors::base::{
    BaseExtractor, ElementKind, ElementOptions, ExtractError, HandlerResult,
};
use crate::syntax::SyntaxNode;

const QUALIFIED_NAMES: &[&str] = &["scoped_identifier", "identifier"];

fn qualified_name<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: &N,
) -> Result<String, ExtractError> {
    let name = node
        .named_child_nodes()
        .into_iter()
        .find(|child| QUALIFIED_NAMES.contains(&child.kind()))
        .ok_or_else(|| ExtractError::MissingField {
            node_type: node.kind().to_string(),
            field: "name",
            line: node.start_point().row as u32 + 1,
        })?;
    Ok(base.get_node_text(&name))
}

/// `import [static] a.b.C;` and `import a.b.*;`
pub(crate) fn extract_import<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let mut name = qualified_name(base, &node)?;
    let is_wildcard = node.first_child_of_kind("asterisk").is_some();
    if is_wildcard {
        name.push_str(".*");
    }

    let options = ElementOptions::default()
        .with_metadata("isStatic", json!(node.first_child_of_kind("static").is_some()))
        .with_metadata("isWildcard", json!(is_wildcard));

    Ok(base
        .create_leaf_element(&node, name, ElementKind::Import, options)
        .into())
}

pub(crate) fn extract_package<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = qualified_name(base, &node)?;
    Ok(base
        .create_leaf_element(&node, name, ElementKind::Package, ElementOptions::default())
        .into())
}
