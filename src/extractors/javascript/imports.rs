//! Import statement extraction for JavaScript
//!
//! One element per `import` statement, named after the module specifier.

use serde_json::json;

use crate::extractors::base::tree_methods::strip_string_delimiters;
use crate::extractors::base::{BaseExtractor, ElementKind, ElementOptions, HandlerResult};
use crate::syntax::SyntaxNode;

pub(crate) fn extract_import<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let source = base.required_field_text(&node, "source")?;
    let module = strip_string_delimiters(&source);

    let mut imported_names = Vec::new();
    let mut default_import = None;
    let mut namespace_import = None;

    if let Some(clause) = node.first_child_of_kind("import_clause") {
        for part in clause.named_child_nodes() {
            match part.kind() {
                "identifier" => default_import = Some(base.get_node_text(&part)),
                "namespace_import" => {
                    if let Some(alias) = part.first_child_of_kind("identifier") {
                        namespace_import = Some(base.get_node_text(&alias));
                    }
                }
                "named_imports" => {
                    for specifier in part.children_of_kind("import_specifier") {
                        if let Some(name) = base.field_text(&specifier, "name") {
                            imported_names.push(name);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    let mut options = ElementOptions::default()
        .with_metadata("importedNames", json!(imported_names))
        .with_metadata("isTypeOnly", json!(node.first_child_of_kind("type").is_some()));
    if let Some(default_import) = default_import {
        options = options.with_metadata("defaultImport", json!(default_import));
    }
    if let Some(namespace_import) = namespace_import {
        options = options.with_metadata("namespaceImport", json!(namespace_import));
    }

    Ok(base
        .create_leaf_element(&node, module, ElementKind::Import, options)
        .into())
}
