/// Helper functions for Java extraction
/// Handles modifiers, visibility, annotations and type lists
use serde_json::json;

use crate::extractors::base::{BaseExtractor, ElementOptions};
use crate::syntax::SyntaxNode;

/// Keyword modifiers and annotation names of a declaration
#[derive(Debug, Default)]
pub(super) struct Modifiers {
    pub keywords: Vec<String>,
    pub annotations: Vec<String>,
}

impl Modifiers {
    pub fn has(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Java's default visibility is package-private
    pub fn visibility(&self) -> &'static str {
        if self.has("public") {
            "public"
        } else if self.has("private") {
            "private"
        } else if self.has("protected") {
            "protected"
        } else {
            "package"
        }
    }

    /// `modifiers`, `visibility`, `isStatic` and `annotations` metadata
    pub fn apply(&self, options: ElementOptions) -> ElementOptions {
        options
            .with_metadata("modifiers", json!(self.keywords))
            .with_metadata("visibility", json!(self.visibility()))
            .with_metadata("isStatic", json!(self.has("static")))
            .with_metadata("annotations", json!(self.annotations))
    }
}

/// Read the `modifiers` child of a declaration
pub(super) fn extract_modifiers<N: SyntaxNode>(base: &mut BaseExtractor, node: &N) -> Modifiers {
    let mut modifiers = Modifiers::default();
    let Some(list) = node.first_child_of_kind("modifiers") else {
        return modifiers;
    };

    for child in list.child_nodes() {
        match child.kind() {
            "marker_annotation" | "annotation" => {
                if let Some(name) = base.field_text(&child, "name") {
                    modifiers.annotations.push(name);
                }
            }
            "line_comment" | "block_comment" => {}
            _ => {
                let keyword = base.get_node_text(&child);
                modifiers.keywords.push(keyword);
            }
        }
    }
    modifiers
}

/// Types listed under a clause such as `super_interfaces` or `extends_interfaces`
pub(super) fn clause_types<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: &N,
    clause_kind: &str,
) -> Vec<String> {
    let Some(clause) = node.first_child_of_kind(clause_kind) else {
        return Vec::new();
    };
    match clause.first_child_of_kind("type_list") {
        Some(list) => base.child_texts(&list, &[]),
        None => base.child_texts(&clause, &[]),
    }
}

/// Name of the innermost enclosing type declaration
pub(super) fn enclosing_type_name<N: SyntaxNode>(
    base: &mut BaseExtractor,
    node: &N,
) -> Option<String> {
    let owner = node.ancestor_of_kinds(super::TYPE_DECLARATIONS)?;
    base.field_text(&owner, "name")
}
