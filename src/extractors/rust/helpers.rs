/// Helper functions for Rust extraction
/// Visibility, derive lists and impl/trait context
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::base::BaseExtractor;
use crate::syntax::SyntaxNode;

static DERIVE_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"derive\s*\(([^)]*)\)").expect("derive pattern is valid"));

/// `pub`, `pub(crate)`, ... or `private` when no modifier is present
pub(super) fn visibility<N: SyntaxNode>(base: &mut BaseExtractor, node: &N) -> String {
    match node.first_child_of_kind("visibility_modifier") {
        Some(modifier) => base.get_node_text(&modifier),
        None => "private".to_string(),
    }
}

/// Traits named in `#[derive(...)]` attributes directly above the item
pub(super) fn derives<N: SyntaxNode>(base: &mut BaseExtractor, node: &N) -> Vec<String> {
    let mut derives = Vec::new();
    let mut current = node.prev_named_sibling_node();

    while let Some(sibling) = current {
        match sibling.kind() {
            "attribute_item" => {
                let text = base.get_node_text(&sibling);
                for captures in DERIVE_LIST.captures_iter(&text) {
                    derives.extend(
                        captures[1]
                            .split(',')
                            .map(str::trim)
                            .filter(|name| !name.is_empty())
                            .map(str::to_string),
                    );
                }
            }
            "line_comment" | "block_comment" => {}
            _ => break,
        }
        current = sibling.prev_named_sibling_node();
    }
    derives
}

/// Where a function lives: inside an `impl` block, a trait, or at module level
pub(super) enum Owner {
    Impl {
        type_name: String,
        trait_name: Option<String>,
    },
    Trait(String),
    Module,
}

/// Nearest impl or trait owning `node`; a function boundary in between means module level
pub(super) fn owner<N: SyntaxNode>(base: &mut BaseExtractor, node: &N) -> Owner {
    let Some(ancestor) = node.ancestor_of_kinds(&["impl_item", "trait_item", "function_item"])
    else {
        return Owner::Module;
    };

    match ancestor.kind() {
        "impl_item" => match base.field_text(&ancestor, "type") {
            Some(type_name) => Owner::Impl {
                type_name,
                trait_name: base.field_text(&ancestor, "trait"),
            },
            None => Owner::Module,
        },
        "trait_item" => match base.field_text(&ancestor, "name") {
            Some(name) => Owner::Trait(name),
            None => Owner::Module,
        },
        _ => Owner::Module,
    }
}
