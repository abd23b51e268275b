/// Decorator extraction
/// Supports @property, @staticmethod, @classmethod, and custom decorators
use crate::extractors::base::BaseExtractor;
use crate::syntax::SyntaxNode;

/// Decorator names applied to a function or class definition
///
/// Arguments are dropped: `@lru_cache(maxsize=128)` yields `lru_cache`.
pub(crate) fn extract_decorators<N: SyntaxNode>(base: &mut BaseExtractor, node: &N) -> Vec<String> {
    let Some(decorated) = node
        .parent_node()
        .filter(|parent| parent.kind() == "decorated_definition")
    else {
        return Vec::new();
    };

    decorated
        .children_of_kind("decorator")
        .into_iter()
        .map(|decorator| {
            let text = base.get_node_text(&decorator);
            let text = text.trim().trim_start_matches('@');
            let name = text.split('(').next().unwrap_or(text);
            name.trim().to_string()
        })
        .collect()
}
