use serde_json::{Map, Value};

use crate::extractors::base::tree_methods::strip_string_delimiters;
use crate::extractors::markup::MarkupExtractor;
use crate::syntax::SyntaxNode;

/// Opening tag of an element: `start_tag` or `self_closing_tag`
pub(super) fn opening_tag<N: SyntaxNode>(element: &N) -> Option<N> {
    element
        .child_nodes()
        .into_iter()
        .find(|child| matches!(child.kind(), "start_tag" | "self_closing_tag"))
}

/// Lower-cased tag name of an element
pub(super) fn tag_name<N: SyntaxNode>(markup: &mut MarkupExtractor, element: &N) -> Option<String> {
    let tag = opening_tag(element)?;
    let name = tag.first_child_of_kind("tag_name")?;
    Some(markup.get_node_text(&name).to_ascii_lowercase())
}

/// Attribute name → value; boolean attributes map to an empty string
pub(super) fn attributes<N: SyntaxNode>(
    markup: &mut MarkupExtractor,
    element: &N,
) -> Map<String, Value> {
    let mut attributes = Map::new();
    let Some(tag) = opening_tag(element) else {
        return attributes;
    };

    for attribute in tag.children_of_kind("attribute") {
        let Some(name) = attribute.first_child_of_kind("attribute_name") else {
            continue;
        };
        let name = markup.get_node_text(&name);
        let value = match attribute
            .named_child_nodes()
            .into_iter()
            .find(|child| matches!(child.kind(), "quoted_attribute_value" | "attribute_value"))
        {
            Some(value) => strip_string_delimiters(&markup.get_node_text(&value)),
            None => String::new(),
        };
        attributes.insert(name, Value::String(value));
    }
    attributes
}
