/// Class extraction
use serde_json::json;

use super::decorators;
use crate::extractors::base::{BaseExtractor, ElementKind, ElementOptions, HandlerResult};
use crate::syntax::SyntaxNode;

/// Extract a class definition with its bases and metaclass
pub(crate) fn extract_class<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;

    let mut superclasses = Vec::new();
    let mut metaclass = None;
    if let Some(arguments) = node.field_child("superclasses") {
        for argument in arguments.named_child_nodes() {
            if argument.kind() == "keyword_argument" {
                // class Foo(metaclass=Meta)
                if base.field_text(&argument, "name").as_deref() == Some("metaclass") {
                    metaclass = base.field_text(&argument, "value");
                }
            } else if argument.kind() != "comment" {
                superclasses.push(base.get_node_text(&argument));
            }
        }
    }

    let decorators = decorators::extract_decorators(base, &node);
    let mut options = ElementOptions::default()
        .with_metadata("superclasses", json!(superclasses))
        .with_metadata("decorators", json!(decorators));
    if let Some(metaclass) = metaclass {
        options = options.with_metadata("metaclass", json!(metaclass));
    }

    Ok(base.create_element(&node, name, ElementKind::Class, options).into())
}
