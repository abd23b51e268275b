/// Type declaration extraction for Go (structs, interfaces, aliases, defined types)
/// Struct fields are attached as children
use serde_json::json;

use super::functions::is_exported;
use crate::extractors::base::{
    BaseExtractor, Element, ElementKind, ElementOptions, HandlerResult,
};
use crate::syntax::SyntaxNode;

pub(crate) fn extract_type_spec<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let name = base.required_field_text(&node, "name")?;
    let underlying = node.field_child("type");

    let class_type = match (node.kind(), underlying.as_ref().map(|t| t.kind())) {
        ("type_alias", _) => "alias",
        (_, Some("struct_type")) => "struct",
        (_, Some("interface_type")) => "interface",
        _ => "type",
    };

    let mut options = ElementOptions::default()
        .with_metadata("classType", json!(class_type))
        .with_metadata("isExported", json!(is_exported(&name)));

    if let Some(generics) = base.field_text(&node, "type_parameters") {
        options = options.with_metadata("typeParameters", json!(generics));
    }

    match (class_type, underlying) {
        ("struct", Some(struct_type)) => {
            let fields = struct_fields(base, &struct_type, &name);
            options = options.with_children(fields);
        }
        ("interface", Some(interface_type)) => {
            let mut methods = Vec::new();
            for member in interface_type.named_child_nodes() {
                if matches!(member.kind(), "method_elem" | "method_spec") {
                    if let Some(method) = base.field_text(&member, "name") {
                        methods.push(method);
                    }
                }
            }
            options = options.with_metadata("methods", json!(methods));
        }
        (_, Some(other)) => {
            let text = base.get_node_text(&other);
            options = options.with_metadata("underlyingType", json!(text));
        }
        (_, None) => {}
    }

    Ok(base
        .create_element(&node, name, ElementKind::Class, options)
        .into())
}

/// `X, Y int` yields two fields; an embedded `*Logger` yields one named `Logger`
fn struct_fields<N: SyntaxNode>(
    base: &mut BaseExtractor,
    struct_type: &N,
    owner: &str,
) -> Vec<Element> {
    let Some(list) = struct_type.first_child_of_kind("field_declaration_list") else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for declaration in list.children_of_kind("field_declaration") {
        let field_type = base.field_text(&declaration, "type").unwrap_or_default();
        let names: Vec<String> = declaration
            .children_of_kind("field_identifier")
            .iter()
            .map(|ident| base.get_node_text(ident))
            .collect();

        let embedded = names.is_empty();
        let names = if embedded {
            vec![field_type.trim_start_matches('*').to_string()]
        } else {
            names
        };

        for name in names {
            let options = ElementOptions::default()
                .with_metadata("className", json!(owner))
                .with_metadata("type", json!(field_type))
                .with_metadata("isEmbedded", json!(embedded))
                .with_metadata("isExported", json!(is_exported(&name)));
            let field = base.create_leaf_element(&declaration, name, ElementKind::Variable, options);
            fields.push(field);
        }
    }
    fields
}
