// HTML Extractor
//
// Every element (including <script> and <style>) becomes a markup element
// named by its tag, with its attributes as metadata. Nested elements are
// reported flat, in document order.

mod attributes;

use serde_json::{json, Value};

use crate::extractors::base::{Element, ElementKind, ElementOptions, ExtractorConfig};
use crate::extractors::markup::{MarkupExtractor, MarkupLanguage};
use crate::syntax::SyntaxNode;

const ELEMENT_TYPES: &[&str] = &["element", "script_element", "style_element"];

pub struct HtmlExtractor {
    pub(crate) markup: MarkupExtractor,
}

impl HtmlExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            markup: MarkupExtractor::new("html", config),
        }
    }

    fn extract_element<N: SyntaxNode>(markup: &mut MarkupExtractor, node: N) -> Option<Element> {
        let tag = attributes::tag_name(markup, &node)?;
        let attributes = attributes::attributes(markup, &node);

        let mut options = ElementOptions::default()
            .with_metadata("tag", json!(tag))
            .with_metadata(
                "isSelfClosing",
                json!(node.first_child_of_kind("self_closing_tag").is_some()),
            );
        if let Some(Value::String(id)) = attributes.get("id") {
            options = options.with_metadata("id", json!(id));
        }
        if let Some(Value::String(class)) = attributes.get("class") {
            let classes: Vec<&str> = class.split_whitespace().collect();
            options = options.with_metadata("classes", json!(classes));
        }
        options = options.with_metadata("attributes", Value::Object(attributes));

        Some(markup.create_element(&node, tag, ElementKind::MarkupElement, options))
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl MarkupLanguage for HtmlExtractor {
    fn markup(&self) -> &MarkupExtractor {
        &self.markup
    }

    fn markup_mut(&mut self) -> &mut MarkupExtractor {
        &mut self.markup
    }

    fn class_kind(&self) -> ElementKind {
        ElementKind::MarkupElement
    }

    fn collect_kind<N: SyntaxNode>(&mut self, root: Option<N>, kind: ElementKind) -> Vec<Element> {
        match kind {
            ElementKind::MarkupElement => {
                self.markup
                    .collect(root, ELEMENT_TYPES, Self::extract_element)
            }
            _ => Vec::new(),
        }
    }
}
