/// Markdown extractor - headings and code blocks
///
/// Headings carry their level and, as docstring, the body of the section they
/// open (paragraphs, lists, code, quotes, tables). Code blocks carry the
/// language from the fence info string.
use serde_json::json;

use crate::extractors::base::{Element, ElementKind, ElementOptions, ExtractorConfig};
use crate::extractors::markup::{MarkupExtractor, MarkupLanguage};
use crate::syntax::SyntaxNode;

const HEADING_TYPES: &[&str] = &["atx_heading", "setext_heading"];
const CODE_BLOCK_TYPES: &[&str] = &["fenced_code_block", "indented_code_block"];

pub struct MarkdownExtractor {
    pub(crate) markup: MarkupExtractor,
}

impl MarkdownExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            markup: MarkupExtractor::new("markdown", config),
        }
    }

    fn extract_heading<N: SyntaxNode>(markup: &mut MarkupExtractor, node: N) -> Option<Element> {
        let text = markup.get_node_text(&node);
        let level = heading_level(&node, &text);

        let title = match node.kind() {
            "setext_heading" => text.lines().next().unwrap_or_default().trim().to_string(),
            _ => text
                .trim()
                .trim_start_matches('#')
                .trim_end_matches('#')
                .trim()
                .to_string(),
        };
        if title.is_empty() {
            return None;
        }

        let mut options = ElementOptions::default().with_metadata("level", json!(level));
        if markup.config().include_docstrings {
            options.docstring = section_content(markup, &node);
        }
        Some(markup.create_element(&node, title, ElementKind::Heading, options))
    }

    fn extract_code_block<N: SyntaxNode>(markup: &mut MarkupExtractor, node: N) -> Option<Element> {
        let language = match node.first_child_of_kind("info_string") {
            Some(info) => {
                let info = markup.get_node_text(&info);
                info.split_whitespace().next().map(str::to_string)
            }
            None => None,
        };
        let content = match node.first_child_of_kind("code_fence_content") {
            Some(content) => markup.get_node_text(&content),
            None if node.kind() == "indented_code_block" => markup.get_node_text(&node),
            None => String::new(),
        };

        let name = language.clone().unwrap_or_else(|| "code".to_string());
        let options = ElementOptions::default()
            .with_metadata("language", json!(language))
            .with_metadata("isFenced", json!(node.kind() == "fenced_code_block"))
            .with_metadata("contentLines", json!(content.lines().count()));
        Some(markup.create_element(&node, name, ElementKind::CodeBlock, options))
    }
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl MarkupLanguage for MarkdownExtractor {
    fn markup(&self) -> &MarkupExtractor {
        &self.markup
    }

    fn markup_mut(&mut self) -> &mut MarkupExtractor {
        &mut self.markup
    }

    fn class_kind(&self) -> ElementKind {
        ElementKind::Heading
    }

    fn collect_kind<N: SyntaxNode>(&mut self, root: Option<N>, kind: ElementKind) -> Vec<Element> {
        match kind {
            ElementKind::Heading => self.markup.collect(root, HEADING_TYPES, Self::extract_heading),
            ElementKind::CodeBlock => {
                self.markup
                    .collect(root, CODE_BLOCK_TYPES, Self::extract_code_block)
            }
            _ => Vec::new(),
        }
    }
}

/// Heading level from the ATX marker (`atx_h3_marker`) or setext underline
fn heading_level<N: SyntaxNode>(node: &N, text: &str) -> usize {
    for child in node.child_nodes() {
        let kind = child.kind();
        let level = kind
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
            .or_else(|| {
                kind.strip_prefix("setext_h")
                    .and_then(|rest| rest.strip_suffix("_underline"))
            })
            .and_then(|digit| digit.parse::<usize>().ok());
        if let Some(level) = level {
            return level;
        }
    }

    // Count leading # characters
    text.trim_start()
        .chars()
        .take_while(|&c| c == '#')
        .count()
        .clamp(1, 6)
}

/// Text of the content blocks following the heading inside its section
fn section_content<N: SyntaxNode>(markup: &mut MarkupExtractor, heading: &N) -> Option<String> {
    let section = heading.parent_node().filter(|p| p.kind() == "section")?;

    let mut parts = Vec::new();
    for child in section.child_nodes() {
        if matches!(
            child.kind(),
            "paragraph"
                | "list"
                | "fenced_code_block"
                | "indented_code_block"
                | "block_quote"
                | "pipe_table"
                | "thematic_break"
                | "html_block"
        ) {
            parts.push(markup.get_node_text(&child).trim_end().to_string());
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    const SAMPLE: &str = "# Title

Intro text.

## Install

```bash
cargo add x
```

Setup
-----

    indented code
";

    fn parse(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_md::LANGUAGE.into())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_headings_with_levels() {
        let tree = parse(SAMPLE);
        let mut extractor = MarkdownExtractor::default();
        let headings = extractor.extract_classes(Some(tree.root_node()), SAMPLE);

        let titles: Vec<_> = headings.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(titles, vec!["Title", "Install", "Setup"]);

        let levels: Vec<_> = headings.iter().map(|h| h.metadata["level"].clone()).collect();
        assert_eq!(levels, vec![json!(1), json!(2), json!(2)]);

        assert_eq!(headings[0].start_line, 1);
        assert_eq!(headings[0].end_line, 2);
        assert_eq!(headings[0].docstring.as_deref(), Some("Intro text."));
        assert!(headings.iter().all(|h| h.complexity_score.is_none()));
        assert!(headings.iter().all(|h| h.kind == ElementKind::Heading));
    }

    #[test]
    fn test_code_blocks() {
        let tree = parse(SAMPLE);
        let mut extractor = MarkdownExtractor::default();
        let blocks =
            extractor.extract_elements(Some(tree.root_node()), SAMPLE, ElementKind::CodeBlock);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "bash");
        assert_eq!(blocks[0].metadata_str("language"), Some("bash"));
        assert_eq!(blocks[0].start_line, 7);
        assert_eq!(blocks[0].end_line, 10);
        assert!(blocks[0].metadata_bool("isFenced"));
        assert_eq!(blocks[1].name, "code");
        assert!(!blocks[1].metadata_bool("isFenced"));
    }

    #[test]
    fn test_no_functions_in_markdown() {
        let tree = parse(SAMPLE);
        let mut extractor = MarkdownExtractor::default();
        assert!(extractor
            .extract_functions(Some(tree.root_node()), SAMPLE)
            .is_empty());
    }
}
