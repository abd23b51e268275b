// Tree navigation methods for BaseExtractor
//
// Complexity counting, docstring lookup and the small node helpers handlers
// share.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ExtractError;
use super::extractor::BaseExtractor;
use super::registry::DecisionKeywordSet;
use crate::syntax::SyntaxNode;

static IDENTIFIER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*").expect("identifier pattern is valid")
});

/// How a language attaches documentation to a definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocstringStyle {
    #[default]
    None,
    /// Run of comment siblings directly above the node (JSDoc, `///`, Go doc comments)
    PrecedingComment {
        comment_kinds: &'static [&'static str],
        /// Accepted comment openers; other comments end the run
        markers: &'static [&'static str],
        /// Siblings that may sit between the comment and the node (attributes, annotations)
        passthrough_kinds: &'static [&'static str],
        /// Parents that carry the comment instead of the node (`export_statement`, `type_declaration`)
        wrapper_kinds: &'static [&'static str],
    },
    /// String literal as the first statement of the body (Python)
    LeadingString {
        body_field: &'static str,
        statement_kind: &'static str,
        string_kind: &'static str,
    },
}

/// Count `node` and its descendants whose kind is a decision keyword, plus one.
///
/// Walks the whole subtree with an explicit stack; no depth limit and no cache.
pub fn count_complexity<N: SyntaxNode>(node: &N, decision_types: &DecisionKeywordSet) -> u32 {
    let mut complexity = 1;
    let mut stack = vec![*node];

    while let Some(current) = stack.pop() {
        if decision_types.contains(current.kind()) {
            complexity += 1;
        }
        stack.extend(current.child_nodes());
    }

    complexity
}

impl BaseExtractor {
    /// Cyclomatic-style complexity of the element rooted at `node`
    pub fn calculate_complexity<N: SyntaxNode>(&self, node: &N) -> u32 {
        count_complexity(node, &self.decision_types)
    }

    /// Docstring for `node` according to the configured style
    pub fn find_docstring<N: SyntaxNode>(&mut self, node: &N) -> Option<String> {
        match self.docstring_style.clone() {
            DocstringStyle::None => None,
            DocstringStyle::PrecedingComment {
                comment_kinds,
                markers,
                passthrough_kinds,
                wrapper_kinds,
            } => {
                let mut target = *node;
                loop {
                    let comments = self.preceding_comments(
                        &target,
                        comment_kinds,
                        markers,
                        passthrough_kinds,
                    );
                    if !comments.is_empty() {
                        return Some(comments.join("\n"));
                    }
                    match target.parent_node() {
                        Some(parent) if wrapper_kinds.contains(&parent.kind()) => target = parent,
                        _ => return None,
                    }
                }
            }
            DocstringStyle::LeadingString {
                body_field,
                statement_kind,
                string_kind,
            } => {
                let body = node.field_child(body_field)?;
                let statement = body.named_child_nodes().into_iter().next()?;
                if statement.kind() != statement_kind {
                    return None;
                }
                let string = statement.named_child_nodes().into_iter().next()?;
                if string.kind() != string_kind {
                    return None;
                }
                let text = self.get_node_text(&string);
                Some(strip_string_delimiters(&text).trim().to_string())
            }
        }
    }

    fn preceding_comments<N: SyntaxNode>(
        &mut self,
        node: &N,
        comment_kinds: &[&str],
        markers: &[&str],
        passthrough_kinds: &[&str],
    ) -> Vec<String> {
        let mut comments = Vec::new();
        let mut current = node.prev_named_sibling_node();

        while let Some(sibling) = current {
            if comment_kinds.contains(&sibling.kind()) {
                let text = self.get_node_text(&sibling);
                let trimmed = text.trim_start();
                if !markers.iter().any(|marker| trimmed.starts_with(marker)) {
                    break;
                }
                comments.push(text.trim_end().to_string());
            } else if !passthrough_kinds.contains(&sibling.kind()) {
                break;
            }
            current = sibling.prev_named_sibling_node();
        }

        // Collected bottom-up
        comments.reverse();
        comments
    }

    /// Text of a field child, if the field is present
    pub fn field_text<N: SyntaxNode>(&mut self, node: &N, field_name: &str) -> Option<String> {
        let child = node.field_child(field_name)?;
        Some(self.get_node_text(&child))
    }

    /// Text of a field child that must exist for the node to be an element
    pub fn required_field_text<N: SyntaxNode>(
        &mut self,
        node: &N,
        field_name: &'static str,
    ) -> Result<String, ExtractError> {
        self.field_text(node, field_name)
            .ok_or_else(|| ExtractError::MissingField {
                node_type: node.kind().to_string(),
                field: field_name,
                line: node.start_point().row as u32 + 1,
            })
    }

    /// Texts of all named children of `node` whose kind is in `kinds`
    pub fn child_texts<N: SyntaxNode>(&mut self, node: &N, kinds: &[&str]) -> Vec<String> {
        node.named_child_nodes()
            .into_iter()
            .filter(|child| kinds.is_empty() || kinds.contains(&child.kind()))
            .map(|child| self.get_node_text(&child))
            .collect()
    }

    /// Name of a node: `name` field, then a leading identifier child, then a
    /// leading identifier in the node text
    pub fn extract_identifier_name<N: SyntaxNode>(&mut self, node: &N) -> Option<String> {
        if let Some(name) = self.field_text(node, "name") {
            return Some(name);
        }

        if let Some(first) = node.named_child_nodes().into_iter().next() {
            if first.kind().ends_with("identifier") {
                return Some(self.get_node_text(&first));
            }
        }

        let text = self.get_node_text(node);
        IDENTIFIER_PREFIX
            .find(text.trim())
            .map(|found| found.as_str().to_string())
    }
}

/// Strip quotes (and string prefixes such as `r` or `b`) from a string literal
pub(crate) fn strip_string_delimiters(s: &str) -> String {
    let unprefixed = s.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let s = if unprefixed.len() < s.len() && unprefixed.starts_with(['"', '\'']) {
        unprefixed
    } else {
        s
    };
    // Triple quotes first, then single quote characters
    let delimiters = [("\"\"\"", 3), ("'''", 3), ("\"", 1), ("'", 1), ("`", 1)];

    for (delimiter, strip_count) in &delimiters {
        if s.starts_with(delimiter) && s.ends_with(delimiter) && s.len() >= strip_count * 2 {
            return s[*strip_count..s.len() - strip_count].to_string();
        }
    }

    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::types::{ExtractorConfig, SourceEncoding};
    use crate::syntax::SyntaxArena;

    #[test]
    fn test_complexity_counts_decision_nodes() {
        let source = "fn";
        let mut arena = SyntaxArena::new(source);
        let function = arena.add(None, "function_definition", 0, 2);
        let body = arena.add(Some(function), "block", 0, 2);
        arena.add(Some(body), "return_statement", 0, 2);

        let decisions = DecisionKeywordSet::default_decisions();
        assert_eq!(count_complexity(&arena.node(function), &decisions), 1);

        arena.add(Some(body), "if_statement", 0, 2);
        assert_eq!(count_complexity(&arena.node(function), &decisions), 2);

        let nested = arena.add(Some(body), "while_statement", 0, 2);
        arena.add_token(nested, "&&", 0, 2);
        assert_eq!(count_complexity(&arena.node(function), &decisions), 4);
    }

    #[test]
    fn test_complexity_counts_the_node_itself() {
        let mut arena = SyntaxArena::new("if");
        let node = arena.add(None, "if_statement", 0, 2);
        let decisions = DecisionKeywordSet::default_decisions();
        assert_eq!(count_complexity(&arena.node(node), &decisions), 2);
    }

    #[test]
    fn test_preceding_comment_docstring() {
        let source = "/** Adds. */\n// plain\n/** Doc. */\n@inline\nfunction add() {}";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "program", 0, source.len());
        arena.add(Some(root), "comment", 0, 12);
        arena.add(Some(root), "comment", 13, 21);
        arena.add(Some(root), "comment", 22, 33);
        arena.add(Some(root), "decorator", 34, 41);
        let function = arena.add(Some(root), "function_declaration", 42, source.len());

        let mut extractor = BaseExtractor::new("javascript", ExtractorConfig::default())
            .with_docstring_style(DocstringStyle::PrecedingComment {
                comment_kinds: &["comment"],
                markers: &["/**"],
                passthrough_kinds: &["decorator"],
                wrapper_kinds: &[],
            });
        extractor.initialize_source(source, SourceEncoding::Utf8);

        // The plain comment ends the run, so only the nearest JSDoc is kept
        assert_eq!(
            extractor.find_docstring(&arena.node(function)).as_deref(),
            Some("/** Doc. */")
        );
    }

    #[test]
    fn test_wrapper_parent_carries_comment() {
        let source = "/// Doc\nexport fn f";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "program", 0, source.len());
        arena.add(Some(root), "comment", 0, 7);
        let export = arena.add(Some(root), "export_statement", 8, source.len());
        let function = arena.add(Some(export), "function_declaration", 15, source.len());

        let mut extractor = BaseExtractor::new("javascript", ExtractorConfig::default())
            .with_docstring_style(DocstringStyle::PrecedingComment {
                comment_kinds: &["comment"],
                markers: &["///"],
                passthrough_kinds: &[],
                wrapper_kinds: &["export_statement"],
            });
        extractor.initialize_source(source, SourceEncoding::Utf8);
        assert_eq!(
            extractor.find_docstring(&arena.node(function)).as_deref(),
            Some("/// Doc")
        );
    }

    #[test]
    fn test_leading_string_docstring() {
        let source = "def f():\n    \"\"\"Say hi.\"\"\"\n    pass";
        let mut arena = SyntaxArena::new(source);
        let function = arena.add(None, "function_definition", 0, source.len());
        let body = arena.add_field(function, "body", "block", 13, source.len());
        let statement = arena.add(Some(body), "expression_statement", 13, 26);
        arena.add(Some(statement), "string", 13, 26);

        let mut extractor = BaseExtractor::new("python", ExtractorConfig::default())
            .with_docstring_style(DocstringStyle::LeadingString {
                body_field: "body",
                statement_kind: "expression_statement",
                string_kind: "string",
            });
        extractor.initialize_source(source, SourceEncoding::Utf8);
        assert_eq!(
            extractor.find_docstring(&arena.node(function)).as_deref(),
            Some("Say hi.")
        );
    }

    #[test]
    fn test_strip_string_delimiters() {
        assert_eq!(strip_string_delimiters("\"\"\"doc\"\"\""), "doc");
        assert_eq!(strip_string_delimiters("r'raw'"), "raw");
        assert_eq!(strip_string_delimiters("plain"), "plain");
    }

    #[test]
    fn test_identifier_name_fallback() {
        let source = "foo = 1";
        let mut arena = SyntaxArena::new(source);
        let node = arena.add(None, "assignment", 0, source.len());

        let mut extractor = BaseExtractor::new("python", ExtractorConfig::default());
        extractor.initialize_source(source, SourceEncoding::Utf8);
        assert_eq!(
            extractor.extract_identifier_name(&arena.node(node)).as_deref(),
            Some("foo")
        );
    }
}
