//! ExtractorManager - Public API for element extraction
//!
//! Dispatches an already-parsed tree to the plugin for its language. The
//! manager owns no parser and reads no files; every call builds a fresh plugin
//! so no cache state leaks between trees.

use std::path::Path;

use crate::extractors::base::{Element, ElementKind, ExtractError, ExtractorConfig};
use crate::extractors::go::GoExtractor;
use crate::extractors::html::HtmlExtractor;
use crate::extractors::java::JavaExtractor;
use crate::extractors::javascript::JavaScriptExtractor;
use crate::extractors::markdown::MarkdownExtractor;
use crate::extractors::markup::MarkupLanguage;
use crate::extractors::plugin::LanguageExtractor;
use crate::extractors::python::PythonExtractor;
use crate::extractors::rust::RustExtractor;
use crate::extractors::typescript::TypeScriptExtractor;
use crate::language::{detect_language_from_path, SUPPORTED_LANGUAGES};
use crate::syntax::SyntaxNode;

/// Manager for all language extractors
#[derive(Debug, Clone, Default)]
pub struct ExtractorManager {
    config: ExtractorConfig,
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        SUPPORTED_LANGUAGES.to_vec()
    }

    /// Extract elements of `kind` from a parsed tree
    ///
    /// `jsx` shares the JavaScript plugin and `tsx` the TypeScript one.
    pub fn extract<N: SyntaxNode>(
        &self,
        language: &str,
        root: Option<N>,
        source: &str,
        kind: ElementKind,
    ) -> anyhow::Result<Vec<Element>> {
        let config = self.config.clone();
        let elements = match language {
            "python" => PythonExtractor::new(config).extract_elements(root, source, kind),
            "javascript" | "jsx" => {
                JavaScriptExtractor::new(config).extract_elements(root, source, kind)
            }
            "typescript" | "tsx" => {
                TypeScriptExtractor::new(config).extract_elements(root, source, kind)
            }
            "java" => JavaExtractor::new(config).extract_elements(root, source, kind),
            "rust" => RustExtractor::new(config).extract_elements(root, source, kind),
            "go" => GoExtractor::new(config).extract_elements(root, source, kind),
            "markdown" => MarkdownExtractor::new(config).extract_elements(root, source, kind),
            "html" => HtmlExtractor::new(config).extract_elements(root, source, kind),
            _ => return Err(ExtractError::UnsupportedLanguage(language.to_string()).into()),
        };
        Ok(elements)
    }

    /// Functions and methods; always empty for markup languages
    pub fn extract_functions<N: SyntaxNode>(
        &self,
        language: &str,
        root: Option<N>,
        source: &str,
    ) -> anyhow::Result<Vec<Element>> {
        if matches!(language, "markdown" | "html") {
            return Ok(Vec::new());
        }
        self.extract(language, root, source, ElementKind::Function)
    }

    /// Classes and class-like types; headings or elements for markup languages
    pub fn extract_classes<N: SyntaxNode>(
        &self,
        language: &str,
        root: Option<N>,
        source: &str,
    ) -> anyhow::Result<Vec<Element>> {
        self.extract(language, root, source, ElementKind::Class)
    }

    /// Determine language from a file path's extension
    pub fn get_language_from_extension(&self, file_path: &str) -> anyhow::Result<&'static str> {
        detect_language_from_path(Path::new(file_path)).ok_or_else(|| {
            anyhow::anyhow!("Unsupported file extension for file: {}", file_path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_tree_sitter_language;
    use tree_sitter::{Parser, Tree};

    fn parse(language: &str, code: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&get_tree_sitter_language(language).unwrap())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_dispatch_by_language_name() {
        let manager = ExtractorManager::new();

        let code = "def greet(name):\n    return name\n";
        let tree = parse("python", code);
        let functions = manager
            .extract_functions("python", Some(tree.root_node()), code)
            .unwrap();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "greet");
        assert_eq!(functions[0].language, "python");

        let code = "const add = (a: number, b: number): number => a + b;\n";
        let tree = parse("tsx", code);
        let functions = manager
            .extract_functions("tsx", Some(tree.root_node()), code)
            .unwrap();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "add");
    }

    #[test]
    fn test_markup_dispatch() {
        let manager = ExtractorManager::new();
        let code = "# Guide\n\nSome text.\n";
        let tree = parse("markdown", code);

        let headings = manager
            .extract_classes("markdown", Some(tree.root_node()), code)
            .unwrap();
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].kind, ElementKind::Heading);

        let functions = manager
            .extract_functions("markdown", Some(tree.root_node()), code)
            .unwrap();
        assert!(functions.is_empty());
    }

    #[test]
    fn test_unsupported_language() {
        let manager = ExtractorManager::new();
        let tree = parse("python", "x = 1\n");
        let err = manager
            .extract_functions("cobol", Some(tree.root_node()), "x = 1\n")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::UnsupportedLanguage(name)) if name == "cobol"
        ));
    }

    #[test]
    fn test_absent_tree_yields_nothing() {
        let manager = ExtractorManager::new();
        let elements = manager
            .extract_classes::<tree_sitter::Node>("java", None, "")
            .unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_language_from_extension() {
        let manager = ExtractorManager::new();
        assert_eq!(manager.get_language_from_extension("src/lib.rs").unwrap(), "rust");
        assert_eq!(manager.get_language_from_extension("README.md").unwrap(), "markdown");
        assert!(manager.get_language_from_extension("data.bin").is_err());
        assert!(manager.supported_languages().contains(&"go"));
    }
}
