/// Python extractor: functions, classes, module/class-level variables and imports
///
/// This module is organized into focused sub-modules:
/// - functions: function and method handler, parameters
/// - decorators: decorator names shared by functions and classes
/// - types: class handler
/// - assignments: variable handler
/// - imports: import statement handlers
pub(crate) mod assignments;
pub(crate) mod decorators;
pub(crate) mod functions;
pub(crate) mod imports;
pub(crate) mod types;

use crate::extractors::base::{
    BaseExtractor, ContainerTypeSet, DecisionKeywordSet, DocstringStyle, ElementKind,
    ExtractorConfig, HandlerRegistry,
};
use crate::extractors::plugin::LanguageExtractor;
use crate::syntax::SyntaxNode;

const CONTAINER_TYPES: &[&str] = &[
    "class_definition",
    "function_definition",
    "if_statement",
    "elif_clause",
    "else_clause",
    "try_statement",
    "except_clause",
    "finally_clause",
    "with_statement",
];

const DECISION_TYPES: &[&str] = &[
    "if_statement",
    "elif_clause",
    "for_statement",
    "while_statement",
    "except_clause",
    "with_statement",
    "conditional_expression",
    "case_clause",
    "for_in_clause",
    "if_clause",
    "and",
    "or",
];

pub struct PythonExtractor {
    base: BaseExtractor,
}

impl PythonExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let base = BaseExtractor::new("python", config)
            .with_container_types(ContainerTypeSet::default_containers().extended(CONTAINER_TYPES))
            .with_decision_types(DecisionKeywordSet::from_types(DECISION_TYPES))
            .with_docstring_style(DocstringStyle::LeadingString {
                body_field: "body",
                statement_kind: "expression_statement",
                string_kind: "string",
            });
        Self { base }
    }
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl LanguageExtractor for PythonExtractor {
    fn base(&self) -> &BaseExtractor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExtractor {
        &mut self.base
    }

    fn function_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        HandlerRegistry::new().with("function_definition", functions::extract_function)
    }

    fn class_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        HandlerRegistry::new().with("class_definition", types::extract_class)
    }

    fn handlers_for<N: SyntaxNode>(&self, kind: ElementKind) -> HandlerRegistry<N> {
        match kind {
            ElementKind::Function => self.function_handlers(),
            ElementKind::Class => self.class_handlers(),
            ElementKind::Variable => {
                HandlerRegistry::new().with("assignment", assignments::extract_assignment)
            }
            ElementKind::Import => HandlerRegistry::new()
                .with("import_statement", imports::extract_import)
                .with("import_from_statement", imports::extract_import_from),
            _ => HandlerRegistry::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxArena;
    use tree_sitter::{Parser, Tree};

    fn parse(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_functions_and_methods() {
        let code = r#"
import os

def top_level(a, b=2) -> int:
    """Add things."""
    if a and b:
        return a + b
    return 0

class Greeter(Base, metaclass=Meta):
    """Says hello."""

    @staticmethod
    def greet(name: str):
        return f"hi {name}"

    async def fetch(self):
        pass
"#;
        let tree = parse(code);
        let mut extractor = PythonExtractor::default();
        let functions = extractor.extract_functions(Some(tree.root_node()), code);

        let names: Vec<_> = functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["top_level", "greet", "fetch"]);

        let top = &functions[0];
        assert_eq!(top.start_line, 4);
        assert_eq!(top.end_line, 8);
        assert_eq!(top.docstring.as_deref(), Some("Add things."));
        // if + and
        assert_eq!(top.complexity_score, Some(3));
        assert_eq!(top.language, "python");
        assert_eq!(top.metadata_str("returnType"), Some("int"));
        assert_eq!(
            top.metadata["parameters"],
            serde_json::json!(["a", "b=2"])
        );
        assert!(!top.metadata_bool("isMethod"));

        let greet = &functions[1];
        assert!(greet.metadata_bool("isMethod"));
        assert_eq!(greet.metadata["decorators"], serde_json::json!(["staticmethod"]));
        assert_eq!(greet.complexity_score, Some(1));

        let fetch = &functions[2];
        assert!(fetch.metadata_bool("isAsync"));
        assert_eq!(fetch.metadata_str("className"), Some("Greeter"));
    }

    #[test]
    fn test_classes() {
        let code = r#"
class Greeter(Base, metaclass=Meta):
    """Says hello."""

    class Inner:
        pass

def factory():
    class Local:
        pass
    return Local
"#;
        let tree = parse(code);
        let mut extractor = PythonExtractor::default();
        let classes = extractor.extract_classes(Some(tree.root_node()), code);

        let names: Vec<_> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Greeter", "Inner", "Local"]);

        let greeter = &classes[0];
        assert_eq!(greeter.docstring.as_deref(), Some("Says hello."));
        assert_eq!(greeter.metadata["superclasses"], serde_json::json!(["Base"]));
        assert_eq!(greeter.metadata_str("metaclass"), Some("Meta"));
        // Nested classes are reported as siblings; containment comes from lines
        assert!(greeter.contains(&classes[1]));
    }

    #[test]
    fn test_variables_skip_function_locals() {
        let code = r#"
MAX_SIZE: int = 10
a, b = 1, 2

class Config:
    debug = False

def run():
    local = 1
"#;
        let tree = parse(code);
        let mut extractor = PythonExtractor::default();
        let variables =
            extractor.extract_elements(Some(tree.root_node()), code, ElementKind::Variable);

        let names: Vec<_> = variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["MAX_SIZE", "a", "b", "debug"]);
        assert_eq!(variables[0].metadata_str("type"), Some("int"));
        assert!(variables[0].metadata_bool("isConstant"));
        assert!(variables.iter().all(|v| v.kind == ElementKind::Variable));
    }

    #[test]
    fn test_imports() {
        let code = "import os, sys as system\nfrom collections import OrderedDict, defaultdict\n";
        let tree = parse(code);
        let mut extractor = PythonExtractor::default();
        let imports =
            extractor.extract_elements(Some(tree.root_node()), code, ElementKind::Import);

        let names: Vec<_> = imports.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["os", "sys", "collections"]);
        assert_eq!(imports[1].metadata_str("alias"), Some("system"));
        assert_eq!(
            imports[2].metadata["importedNames"],
            serde_json::json!(["OrderedDict", "defaultdict"])
        );
        assert_eq!(imports[2].start_line, 2);
    }

    #[test]
    fn test_empty_and_absent_trees() {
        let mut extractor = PythonExtractor::default();
        let tree = parse("");
        assert!(extractor
            .extract_functions(Some(tree.root_node()), "")
            .is_empty());
        assert!(extractor
            .extract_functions(None::<tree_sitter::Node<'_>>, "")
            .is_empty());
    }

    #[test]
    fn test_synthetic_function_definition() {
        // function foo() { if (x) {} } expressed with Python node types
        let source = "function foo() { if (x) {} }";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "module", 0, source.len());
        let function = arena.add(Some(root), "function_definition", 0, source.len());
        arena.add_field(function, "name", "identifier", 9, 12);
        arena.add_field(function, "parameters", "parameters", 12, 14);
        let body = arena.add_field(function, "body", "block", 15, source.len());
        arena.add(Some(body), "if_statement", 17, 26);

        let mut extractor = PythonExtractor::default();
        let functions = extractor.extract_functions(arena.root(), source);

        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].name, "foo");
        assert_eq!((functions[0].start_line, functions[0].end_line), (1, 1));
        assert_eq!(functions[0].complexity_score, Some(2));
    }

    #[test]
    fn test_missing_name_is_skipped() {
        let source = "def (): pass";
        let mut arena = SyntaxArena::new(source);
        let root = arena.add(None, "module", 0, source.len());
        arena.add(Some(root), "function_definition", 0, source.len());

        let mut extractor = PythonExtractor::default();
        assert!(extractor.extract_functions(arena.root(), source).is_empty());
    }
}
