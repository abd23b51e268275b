//! TypeScript extractor
//!
//! Builds on the JavaScript handlers: the grammar shares every JavaScript
//! node type and adds signatures, abstract classes, interfaces, enums and
//! type aliases on top. Works for both the `typescript` and `tsx` grammars.

pub(crate) mod interfaces;

use crate::extractors::base::{
    BaseExtractor, ContainerTypeSet, DecisionKeywordSet, ElementKind, ExtractorConfig,
    HandlerRegistry,
};
use crate::extractors::javascript::{self, functions, imports, types};
use crate::extractors::plugin::LanguageExtractor;
use crate::syntax::SyntaxNode;

const CONTAINER_TYPES: &[&str] = &[
    "abstract_class_declaration",
    "public_field_definition",
    "internal_module",
    "ambient_declaration",
];

pub struct TypeScriptExtractor {
    base: BaseExtractor,
}

impl TypeScriptExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let containers = ContainerTypeSet::default_containers()
            .extended(javascript::CONTAINER_TYPES)
            .extended(CONTAINER_TYPES);
        let base = BaseExtractor::new("typescript", config)
            .with_container_types(containers)
            .with_decision_types(
                DecisionKeywordSet::default_decisions().extended(javascript::EXTRA_DECISION_TYPES),
            )
            .with_docstring_style(javascript::JSDOC);
        Self { base }
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl LanguageExtractor for TypeScriptExtractor {
    fn base(&self) -> &BaseExtractor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExtractor {
        &mut self.base
    }

    fn function_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        javascript::function_registry()
            .with("function_signature", functions::extract_function)
            .with("abstract_method_signature", functions::extract_method)
    }

    fn class_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        javascript::class_registry()
            .with("abstract_class_declaration", types::extract_class)
            .with("interface_declaration", interfaces::extract_interface)
            .with("enum_declaration", interfaces::extract_enum)
            .with("type_alias_declaration", interfaces::extract_type_alias)
    }

    fn handlers_for<N: SyntaxNode>(&self, kind: ElementKind) -> HandlerRegistry<N> {
        match kind {
            ElementKind::Function => self.function_handlers(),
            ElementKind::Class => self.class_handlers(),
            ElementKind::Import => {
                HandlerRegistry::new().with("import_statement", imports::extract_import)
            }
            _ => HandlerRegistry::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tree_sitter::{Parser, Tree};

    const SAMPLE: &str = r#"/** Shape contract. */
export interface Shape extends Named, Sized {
  area(): number;
  readonly id: string;
}

enum Color { Red, Green = 2 }

type Id = string | number;

export abstract class Base implements Shape {
  private count: number = 0;
  abstract area(): number;
  public describe(prefix: string): string {
    return prefix ?? "none";
  }
}

declare function greet(name: string): void;
"#;

    fn parse(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_functions_and_signatures() {
        let tree = parse(SAMPLE);
        let mut extractor = TypeScriptExtractor::default();
        let functions = extractor.extract_functions(Some(tree.root_node()), SAMPLE);

        let names: Vec<_> = functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["area", "describe", "greet"]);

        let describe = &functions[1];
        assert_eq!(describe.metadata_str("visibility"), Some("public"));
        assert_eq!(describe.metadata_str("returnType"), Some("string"));
        assert_eq!(describe.metadata_str("className"), Some("Base"));
        assert_eq!(describe.metadata["parameters"], json!(["prefix: string"]));
        // ??
        assert_eq!(describe.complexity_score, Some(2));
        assert_eq!(describe.language, "typescript");

        assert_eq!(functions[2].metadata_str("returnType"), Some("void"));
    }

    #[test]
    fn test_class_like_declarations() {
        let tree = parse(SAMPLE);
        let mut extractor = TypeScriptExtractor::default();
        let classes = extractor.extract_classes(Some(tree.root_node()), SAMPLE);

        let names: Vec<_> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Shape", "Color", "Id", "Base"]);

        let shape = &classes[0];
        assert_eq!(shape.metadata_str("classType"), Some("interface"));
        assert_eq!(shape.docstring.as_deref(), Some("/** Shape contract. */"));
        assert_eq!(shape.metadata["superclasses"], json!(["Named", "Sized"]));
        assert_eq!(shape.metadata["members"], json!(["area", "id"]));
        assert!(shape.metadata_bool("isExported"));

        let color = &classes[1];
        let members: Vec<_> = color.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(members, vec!["Red", "Green"]);
        assert_eq!(color.children[1].metadata_str("value"), Some("2"));

        assert_eq!(classes[2].metadata_str("aliasedType"), Some("string | number"));

        let base = &classes[3];
        assert_eq!(base.metadata_str("classType"), Some("abstract class"));
        assert_eq!(base.metadata["interfaces"], json!(["Shape"]));
        assert_eq!((base.start_line, base.end_line), (11, 17));
    }

    #[test]
    fn test_type_only_import() {
        let code = "import type { Props } from './props';\n";
        let tree = parse(code);
        let mut extractor = TypeScriptExtractor::default();
        let imports =
            extractor.extract_elements(Some(tree.root_node()), code, ElementKind::Import);

        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].name, "./props");
        assert!(imports[0].metadata_bool("isTypeOnly"));
        assert_eq!(imports[0].metadata["importedNames"], json!(["Props"]));
    }
}
