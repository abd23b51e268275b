// Go Extractor
//
// Functions and methods (receiver type as class name), type specs (struct
// fields as children), import specs and the package clause. Doc comments are
// the `//` run directly above a declaration; for grouped or single type specs
// the comment sits above the enclosing `type_declaration`.

mod functions;
mod types;

use serde_json::json;

use crate::extractors::base::tree_methods::strip_string_delimiters;
use crate::extractors::base::{
    BaseExtractor, ContainerTypeSet, DecisionKeywordSet, DocstringStyle, ElementKind,
    ElementOptions, Extracted, ExtractorConfig, HandlerRegistry, HandlerResult,
};
use crate::extractors::plugin::LanguageExtractor;
use crate::syntax::SyntaxNode;

const CONTAINER_TYPES: &[&str] = &["type_declaration", "import_declaration", "import_spec_list"];

const DECISION_TYPES: &[&str] = &[
    "if_statement",
    "for_statement",
    "expression_case",
    "type_case",
    "communication_case",
    "&&",
    "||",
];

pub struct GoExtractor {
    base: BaseExtractor,
}

impl GoExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let base = BaseExtractor::new("go", config)
            .with_container_types(ContainerTypeSet::default_containers().extended(CONTAINER_TYPES))
            .with_decision_types(DecisionKeywordSet::from_types(DECISION_TYPES))
            .with_docstring_style(DocstringStyle::PrecedingComment {
                comment_kinds: &["comment"],
                markers: &["//", "/*"],
                passthrough_kinds: &[],
                wrapper_kinds: &["type_declaration"],
            });
        Self { base }
    }
}

impl Default for GoExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl LanguageExtractor for GoExtractor {
    fn base(&self) -> &BaseExtractor {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseExtractor {
        &mut self.base
    }

    fn function_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        HandlerRegistry::new()
            .with("function_declaration", functions::extract_function)
            .with("method_declaration", functions::extract_function)
    }

    fn class_handlers<N: SyntaxNode>(&self) -> HandlerRegistry<N> {
        HandlerRegistry::new()
            .with("type_spec", types::extract_type_spec)
            .with("type_alias", types::extract_type_spec)
    }

    fn handlers_for<N: SyntaxNode>(&self, kind: ElementKind) -> HandlerRegistry<N> {
        match kind {
            ElementKind::Function => self.function_handlers(),
            ElementKind::Class => self.class_handlers(),
            ElementKind::Import => HandlerRegistry::new().with("import_spec", extract_import),
            ElementKind::Package => HandlerRegistry::new().with("package_clause", extract_package),
            _ => HandlerRegistry::new(),
        }
    }
}

fn extract_import<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let path = base.required_field_text(&node, "path")?;
    let path = strip_string_delimiters(&path);

    let mut options = ElementOptions::default();
    // Named, dot (`.`) and blank (`_`) imports
    if let Some(alias) = base.field_text(&node, "name") {
        options = options.with_metadata("alias", json!(alias));
    }

    Ok(base
        .create_leaf_element(&node, path, ElementKind::Import, options)
        .into())
}

fn extract_package<N: SyntaxNode>(base: &mut BaseExtractor, node: N) -> HandlerResult {
    let Some(identifier) = node.first_child_of_kind("package_identifier") else {
        return Ok(Extracted::Nothing);
    };
    let name = base.get_node_text(&identifier);
    Ok(base
        .create_leaf_element(&node, name, ElementKind::Package, ElementOptions::default())
        .into())
}
