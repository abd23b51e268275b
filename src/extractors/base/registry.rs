// Handler registries and node-type sets
//
// A plugin describes a language as data: which node types produce which
// element kind (handler tables), which node types may contain targets
// (container set) and which count as branch points (decision set). The
// traversal engine owns everything else.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use super::error::ExtractError;
use super::extractor::BaseExtractor;
use super::types::Element;
use crate::syntax::SyntaxNode;

/// What a handler produced for one node
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Single(Element),
    Many(Vec<Element>),
    /// Node matched structurally but does not describe a valid element
    Nothing,
}

impl Extracted {
    pub fn into_elements(self) -> Vec<Element> {
        match self {
            Extracted::Single(element) => vec![element],
            Extracted::Many(elements) => elements,
            Extracted::Nothing => Vec::new(),
        }
    }
}

impl From<Element> for Extracted {
    fn from(element: Element) -> Self {
        Extracted::Single(element)
    }
}

impl From<Vec<Element>> for Extracted {
    fn from(elements: Vec<Element>) -> Self {
        Extracted::Many(elements)
    }
}

impl From<Option<Element>> for Extracted {
    fn from(element: Option<Element>) -> Self {
        element.map_or(Extracted::Nothing, Extracted::Single)
    }
}

pub type HandlerResult = Result<Extracted, ExtractError>;

/// Extraction function for one node type
pub type Handler<N> = fn(&mut BaseExtractor, N) -> HandlerResult;

/// Node type → handler table for one element kind
pub struct HandlerRegistry<N> {
    handlers: HashMap<&'static str, Handler<N>>,
}

impl<N: SyntaxNode> HandlerRegistry<N> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Builder-style registration
    pub fn with(mut self, node_type: &'static str, handler: Handler<N>) -> Self {
        self.register(node_type, handler);
        self
    }

    pub fn register(&mut self, node_type: &'static str, handler: Handler<N>) {
        self.handlers.insert(node_type, handler);
    }

    pub fn get(&self, node_type: &str) -> Option<Handler<N>> {
        self.handlers.get(node_type).copied()
    }

    pub fn contains(&self, node_type: &str) -> bool {
        self.handlers.contains_key(node_type)
    }

    pub fn node_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<N: SyntaxNode> Default for HandlerRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Node types that may transitively contain targets without being targets
static DEFAULT_CONTAINER_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "program",
        "module",
        "source_file",
        "block",
        "statement_block",
        "compound_statement",
        "declaration_list",
        "class_body",
        "interface_body",
        "enum_body",
        "field_declaration_list",
        "export_statement",
        "decorated_definition",
        "expression_statement",
    ]
    .into_iter()
    .collect()
});

/// Node types counted as one branch point each
static DEFAULT_DECISION_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "if_statement",
        "for_statement",
        "for_in_statement",
        "while_statement",
        "do_statement",
        "case_statement",
        "switch_case",
        "catch_clause",
        "conditional_expression",
        "ternary_expression",
        "&&",
        "||",
        "and",
        "or",
    ]
    .into_iter()
    .collect()
});

/// A set of node type names, used both for container and decision types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTypeSet {
    types: HashSet<&'static str>,
}

pub type ContainerTypeSet = NodeTypeSet;
pub type DecisionKeywordSet = NodeTypeSet;

impl NodeTypeSet {
    pub fn empty() -> Self {
        Self {
            types: HashSet::new(),
        }
    }

    pub fn from_types(types: &[&'static str]) -> Self {
        Self {
            types: types.iter().copied().collect(),
        }
    }

    pub fn default_containers() -> Self {
        Self {
            types: DEFAULT_CONTAINER_TYPES.clone(),
        }
    }

    pub fn default_decisions() -> Self {
        Self {
            types: DEFAULT_DECISION_TYPES.clone(),
        }
    }

    /// Add language-specific types on top of the current set
    pub fn extended(mut self, types: &[&'static str]) -> Self {
        self.types.extend(types.iter().copied());
        self
    }

    pub fn contains(&self, node_type: &str) -> bool {
        self.types.contains(node_type)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ArenaNode;

    fn nothing(_: &mut BaseExtractor, _: ArenaNode<'_>) -> HandlerResult {
        Ok(Extracted::Nothing)
    }

    #[test]
    fn test_registry_lookup() {
        let registry: HandlerRegistry<ArenaNode<'_>> = HandlerRegistry::new()
            .with("function_definition", nothing)
            .with("lambda", nothing);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("lambda"));
        assert!(registry.get("class_definition").is_none());

        let mut types: Vec<_> = registry.node_types().collect();
        types.sort_unstable();
        assert_eq!(types, vec!["function_definition", "lambda"]);
    }

    #[test]
    fn test_sets_extend_defaults() {
        let containers = NodeTypeSet::default_containers().extended(&["impl_item"]);
        assert!(containers.contains("program"));
        assert!(containers.contains("impl_item"));
        assert!(!containers.contains("identifier"));

        let decisions = NodeTypeSet::from_types(&["if_expression"]);
        assert!(decisions.contains("if_expression"));
        assert!(!decisions.contains("if_statement"));
    }

    #[test]
    fn test_extracted_flattening() {
        assert!(Extracted::from(None::<Element>).into_elements().is_empty());
        assert_eq!(Extracted::Many(Vec::new()), Extracted::from(Vec::new()));
    }
}
