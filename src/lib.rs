// Treescan Core - structural element extraction over tree-sitter syntax trees
//
// Callers parse; this crate walks the resulting tree and reports functions,
// classes, variables, imports and markup structure as `Element`s.

pub mod extractors;
pub mod language;
pub mod syntax;

pub use extractors::{
    Element, ElementKind, ExtractError, ExtractorConfig, ExtractorManager, LanguageExtractor,
    MarkupLanguage, SourceEncoding,
};
pub use syntax::{SyntaxArena, SyntaxNode};
