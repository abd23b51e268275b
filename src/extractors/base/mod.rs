// Base extraction engine
//
// Layered pieces every language plugin is built on:
// - types.rs: Element, ElementKind, CommonMetadata, ExtractorConfig
// - error.rs: ExtractError
// - source.rs: SourceBuffer and its (start_byte, end_byte) text cache
// - metadata.rs: line range / raw text shared with the markup engine
// - registry.rs: handler tables, container and decision type sets
// - extractor.rs: BaseExtractor and the iterative traversal engine
// - tree_methods.rs: complexity, docstrings, node helpers
// - creation_methods.rs: element construction

pub mod creation_methods;
pub mod error;
pub mod extractor;
pub mod metadata;
pub mod registry;
pub mod source;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use error::ExtractError;
pub use extractor::BaseExtractor;
pub use registry::{
    ContainerTypeSet, DecisionKeywordSet, Extracted, Handler, HandlerRegistry, HandlerResult,
    NodeTypeSet,
};
pub use source::{SliceStats, SourceBuffer};
pub use tree_methods::{count_complexity, DocstringStyle};
pub use types::{
    CommonMetadata, Element, ElementKind, ElementOptions, ExtractorConfig, SourceEncoding,
};
