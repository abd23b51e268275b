//! Language extractors
//!
//! Turns an already-parsed syntax tree plus its source text into structural
//! [`Element`]s. Parsing itself happens upstream.
//!
//! # Architecture
//!
//! - `base` - programming-language engine: source buffer, traversal, handler registries
//! - `markup` - markup-language engine: lazy pre-order walk, byte-range identity
//! - `plugin` - the `LanguageExtractor` contract language plugins implement
//! - `manager` - `ExtractorManager`, language-name dispatch
//! - Language modules (python, javascript, typescript, java, rust, go, markdown, html)

pub mod base;
pub mod manager;
pub mod markup;
pub mod plugin;

// Programming languages
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;
pub mod typescript;

// Markup languages
pub mod html;
pub mod markdown;

// Re-export the public API
pub use base::{BaseExtractor, Element, ElementKind, ExtractError, ExtractorConfig, SourceEncoding};
pub use manager::ExtractorManager;
pub use markup::{MarkupExtractor, MarkupLanguage};
pub use plugin::LanguageExtractor;
