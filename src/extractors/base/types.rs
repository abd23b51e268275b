// Base Extractor Types
//
// Data structures shared by the programming and markup engines: the Element
// result shape, element kinds, common metadata and extractor configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Text encoding the parser was fed. Node byte offsets are relative to this
/// encoding, so the source buffer re-encodes the text before slicing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceEncoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8", alias = "UTF-8")]
    Utf8,
    #[serde(rename = "utf-16le", alias = "utf-16", alias = "UTF-16LE")]
    Utf16Le,
    #[serde(rename = "utf-16be", alias = "UTF-16BE")]
    Utf16Be,
}

impl SourceEncoding {
    /// Parse an encoding label such as `"utf-8"` or `"UTF-16LE"`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Some(SourceEncoding::Utf8),
            "utf-16" | "utf-16le" | "utf16" | "utf16le" => Some(SourceEncoding::Utf16Le),
            "utf-16be" | "utf16be" => Some(SourceEncoding::Utf16Be),
            _ => None,
        }
    }

    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            SourceEncoding::Utf8 => text.as_bytes().to_vec(),
            SourceEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            SourceEncoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        }
    }

    /// Strict decode; `None` when the slice does not fall on character boundaries
    pub(crate) fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            SourceEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
            SourceEncoding::Utf16Le | SourceEncoding::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return None;
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| match self {
                        SourceEncoding::Utf16Be => u16::from_be_bytes([pair[0], pair[1]]),
                        _ => u16::from_le_bytes([pair[0], pair[1]]),
                    })
                    .collect();
                String::from_utf16(&units).ok()
            }
        }
    }
}

impl std::fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceEncoding::Utf8 => write!(f, "utf-8"),
            SourceEncoding::Utf16Le => write!(f, "utf-16le"),
            SourceEncoding::Utf16Be => write!(f, "utf-16be"),
        }
    }
}

/// Configuration for an extractor instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Nodes deeper than this are pruned together with their subtree
    pub max_depth: usize,
    /// Encoding the parser consumed; byte offsets are interpreted against it
    pub encoding: SourceEncoding,
    /// Whether handlers attach docstrings to elements
    pub include_docstrings: bool,
    /// Whether programming-language elements carry a complexity score
    pub include_complexity: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            encoding: SourceEncoding::Utf8,
            include_docstrings: true,
            include_complexity: true,
        }
    }
}

impl ExtractorConfig {
    /// Load a configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Element kinds produced by the engines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Function,
    Class,
    Variable,
    Import,
    Package,
    Heading,
    CodeBlock,
    MarkupElement,
}

impl ElementKind {
    /// Convert from string representation
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "function" => Some(ElementKind::Function),
            "class" => Some(ElementKind::Class),
            "variable" => Some(ElementKind::Variable),
            "import" => Some(ElementKind::Import),
            "package" => Some(ElementKind::Package),
            "heading" => Some(ElementKind::Heading),
            "code_block" => Some(ElementKind::CodeBlock),
            "markup_element" => Some(ElementKind::MarkupElement),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Function => write!(f, "function"),
            ElementKind::Class => write!(f, "class"),
            ElementKind::Variable => write!(f, "variable"),
            ElementKind::Import => write!(f, "import"),
            ElementKind::Package => write!(f, "package"),
            ElementKind::Heading => write!(f, "heading"),
            ElementKind::CodeBlock => write!(f, "code_block"),
            ElementKind::MarkupElement => write!(f, "markup_element"),
        }
    }
}

/// A structural code element (function, class, heading, ...) extracted from a tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    /// Element name as it appears in source
    pub name: String,
    pub kind: ElementKind,
    /// Start line number (1-based, inclusive)
    pub start_line: u32,
    /// End line number (1-based, inclusive)
    pub end_line: u32,
    /// Exact source text covered by the node
    pub raw_text: String,
    pub docstring: Option<String>,
    /// Decision-point complexity; `None` for markup elements
    pub complexity_score: Option<u32>,
    pub language: String,
    /// Language-specific details (parameters, modifiers, superclasses, ...)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
    /// Member elements such as struct fields or enum constants
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Whether this element's line range encloses `other`.
    ///
    /// Nested definitions are reported as siblings; callers recover nesting
    /// from line ranges with this.
    pub fn contains(&self, other: &Element) -> bool {
        self.start_line <= other.start_line
            && self.end_line >= other.end_line
            && (self.start_line, self.end_line) != (other.start_line, other.end_line)
    }

    pub fn line_count(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// String metadata value, if present
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|value| value.as_str())
    }

    pub fn metadata_bool(&self, key: &str) -> bool {
        self.metadata
            .get(key)
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }
}

/// Fields every handler gets for free: line range, raw text, docstring, complexity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonMetadata {
    pub start_line: u32,
    pub end_line: u32,
    pub raw_text: String,
    pub docstring: Option<String>,
    pub complexity: Option<u32>,
}

/// Options for creating elements - handler-specific fields on top of CommonMetadata
#[derive(Debug, Clone, Default)]
pub struct ElementOptions {
    pub metadata: HashMap<String, serde_json::Value>,
    pub children: Vec<Element>,
    /// Overrides the docstring found through the extractor's docstring style
    pub docstring: Option<String>,
}

impl ElementOptions {
    pub fn with_metadata(mut self, key: &str, value: serde_json::Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }
}
