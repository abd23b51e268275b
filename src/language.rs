//! Language Support - Shared tree-sitter language configuration
//!
//! Grammar lookup and file-extension detection for the supported languages.
//! The extractors never parse; callers use these to build the trees they hand in.

use anyhow::Result;
use std::path::Path;

/// Language names accepted by [`get_tree_sitter_language`] and the extractor manager
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "rust",
    "python",
    "javascript",
    "jsx",
    "typescript",
    "tsx",
    "java",
    "go",
    "html",
    "markdown",
];

/// Get tree-sitter language parser for a given language name
///
/// # Supported Languages
///
/// **Programming**: Rust, Python, JavaScript (JSX), TypeScript (TSX), Java, Go
/// **Markup**: HTML, Markdown (block grammar)
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "rust" => Ok(tree_sitter_rust::LANGUAGE.into()),
        "python" => Ok(tree_sitter_python::LANGUAGE.into()),
        "javascript" | "jsx" => Ok(tree_sitter_javascript::LANGUAGE.into()),
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        "go" => Ok(tree_sitter_go::LANGUAGE.into()),
        "html" => Ok(tree_sitter_html::LANGUAGE.into()),
        "markdown" => Ok(tree_sitter_md::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: {}",
            language,
            SUPPORTED_LANGUAGES.join(", ")
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "rs" => Some("rust"),
        "py" | "pyi" => Some("python"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("jsx"),
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        "java" => Some("java"),
        "go" => Some("go"),
        "html" | "htm" => Some("html"),
        "md" | "markdown" => Some("markdown"),
        _ => None,
    }
}

/// Detect language from a file path's extension
pub fn detect_language_from_path(path: impl AsRef<Path>) -> Option<&'static str> {
    let extension = path.as_ref().extension()?.to_str()?;
    detect_language_from_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_language_has_a_grammar() {
        for language in SUPPORTED_LANGUAGES {
            assert!(
                get_tree_sitter_language(language).is_ok(),
                "missing grammar for {}",
                language
            );
        }
    }

    #[test]
    fn test_unsupported_language_lists_alternatives() {
        let err = get_tree_sitter_language("cobol").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("cobol"));
        assert!(message.contains("python"));
    }

    #[test]
    fn test_extension_detection() {
        assert_eq!(detect_language_from_extension("rs"), Some("rust"));
        assert_eq!(detect_language_from_extension("tsx"), Some("tsx"));
        assert_eq!(detect_language_from_extension("md"), Some("markdown"));
        assert_eq!(detect_language_from_extension("exe"), None);

        assert_eq!(detect_language_from_path("src/app/main.py"), Some("python"));
        assert_eq!(detect_language_from_path("Makefile"), None);
    }
}
