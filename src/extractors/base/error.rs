// Extraction errors
//
// Handlers report malformed nodes through `ExtractError`; the traversal engine
// logs them and moves on to the next node.

use std::any::Any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{node_type} node at line {line} has no `{field}` child")]
    MissingField {
        node_type: String,
        field: &'static str,
        line: u32,
    },

    #[error("handler for {node_type} failed: {message}")]
    Handler { node_type: String, message: String },

    #[error("unsupported language: '{0}'")]
    UnsupportedLanguage(String),
}

impl ExtractError {
    /// Turn a caught handler panic into an error that can be logged
    pub(crate) fn from_panic(node_type: &str, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "handler panicked".to_string()
        };

        ExtractError::Handler {
            node_type: node_type.to_string(),
            message,
        }
    }
}
