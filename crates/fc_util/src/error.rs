//! Errors from the fallible namespace operations.

use fc_value::Category;

/// Errors from `parse_json` and `mix_with`.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// Input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The template engine rejected the serialized configuration.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The value has no JSON text form (`undefined` or a function at top level).
    #[error("cannot encode a {category} value as JSON")]
    Unencodable { category: Category },
}

/// Errors from rendering a `${...}` template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    EmptyPlaceholder { offset: usize },

    #[error("unknown filter `{filter}`")]
    UnknownFilter { filter: String },
}
