//! Front matter error types.

use thiserror::Error;

/// Structural problems in a file that is being edited.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrontMatterError {
    #[error("file does not start with front matter delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("file does not contain closing front matter delimiter '---'")]
    MissingClosingDelimiter,

    #[error("'{field}' not found in front matter")]
    MissingField {
        field: &'static str,
    },

    #[error("could not parse repo key from project_url: {url}")]
    UnparseableProjectUrl {
        url: String,
    },
}
