//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Adding an element requires a selected target section.
    #[error("no section selected")]
    NoSectionSelected,

    #[error("validation error: {0}")]
    Validation(#[from] pagecraft_model::ValidationError),
}
