//! Contract error types for the knowledgebase service
//!
//! These errors are transport-agnostic and used for in-process communication.
//! Field-level validation failures are not errors: they are carried as
//! messages inside `SettingsStatus` and never abort a request.

/// Knowledgebase service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgebaseError {
    /// Article or settings record not found
    NotFound {
        /// Resource type (article, settings)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Validation error on a request parameter (not a settings field)
    Validation {
        /// Validation error message
        message: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for KnowledgebaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for KnowledgebaseError {}
