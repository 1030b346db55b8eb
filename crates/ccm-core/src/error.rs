//! Error types for the CCM API client.

use thiserror::Error;

use crate::preference::ConstraintType;

/// Main error type for CCM client operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CcmError {
    /// Resource not found.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound { resource_type: String, id: String },

    /// Resource already exists.
    #[error("Resource already exists: {resource_type} with id {id}")]
    AlreadyExists { resource_type: String, id: String },

    /// A required constraint parameter was not supplied.
    #[error("{constraint_type} requires {parameter}")]
    MissingParameter {
        constraint_type: ConstraintType,
        parameter: &'static str,
    },

    /// The profile may not be removed.
    #[error("Profile {0} is protected")]
    ProtectedProfile(String),

    /// Client configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure talking to the CCM server.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CcmError {
    /// Shorthand for a missing profile.
    pub fn profile_not_found(name: impl Into<String>) -> Self {
        CcmError::NotFound {
            resource_type: "Profile".to_string(),
            id: name.into(),
        }
    }

    /// Shorthand for a missing schedule.
    pub fn schedule_not_found(id: impl Into<String>) -> Self {
        CcmError::NotFound {
            resource_type: "Schedule".to_string(),
            id: id.into(),
        }
    }

    /// Returns true if the caller can carry on after this error.
    ///
    /// Profile-store refusals leave the store untouched; everything else
    /// signals a programming or environment problem.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CcmError::NotFound { resource_type, .. } => resource_type == "Profile",
            CcmError::AlreadyExists { .. } | CcmError::ProtectedProfile(_) => true,
            _ => false,
        }
    }
}

/// Convenience Result type for CCM operations.
pub type Result<T> = std::result::Result<T, CcmError>;

impl From<serde_json::Error> for CcmError {
    fn from(err: serde_json::Error) -> Self {
        CcmError::SerializationError(err.to_string())
    }
}
