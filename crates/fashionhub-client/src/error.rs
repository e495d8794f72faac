use fashionhub_core::CoreError;
use thiserror::Error;

/// Errors returned by collaborator backends and the session layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend has no implementation for this operation.
    #[error("{operation} is not implemented")]
    Unimplemented { operation: &'static str },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The backend refused the request, e.g. a disallowed status change.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Draft or record failed domain validation.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("not signed in")]
    NotAuthenticated,

    /// Durable token storage could not be read or written.
    #[error("token storage error at {path}: {source}")]
    Storage {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("token storage at {path} is not valid JSON: {source}")]
    StorageFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    #[must_use]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, ClientError::Unimplemented { .. })
    }

    pub(crate) fn unimplemented(operation: &'static str) -> Self {
        ClientError::Unimplemented { operation }
    }

    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        ClientError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
