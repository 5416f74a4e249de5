//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::NodeId;

/// Domain errors represent business rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("item not found: {0}")]
    ItemNotFound(NodeId),

    #[error("parent not found: {0}")]
    ParentNotFound(NodeId),

    /// Requesting file content of a folder counts as not-found, the same
    /// way the transport layer reports a missing item.
    #[error("not a file: {0}")]
    NotAFile(NodeId),

    #[error("link not found: {0}")]
    LinkNotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Whether this error maps to a "not found" response at the boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::ItemNotFound(_)
                | DomainError::ParentNotFound(_)
                | DomainError::NotAFile(_)
                | DomainError::LinkNotFound(_)
        )
    }
}
