//! Management use cases for CRUD-style operations.
//!
//! These use cases keep callers thin: they load records through the storage
//! port, run the domain rules, and persist the outcome.

mod player;

use roster_domain::DomainError;

use crate::infrastructure::ports::RepoError;

pub use player::PlayerManagement;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<DomainError> for ManagementError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Parse(msg) => Self::InvalidArgument(msg),
        }
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub player: PlayerManagement,
}

impl ManagementUseCases {
    pub fn new(player: PlayerManagement) -> Self {
        Self { player }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_becomes_invalid_argument() {
        let err: ManagementError = DomainError::validation("name must be 1-12 characters").into();
        assert!(matches!(err, ManagementError::InvalidArgument(ref msg) if msg.contains("name")));
    }

    #[test]
    fn domain_parse_becomes_invalid_argument() {
        let err: ManagementError = DomainError::parse("Unknown race: GOBLIN").into();
        assert!(matches!(err, ManagementError::InvalidArgument(_)));
    }
}
