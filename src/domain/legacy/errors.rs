//! Anti-corruption layer error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SubjectId, ValidationError};

/// Errors raised while publishing or syncing decisions.
#[derive(Debug, Clone, Error)]
pub enum AclError {
    #[error("No cached status for subject {0}")]
    SubjectNotFound(SubjectId),

    #[error("Mainframe transmission failed: {0}")]
    Transmission(String),

    #[error("Invalid sync state: {0}")]
    InvalidState(#[from] ValidationError),

    #[error("Event publication failed: {0}")]
    EventPublication(String),
}

impl AclError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AclError::SubjectNotFound(_) => ErrorCode::SubjectNotFound,
            AclError::Transmission(_) => ErrorCode::LegacyTransmissionFailed,
            AclError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            AclError::EventPublication(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for AclError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::LegacyTransmissionFailed => AclError::Transmission(err.message),
            _ => AclError::EventPublication(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_not_found_message_names_subject() {
        let err = AclError::SubjectNotFound(SubjectId::new("SUBJ-00042").unwrap());
        assert_eq!(err.to_string(), "No cached status for subject SUBJ-00042");
        assert_eq!(err.code(), ErrorCode::SubjectNotFound);
    }

    #[test]
    fn domain_transmission_error_maps_to_transmission() {
        let err: AclError =
            DomainError::new(ErrorCode::LegacyTransmissionFailed, "timeout").into();
        assert!(matches!(err, AclError::Transmission(msg) if msg == "timeout"));
    }
}
