use thiserror::Error;

/// Raised when external text does not name a member of one of the closed domain sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown view '{0}' (expected home, services, compliance or contact)")]
    UnknownView(String),
    #[error("unknown service '{0}' (expected inspection, documentation or cinematography)")]
    UnknownService(String),
    #[error("unknown duration '{0}' (expected halfday, fullday or multi)")]
    UnknownDuration(String),
}
