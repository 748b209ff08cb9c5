use thiserror::Error;

pub type Result<T, E = BackendError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum BackendError {
    #[error("The backend URL is malformed.")]
    InvalidUrl,
    #[error("The connection to the backend failed.")]
    ConnectionFailed,
    #[error("The credentials have been refused by the backend.")]
    WrongCredentials,
    #[error("The backend session is missing or has expired.")]
    Unauthorized,
    #[error("The requested resource has not been found.")]
    NotFound,
    #[error("A renewal is already scheduled for this student [message: {0}]")]
    ScheduledRenewalConflict(String),
    #[error("The backend refused the request [message: {0}]")]
    Rejected(String),
    #[error("The backend answered with an unexpected status [status: {0}]")]
    UnexpectedStatus(u16),
    #[error("The backend answer can't be read.")]
    MalformedResponse,
}
