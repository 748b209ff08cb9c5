use crate::backend::error::BackendError;
use crate::membership::error::FlowError;
use crate::tools::error::ToolsError;
use dto::validation::FieldErrors;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("The form contains invalid fields [fields: {0:?}]")]
    Invalid(FieldErrors),
    #[error("An error has been encountered while executing requests onto the backend.")]
    Backend(#[from] BackendError),
    #[error("The renewal can't go on.")]
    Flow(#[from] FlowError),
    #[error("An error has occurred with the tools.")]
    Tools(#[from] ToolsError),
}
