use thiserror::Error;

pub type Result<T, E = ToolsError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ToolsError {
    #[error("HTTP client couldn't be created.")]
    CantCreateClient,
}
