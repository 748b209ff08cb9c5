use crate::tools::env_args::retrieve_arg_value;
use derive_getters::Getters;

const BACKEND_URL_ARG: &str = "--backend-url";
const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

#[derive(Debug, Getters, Clone, PartialEq, Eq)]
pub struct BackendConfiguration {
    base_url: String,
}

impl BackendConfiguration {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Read the backend URL from `--backend-url`, defaulting to a local backend.
    pub fn from_args() -> Self {
        Self::new(retrieve_arg_value(BACKEND_URL_ARG).unwrap_or(DEFAULT_BACKEND_URL.to_owned()))
    }
}
