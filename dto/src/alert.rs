use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A message for the user, displayed as a toast by the frontend.
#[derive(Debug, Serialize, Deserialize, Getters, Eq, PartialEq, Clone)]
pub struct Alert {
    level: AlertLevel,
    message: String,
}

impl Alert {
    pub fn new(level: AlertLevel, message: String) -> Self {
        Self { level, message }
    }

    pub fn success(message: &str) -> Self {
        Self::new(AlertLevel::Success, message.to_owned())
    }

    pub fn error(message: &str) -> Self {
        Self::new(AlertLevel::Error, message.to_owned())
    }
}
