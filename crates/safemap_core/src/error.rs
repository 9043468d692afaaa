use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured error shared by the storage backends and report validation.
///
/// The store adapter and the incident operations never surface these to the UI;
/// they log and fall back. Validation errors are returned to the shell so it can
/// keep the report form open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn storage_read(key: &str, details: impl Into<String>) -> Self {
        Self::new(
            "STORAGE_READ_FAILED",
            format!("Failed to read storage slot {key}"),
        )
        .with_details(details)
    }

    /// Write failures are retryable: the next save carries the full current state.
    pub fn storage_write(key: &str, details: impl Into<String>) -> Self {
        Self::new(
            "STORAGE_WRITE_FAILED",
            format!("Failed to write storage slot {key}"),
        )
        .with_details(details)
        .with_retryable(true)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}
