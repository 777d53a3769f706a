//! Centralized error classification

use crate::backend::error::BackendError;
use crate::logging::LogLevel;
use crate::profile::ProfileError;

/// Maps backend failures to the level they are logged at
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &BackendError) -> LogLevel {
        match error {
            // Rate limiting - low priority
            BackendError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            BackendError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Authentication errors - critical
            BackendError::Http { status, .. } if *status == 401 => LogLevel::Error,
            BackendError::Http { status, .. } if *status == 403 => LogLevel::Error,
            BackendError::NoSession => LogLevel::Error,

            // Data errors
            BackendError::MultipleRows(_) => LogLevel::Error,
            BackendError::Json(_) => LogLevel::Error,
            BackendError::NoRows => LogLevel::Warn,

            // Network issues - usually temporary
            BackendError::Reqwest(_) => LogLevel::Warn,

            BackendError::Http { .. } => LogLevel::Warn,
        }
    }

    pub fn classify_profile_error(&self, error: &ProfileError) -> LogLevel {
        self.classify_error(error.backend_error())
    }
}
