//! Host-level error types.
//!
//! Validation failures and precondition violations never surface here: the
//! former are reported inline per field, the latter are no-op outcomes. These
//! errors cover the things a host must show the user: settings I/O, client
//! construction and malformed drafts.

use thiserror::Error;

use folio_client::ClientError;
use folio_model::ModelError;

/// Errors raised by the editing core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudioError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to load settings.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // DRAFTS
    // =========================================================================
    /// A draft could not be addressed or converted.
    #[error(transparent)]
    Draft(#[from] ModelError),

    // =========================================================================
    // PERSISTENCE
    // =========================================================================
    /// The persistence client failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl StudioError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsLoad { .. } => {
                Some("Fix or delete the settings file to fall back to defaults.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Draft(ModelError::UnknownField { .. }) => {
                Some("Check the field name against the editor's field list.")
            }
            Self::Draft(_) => Some("Separate tags with commas and leave no tag empty."),
            Self::Client(err) if err.is_retryable() => Some("Try again in a moment."),
            Self::Client(_) => Some("Check the API base URL in the settings."),
        }
    }

    /// Get the error category for display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SettingsLoad { .. } | Self::SettingsSave { .. } => ErrorCategory::Settings,
            Self::Draft(_) => ErrorCategory::Draft,
            Self::Client(_) => ErrorCategory::Persistence,
        }
    }

    /// Create a settings load error from any error source.
    pub fn settings_load(err: impl std::fmt::Display) -> Self {
        Self::SettingsLoad {
            reason: err.to_string(),
        }
    }

    /// Create a settings save error from any error source.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }
}

/// Error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Settings file errors.
    Settings,
    /// Draft addressing or conversion errors.
    Draft,
    /// Persistence API errors.
    Persistence,
}

impl ErrorCategory {
    /// Get a human-readable label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Draft => "Draft",
            Self::Persistence => "Persistence",
        }
    }
}

/// Result type alias for studio operations.
pub type Result<T> = std::result::Result<T, StudioError>;
