use std::fmt;

use crate::merit::PermissionType;

/// Custom error type for Merit operations
#[derive(Debug)]
pub enum MeritError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// Merit status is not one of the known values
    InvalidMeritStatus(String),
    /// Permission type is not one of the known values
    InvalidPermission(String),
    /// Search query is shorter than the allowed minimum
    SearchQueryTooShort { query: String, min: usize },
    /// An org-scoped permission was requested without any org IDs
    MissingOrgIds(PermissionType),
    /// App ID, secret or org ID could not be resolved
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Failed to read a local file
    Io(String),
}

impl MeritError {
    /// Whether this error was raised by input validation (no request was sent)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MeritError::InvalidMeritStatus(_)
                | MeritError::InvalidPermission(_)
                | MeritError::SearchQueryTooShort { .. }
                | MeritError::MissingOrgIds(_)
        )
    }
}

impl fmt::Display for MeritError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeritError::Http(e) => write!(f, "HTTP request failed: {}", e),
            MeritError::InvalidMeritStatus(status) => write!(
                f,
                "Merit status ({}) is not valid. Valid statuses are: {}",
                status,
                crate::merit::MeritStatus::names().join(", ")
            ),
            MeritError::InvalidPermission(permission) => write!(
                f,
                "Permission ({}) is not valid. Valid permissions are: {}",
                permission,
                PermissionType::names().join(", ")
            ),
            MeritError::SearchQueryTooShort { query, min } => write!(
                f,
                "Search query '{}' is too short: must be at least {} characters",
                query, min
            ),
            MeritError::MissingOrgIds(permission) => write!(
                f,
                "Permission {} requires at least one org ID",
                permission
            ),
            MeritError::Credentials(msg) => write!(f, "{}", msg),
            MeritError::Json(msg) => write!(f, "JSON error: {}", msg),
            MeritError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for MeritError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeritError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MeritError {
    fn from(err: reqwest::Error) -> Self {
        MeritError::Http(err)
    }
}

impl From<serde_json::Error> for MeritError {
    fn from(err: serde_json::Error) -> Self {
        MeritError::Json(err.to_string())
    }
}

impl From<std::io::Error> for MeritError {
    fn from(err: std::io::Error) -> Self {
        MeritError::Io(err.to_string())
    }
}

/// Result type alias for Merit operations
pub type Result<T> = std::result::Result<T, MeritError>;
