//! Error types for the dashboard worker
//!
//! Uses thiserror for ergonomic error definitions.
//! Every failure on the render path surfaces here instead of leaving a
//! half-written page behind.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request errors (connection refused, DNS, TLS...)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Stats endpoint answered with something other than 200
    #[error("Stats endpoint returned HTTP {0}")]
    UpstreamStatus(u16),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload parsed but held no records
    #[error("Stats payload contained no records")]
    EmptyPayload,

    /// `date` field was not a valid YYYYMMDD value
    #[error("Invalid report date: {0}")]
    InvalidDate(String),

    /// Worker runtime errors
    #[error("Worker error: {0}")]
    Worker(String),
}

impl DashboardError {
    /// HTTP status the worker should answer with when rendering fails
    pub fn status_code(&self) -> u16 {
        match self {
            DashboardError::Config(_) | DashboardError::Worker(_) => 500,
            _ => 502,
        }
    }

    /// Status the stats endpoint answered with, when that is why rendering failed
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            DashboardError::UpstreamStatus(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<worker::Error> for DashboardError {
    fn from(err: worker::Error) -> Self {
        DashboardError::Worker(err.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

impl From<DashboardError> for worker::Error {
    fn from(err: DashboardError) -> Self {
        worker::Error::RustError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::UpstreamStatus(503);
        assert_eq!(err.to_string(), "Stats endpoint returned HTTP 503");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Json(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DashboardError::UpstreamStatus(404).status_code(), 502);
        assert_eq!(DashboardError::EmptyPayload.status_code(), 502);
        assert_eq!(DashboardError::Config("x".into()).status_code(), 500);
    }

    #[test]
    fn test_upstream_status() {
        assert_eq!(DashboardError::UpstreamStatus(204).upstream_status(), Some(204));
        assert_eq!(DashboardError::EmptyPayload.upstream_status(), None);
        assert_eq!(DashboardError::Http("timeout".into()).upstream_status(), None);
    }
}
