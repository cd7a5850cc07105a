//! Error types for report handlers and their host collaborator.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a host query.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Root error type for report handlers.
#[derive(Error, Debug)]
pub enum Error {
    /// The report logic misused the document model.
    #[error("Document construction failed: {0}")]
    Document(#[from] reportkit_core::Error),

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Failures reported by the trading-platform host.
///
/// Handlers catch these at the boundary and continue with whatever data
/// they already have.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("Upstream data unavailable: {0}")]
    UpstreamDataUnavailable(String),

    #[error("No conversion rate {from}->{to}: {message}")]
    ConversionFailed {
        from: String,
        to: String,
        message: String,
    },
}

impl HostError {
    /// Creates an UpstreamDataUnavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::UpstreamDataUnavailable(message.into())
    }

    /// Creates a ConversionFailed error.
    pub fn conversion_failed(
        from: impl Into<String>,
        to: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ConversionFailed {
            from: from.into(),
            to: to.into(),
            message: message.into(),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
