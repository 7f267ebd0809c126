//! Crate-level error type for the I/O plumbing
//!
//! The classification core is total and never returns these.

use thiserror::Error;

use crate::config::ConfigError;
use crate::report::ReportError;
use crate::sources::SourceError;

/// Result type alias for papers-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_with_context() {
        let err: Error = ConfigError::EmptyKeyword("academic").into();
        assert_eq!(
            err.to_string(),
            "Config error: Empty keyword in academic signal set"
        );

        let err: Error = SourceError::Parse("bad xml".to_string()).into();
        assert_eq!(err.to_string(), "Source error: Parse error: bad xml");
    }
}
