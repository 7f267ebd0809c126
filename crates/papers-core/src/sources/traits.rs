//! Common types for source plugins

use thiserror::Error;

#[cfg(feature = "native")]
use crate::http::HttpError;

#[derive(Error, Debug)]
pub enum SourceError {
    #[cfg(feature = "native")]
    #[error("HTTP error: {0}")]
    Http(HttpError),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Rate limited")]
    RateLimit,
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

#[cfg(feature = "native")]
impl From<HttpError> for SourceError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::RateLimited => SourceError::RateLimit,
            other => SourceError::Http(other),
        }
    }
}

/// Request budget of a source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceMetadata {
    pub rate_limit_per_second: f32,
    /// Rate limit granted when an API key is supplied
    pub keyed_rate_limit_per_second: f32,
}
