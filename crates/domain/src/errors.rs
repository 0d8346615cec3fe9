use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Query log fetch failed: {0}")]
    LogSourceError(String),

    #[error("Geolocation lookup failed: {0}")]
    GeoLookupError(String),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("Upstream request timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
