use query_atlas_domain::DomainError;
use std::time::Duration;

pub const USER_AGENT: &str = concat!("Query-Atlas/", env!("CARGO_PKG_VERSION"));

pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| DomainError::ConfigError(format!("failed to build HTTP client: {}", e)))
}

pub fn parse_base_url(base_url: &str) -> Result<reqwest::Url, DomainError> {
    reqwest::Url::parse(base_url)
        .map_err(|e| DomainError::InvalidUrl(format!("'{}': {}", base_url, e)))
}

/// Timeouts become [`DomainError::UpstreamTimeout`] so the logs tell a slow
/// upstream apart from an unreachable one. Everything else is passed to `wrap`.
pub fn map_send_error(
    url: &reqwest::Url,
    e: &reqwest::Error,
    wrap: fn(String) -> DomainError,
) -> DomainError {
    if e.is_timeout() {
        DomainError::UpstreamTimeout(url.to_string())
    } else if e.is_connect() {
        wrap(format!("cannot connect to {}: {}", url, e))
    } else {
        wrap(format!("request to {} failed: {}", url, e))
    }
}
