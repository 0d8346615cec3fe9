use crate::http_client::{build_http_client, map_send_error, parse_base_url};
use async_trait::async_trait;
use query_atlas_application::ports::QueryLogSource;
use query_atlas_domain::config::LogSourceConfig;
use query_atlas_domain::{DomainError, LogEntry, QueryLogPage};
use std::time::Duration;
use tracing::debug;

const QUERY_LOG_PATH: &str = "/control/querylog";

/// Reads the query log of an AdGuard Home instance over its control API.
pub struct AdGuardQueryLogClient {
    http_client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl AdGuardQueryLogClient {
    pub fn new(config: &LogSourceConfig) -> Result<Self, DomainError> {
        Ok(Self {
            http_client: build_http_client(Duration::from_secs(config.timeout_secs))?,
            base_url: config.base_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn endpoint(&self) -> Result<reqwest::Url, DomainError> {
        parse_base_url(&self.base_url)?
            .join(QUERY_LOG_PATH)
            .map_err(|e| DomainError::InvalidUrl(format!("'{}': {}", self.base_url, e)))
    }
}

#[async_trait]
impl QueryLogSource for AdGuardQueryLogClient {
    async fn fetch_recent(&self) -> Result<Vec<LogEntry>, DomainError> {
        let url = self.endpoint()?;

        debug!(url = %url, "Fetching query log");

        let response = self
            .http_client
            .get(url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| map_send_error(&url, &e, DomainError::LogSourceError))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::LogSourceError(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::LogSourceError(format!("read error for {}: {}", url, e)))?;

        let page: QueryLogPage = serde_json::from_str(&body)
            .map_err(|e| DomainError::InvalidResponse(format!("query log from {}: {}", url, e)))?;

        debug!(
            entries = page.data.len(),
            oldest = page.oldest.as_deref().unwrap_or(""),
            "Query log fetched"
        );

        Ok(page.data)
    }
}
