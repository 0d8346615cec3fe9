//! Batch geolocation against ip-api.com.
//!
//! ```text
//! POST /batch?fields=status,countryCode,country,query
//! [{"query": "8.8.8.8"}, {"query": "1.1.1.1"}]
//!
//! [{"status":"success","countryCode":"US","country":"United States","query":"8.8.8.8"}, ...]
//! ```
//!
//! The free tier allows 45 requests per minute regardless of batch size, and
//! at most 100 queries per batch. Pacing is the caller's job.

use crate::http_client::{build_http_client, map_send_error, parse_base_url};
use async_trait::async_trait;
use query_atlas_application::ports::GeoLookupProvider;
use query_atlas_domain::config::GeolocationConfig;
use query_atlas_domain::{DomainError, GeoLookup, MAX_BATCH_SIZE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const BATCH_PATH: &str = "batch";
const BATCH_FIELDS: &str = "status,countryCode,country,query";

#[derive(Debug, Serialize)]
struct BatchQuery<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchAnswer {
    status: Option<String>,
    country_code: Option<String>,
    country: Option<String>,
    query: Option<String>,
}

impl From<BatchAnswer> for GeoLookup {
    fn from(answer: BatchAnswer) -> Self {
        GeoLookup {
            status: answer.status,
            country_code: answer.country_code,
            country: answer.country,
            query: answer.query,
        }
    }
}

pub struct IpApiBatchClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl IpApiBatchClient {
    pub fn new(config: &GeolocationConfig) -> Result<Self, DomainError> {
        Ok(Self {
            http_client: build_http_client(Duration::from_secs(config.timeout_secs))?,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self) -> Result<reqwest::Url, DomainError> {
        let mut base = parse_base_url(&self.base_url)?;
        // Url::join drops the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(BATCH_PATH)
            .map_err(|e| DomainError::InvalidUrl(format!("'{}': {}", self.base_url, e)))
    }
}

#[async_trait]
impl GeoLookupProvider for IpApiBatchClient {
    async fn lookup_batch(&self, addresses: &[String]) -> Result<Vec<GeoLookup>, DomainError> {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }
        if addresses.len() > MAX_BATCH_SIZE {
            return Err(DomainError::GeoLookupError(format!(
                "batch of {} exceeds the provider limit of {}",
                addresses.len(),
                MAX_BATCH_SIZE
            )));
        }

        let url = self.endpoint()?;
        let body: Vec<BatchQuery<'_>> = addresses
            .iter()
            .map(|address| BatchQuery { query: address })
            .collect();

        debug!(url = %url, size = addresses.len(), "Sending geolocation batch");

        let response = self
            .http_client
            .post(url.clone())
            .query(&[("fields", BATCH_FIELDS)])
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(&url, &e, DomainError::GeoLookupError))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::GeoLookupError(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainError::GeoLookupError(format!("read error for {}: {}", url, e)))?;

        let answers: Vec<BatchAnswer> = serde_json::from_str(&text).map_err(|e| {
            DomainError::InvalidResponse(format!("geolocation batch from {}: {}", url, e))
        })?;

        Ok(answers.into_iter().map(GeoLookup::from).collect())
    }
}
