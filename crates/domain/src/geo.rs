use std::collections::BTreeMap;
use std::time::Duration;

/// Provider status value that marks a usable answer.
pub const GEO_STATUS_SUCCESS: &str = "success";

/// Largest batch the geolocation provider accepts in one request.
pub const MAX_BATCH_SIZE: usize = 100;

/// Pause between batches that keeps us under 45 requests per minute.
pub const DEFAULT_BATCH_PAUSE: Duration = Duration::from_millis(1500);

/// How uncached addresses are split into requests and paced.
///
/// Only constructible through [`BatchPolicy::new`], so `batch_size` is always
/// within `1..=MAX_BATCH_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    batch_size: usize,
    pause_interval: Duration,
}

impl BatchPolicy {
    /// `batch_size` is clamped to `1..=MAX_BATCH_SIZE`.
    pub fn new(batch_size: usize, pause_interval: Duration) -> Self {
        Self {
            batch_size: batch_size.clamp(1, MAX_BATCH_SIZE),
            pause_interval,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn pause_interval(&self) -> Duration {
        self.pause_interval
    }
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self::new(MAX_BATCH_SIZE, DEFAULT_BATCH_PAUSE)
    }
}

/// Country attribution of a single address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeoRecord {
    pub address: String,
    pub country_code: String,
    pub country_name: String,
}

impl GeoRecord {
    pub fn new(address: &str, country_code: &str, country_name: &str) -> Self {
        Self {
            address: address.to_string(),
            country_code: country_code.to_string(),
            country_name: country_name.to_string(),
        }
    }
}

/// One answer from a batch geolocation request, as the provider reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoLookup {
    pub status: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    pub query: Option<String>,
}

impl GeoLookup {
    pub fn success(query: &str, country_code: &str, country: &str) -> Self {
        Self {
            status: Some(GEO_STATUS_SUCCESS.to_string()),
            country_code: Some(country_code.to_string()),
            country: Some(country.to_string()),
            query: Some(query.to_string()),
        }
    }

    pub fn failed(query: &str) -> Self {
        Self {
            status: Some("fail".to_string()),
            query: Some(query.to_string()),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(GEO_STATUS_SUCCESS)
    }

    /// Converts a successful answer into a record.
    ///
    /// Returns `None` unless the status is `success` and both the country code
    /// and the queried address are non-empty. A missing or empty country name
    /// falls back to the country code.
    pub fn into_record(self) -> Option<GeoRecord> {
        if !self.is_success() {
            return None;
        }

        let country_code = self.country_code.filter(|code| !code.is_empty())?;
        let address = self.query.filter(|query| !query.is_empty())?;
        let country_name = self
            .country
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| country_code.clone());

        Some(GeoRecord {
            address,
            country_code,
            country_name,
        })
    }
}

/// Resolved addresses of a single pipeline run, keyed by address.
pub type ResolvedAddresses = BTreeMap<String, GeoRecord>;
