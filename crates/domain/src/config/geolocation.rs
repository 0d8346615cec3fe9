use crate::geo::{BatchPolicy, DEFAULT_BATCH_PAUSE, MAX_BATCH_SIZE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeolocationConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Addresses per batch request (1..=100)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause between consecutive batch requests
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GeolocationConfig {
    pub fn batch_policy(&self) -> BatchPolicy {
        BatchPolicy::new(self.batch_size, Duration::from_millis(self.pause_ms))
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            batch_size: default_batch_size(),
            pause_ms: default_pause_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://ip-api.com/".to_string()
}

fn default_batch_size() -> usize {
    MAX_BATCH_SIZE
}

fn default_pause_ms() -> u64 {
    DEFAULT_BATCH_PAUSE.as_millis() as u64
}

fn default_timeout_secs() -> u64 {
    10
}
