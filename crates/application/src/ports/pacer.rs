use async_trait::async_trait;
use std::time::Duration;

/// Time source used to space out rate-limited requests.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, interval: Duration);
}
