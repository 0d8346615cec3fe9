use async_trait::async_trait;
use query_atlas_application::ports::Pacer;
use std::time::Duration;

pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, interval: Duration) {
        if !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }
}
