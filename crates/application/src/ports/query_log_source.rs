use async_trait::async_trait;
use query_atlas_domain::{DomainError, LogEntry};

#[async_trait]
pub trait QueryLogSource: Send + Sync {
    /// Fetch the most recent window of the resolver's query log.
    async fn fetch_recent(&self) -> Result<Vec<LogEntry>, DomainError>;
}
