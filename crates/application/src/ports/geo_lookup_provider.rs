use async_trait::async_trait;
use query_atlas_domain::{DomainError, GeoLookup};

#[async_trait]
pub trait GeoLookupProvider: Send + Sync {
    /// One batch request. Callers keep `addresses` within the provider's
    /// batch ceiling; each call counts once against its rate limit.
    async fn lookup_batch(&self, addresses: &[String]) -> Result<Vec<GeoLookup>, DomainError>;
}
