use super::{AggregateCountriesUseCase, ExtractPublicAddressesUseCase, ResolveCountriesUseCase};
use query_atlas_domain::CountryAggregate;
use std::sync::Arc;
use tracing::debug;

/// Full pipeline: query log → public addresses → countries → report.
pub struct GetTrafficByCountryUseCase {
    extract: Arc<ExtractPublicAddressesUseCase>,
    resolve: Arc<ResolveCountriesUseCase>,
    aggregate: AggregateCountriesUseCase,
}

impl GetTrafficByCountryUseCase {
    pub fn new(
        extract: Arc<ExtractPublicAddressesUseCase>,
        resolve: Arc<ResolveCountriesUseCase>,
    ) -> Self {
        Self {
            extract,
            resolve,
            aggregate: AggregateCountriesUseCase::new(),
        }
    }

    pub async fn execute(&self) -> Vec<CountryAggregate> {
        let addresses = self.extract.execute().await;

        if addresses.is_empty() {
            debug!("No public addresses in query log");
            return Vec::new();
        }

        let resolved = self.resolve.execute(&addresses).await;
        self.aggregate.execute(&resolved)
    }
}
