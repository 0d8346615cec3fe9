use query_atlas_domain::{aggregate_by_country, CountryAggregate, ResolvedAddresses};
use tracing::debug;

#[derive(Default)]
pub struct AggregateCountriesUseCase;

impl AggregateCountriesUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, resolved: &ResolvedAddresses) -> Vec<CountryAggregate> {
        let report = aggregate_by_country(resolved);
        debug!(
            addresses = resolved.len(),
            countries = report.len(),
            "Aggregated addresses by country"
        );
        report
    }
}
