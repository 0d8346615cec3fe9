pub mod geo_cache;
pub mod traffic;

// Re-export use cases
pub use geo_cache::GetGeoCacheStatsUseCase;
pub use traffic::{
    AggregateCountriesUseCase, ExtractPublicAddressesUseCase, GetTrafficByCountryUseCase,
    ResolveCountriesUseCase,
};
