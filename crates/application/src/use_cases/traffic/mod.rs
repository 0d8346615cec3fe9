pub mod aggregate_countries;
pub mod extract_addresses;
pub mod get_traffic_by_country;
pub mod resolve_countries;

pub use aggregate_countries::AggregateCountriesUseCase;
pub use extract_addresses::ExtractPublicAddressesUseCase;
pub use get_traffic_by_country::GetTrafficByCountryUseCase;
pub use resolve_countries::ResolveCountriesUseCase;
