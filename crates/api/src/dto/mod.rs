pub mod geo_cache;
pub mod health;
pub mod traffic;

pub use geo_cache::GeoCacheStatsResponse;
pub use health::HealthResponse;
pub use traffic::CountryTrafficResponse;
