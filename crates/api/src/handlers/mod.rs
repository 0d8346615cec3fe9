pub mod geo_cache;
pub mod health;
pub mod traffic;

pub use geo_cache::get_geo_cache_stats;
pub use health::health_check;
pub use traffic::get_traffic_by_country;
