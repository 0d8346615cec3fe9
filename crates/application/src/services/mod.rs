pub mod geo_cache;

pub use geo_cache::{GeoCache, GeoCacheStats};
