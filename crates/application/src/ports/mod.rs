mod geo_lookup_provider;
mod pacer;
mod query_log_source;

pub use geo_lookup_provider::GeoLookupProvider;
pub use pacer::Pacer;
pub use query_log_source::QueryLogSource;
