//! Query Atlas Domain Layer
pub mod address_set;
pub mod config;
pub mod country;
pub mod errors;
pub mod geo;
pub mod query_filters;
pub mod query_log;

pub use address_set::{AddressSet, Admission};
pub use config::{CliOverrides, Config, ConfigError, EnvOverrides, LogFormat};
pub use country::{aggregate_by_country, CountryAggregate};
pub use errors::DomainError;
pub use geo::{BatchPolicy, GeoLookup, GeoRecord, ResolvedAddresses, MAX_BATCH_SIZE};
pub use query_filters::PrivateIpFilter;
pub use query_log::{AnswerRecord, LogEntry, Question, QueryLogPage};
