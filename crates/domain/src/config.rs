pub mod errors;
pub mod geolocation;
pub mod log_source;
pub mod logging;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use geolocation::GeolocationConfig;
pub use log_source::LogSourceConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config, EnvOverrides};
pub use server::ServerConfig;
