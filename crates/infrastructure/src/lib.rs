//! Query Atlas Infrastructure Layer
pub mod geolocation;
pub mod http_client;
pub mod log_source;
pub mod system;
