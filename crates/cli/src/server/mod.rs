pub mod web;

pub use web::{shutdown_token, start_web_server};
