#![allow(unused_imports)]
mod http_server_mock;

pub use http_server_mock::*;
