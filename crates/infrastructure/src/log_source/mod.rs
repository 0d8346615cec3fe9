pub mod adguard;

pub use adguard::AdGuardQueryLogClient;
