pub mod config;
pub mod error;
pub mod signals;
pub mod telemetry;
