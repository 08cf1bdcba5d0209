pub mod config;
pub mod dashboard;
pub mod error;
pub mod profile;
pub mod rules;
pub mod telemetry;
