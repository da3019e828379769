pub mod account;
pub mod config;
pub mod controller;
pub mod errors;
pub mod routes;
pub mod telemetry;
pub mod types;
pub mod version;
