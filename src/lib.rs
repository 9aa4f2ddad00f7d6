pub mod access;
pub mod configuration;
pub mod domain;
pub mod generation_client;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod utils;
pub mod wizard;
