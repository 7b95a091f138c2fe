//! src/lib.rs
pub mod configuration;
pub mod confirmation;
pub mod domain;
pub mod email_client;
pub mod error;
pub mod registration;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
