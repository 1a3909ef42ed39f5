pub mod configuration;
pub mod domain;
pub mod email_relay;
pub mod form;
pub mod notifications;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
