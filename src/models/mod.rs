//! Request-scoped models and server configuration.

pub mod auth;
pub mod config;
