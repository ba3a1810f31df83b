#[cfg(feature = "server")]
pub mod config;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod auth;

#[cfg(feature = "server")]
pub mod rate_limit;

// Backend-as-a-service access
#[cfg(feature = "server")]
pub mod backend;

#[cfg(feature = "server")]
pub mod repo;

#[cfg(feature = "server")]
pub mod service;
