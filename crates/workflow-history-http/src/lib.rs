//! Workflow History HTTP: `reqwest` transport for the workflow API.

pub mod client;
pub mod config;

pub use client::HttpHistoryClient;
pub use config::HttpClientConfig;
