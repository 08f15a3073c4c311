//! HTTP API
//!
//! Browser transport for the stats endpoint.

pub mod client;

pub use client::HttpStatsSource;
