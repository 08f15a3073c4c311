//! Stats Data Client
//!
//! Year-indexed statistics for the dashboard header.
//!
//! # Components
//!
//! - **Snapshot**: the four-number record shown in the metric cards
//! - **Fallback**: deterministic stand-in values derived from the year
//! - **Client**: fetches from a [`StatsSource`], falling back on any failure

mod client;
mod error;
mod types;

pub use client::{stats_endpoint, StatsClient, StatsSource, DEFAULT_API_BASE};
pub use error::{FetchError, FetchResult};
pub use types::{fallback_stats, StatsSnapshot};
