//! Stats client with silent fallback
//!
//! The dashboard never shows a fetch error: whatever goes wrong, the caller
//! gets a snapshot, either from the source or from [`fallback_stats`].

use async_trait::async_trait;

use super::error::FetchResult;
use super::types::{fallback_stats, StatsSnapshot};
use crate::timeline::Year;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Build the stats URL for a year
pub fn stats_endpoint(base: &str, year: Year) -> String {
    format!("{}/stats/{}", base.trim_end_matches('/'), year)
}

/// Something that can produce a stats snapshot for a year
///
/// Browser transports hold JS handles, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait StatsSource {
    async fn fetch(&self, year: Year) -> FetchResult<StatsSnapshot>;
}

/// Fetches stats from a source, substituting fallback values on failure
pub struct StatsClient<S> {
    source: S,
}

impl<S: StatsSource> StatsClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Stats for `year`; never fails
    pub async fn stats_for(&self, year: Year) -> StatsSnapshot {
        match self.source.fetch(year).await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(year = year.get(), error = %e, "API error, using mock data");
                fallback_stats(year)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FetchError;
    use std::cell::RefCell;

    struct FixedSource(StatsSnapshot);

    #[async_trait(?Send)]
    impl StatsSource for FixedSource {
        async fn fetch(&self, _year: Year) -> FetchResult<StatsSnapshot> {
            Ok(self.0)
        }
    }

    struct FailingSource {
        error: FetchError,
        calls: RefCell<Vec<Year>>,
    }

    #[async_trait(?Send)]
    impl StatsSource for FailingSource {
        async fn fetch(&self, year: Year) -> FetchResult<StatsSnapshot> {
            self.calls.borrow_mut().push(year);
            Err(self.error.clone())
        }
    }

    #[test]
    fn test_stats_endpoint() {
        assert_eq!(
            stats_endpoint(DEFAULT_API_BASE, Year(2026)),
            "http://localhost:8000/api/v1/stats/2026"
        );
        assert_eq!(
            stats_endpoint("http://example.test/api/v1/", Year(1976)),
            "http://example.test/api/v1/stats/1976"
        );
    }

    #[tokio::test]
    async fn test_source_result_passes_through() {
        let remote = StatsSnapshot {
            gdp: 420.0,
            population: 6.8,
            debt: 120.0,
            gini: Some(0.35),
        };
        let client = StatsClient::new(FixedSource(remote));

        assert_eq!(client.stats_for(Year(2000)).await, remote);
    }

    #[tokio::test]
    async fn test_network_failure_uses_fallback() {
        let client = StatsClient::new(FailingSource {
            error: FetchError::Network("connection refused".to_string()),
            calls: RefCell::new(Vec::new()),
        });

        let stats = client.stats_for(Year(2026)).await;
        assert_eq!(stats, fallback_stats(Year(2026)));
        assert_eq!(client.source().calls.borrow().as_slice(), &[Year(2026)]);
    }

    #[tokio::test]
    async fn test_status_and_decode_failures_use_fallback() {
        for error in [FetchError::Status(500), FetchError::Decode("eof".to_string())] {
            let client = StatsClient::new(FailingSource {
                error,
                calls: RefCell::new(Vec::new()),
            });
            assert_eq!(client.stats_for(Year(1990)).await, fallback_stats(Year(1990)));
        }
    }

    #[tokio::test]
    async fn test_no_retry_after_failure() {
        let client = StatsClient::new(FailingSource {
            error: FetchError::Status(404),
            calls: RefCell::new(Vec::new()),
        });

        client.stats_for(Year(2010)).await;
        assert_eq!(client.source().calls.borrow().len(), 1);
    }
}
