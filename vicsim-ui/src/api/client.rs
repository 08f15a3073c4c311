//! HTTP API Client
//!
//! `gloo-net` implementation of the core [`StatsSource`] seam.

use async_trait::async_trait;
use gloo_net::http::Request;
use vicsim::{stats_endpoint, FetchError, FetchResult, StatsSnapshot, StatsSource, Year};

/// Fetches stats from `{base}/stats/{year}`
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    base: String,
}

impl HttpStatsSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl StatsSource for HttpStatsSource {
    async fn fetch(&self, year: Year) -> FetchResult<StatsSnapshot> {
        let response = Request::get(&stats_endpoint(&self.base, year))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<StatsSnapshot>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use vicsim::{fallback_stats, StatsClient};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Nothing listens on port 9; the request fails at the transport
    const UNREACHABLE_BASE: &str = "http://127.0.0.1:9/api/v1";

    #[wasm_bindgen_test]
    async fn test_unreachable_endpoint_is_network_error() {
        let source = HttpStatsSource::new(UNREACHABLE_BASE);
        let err = source.fetch(Year(2000)).await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[wasm_bindgen_test]
    async fn test_unreachable_endpoint_falls_back() {
        let client = StatsClient::new(HttpStatsSource::new(UNREACHABLE_BASE));
        assert_eq!(client.stats_for(Year(2026)).await, fallback_stats(Year(2026)));
    }
}
