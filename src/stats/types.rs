//! Stats snapshot and its fallback formula

use serde::{Deserialize, Serialize};

use crate::timeline::Year;

/// Aggregated statistics for a single simulation year
///
/// `gini` is carried when present but nothing downstream displays it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Gross state product, billions
    pub gdp: f64,
    /// Population, millions
    pub population: f64,
    /// State debt, billions
    pub debt: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gini: Option<f64>,
}

impl StatsSnapshot {
    /// Parse an endpoint response body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Stand-in statistics used whenever the endpoint cannot be reached
pub fn fallback_stats(year: Year) -> StatsSnapshot {
    let since_2000 = f64::from(year.get() - 2000);
    let since_2010 = f64::from(year.get() - 2010);

    StatsSnapshot {
        gdp: 400.0 + since_2000 * 10.0,
        population: 6.5 + since_2000 * 0.1,
        debt: 50.0 + since_2010 * 5.0,
        gini: Some(0.3 + since_2000 * 0.001),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::YearRange;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fallback_2026() {
        let stats = fallback_stats(Year(2026));
        assert!(approx(stats.gdp, 660.0));
        assert!(approx(stats.population, 9.1));
        assert!(approx(stats.debt, 130.0));
        assert!(approx(stats.gini.unwrap(), 0.326));
    }

    #[test]
    fn test_fallback_lower_bound() {
        let stats = fallback_stats(Year(1976));
        assert!(approx(stats.gdp, 160.0));
        assert!(approx(stats.population, 4.1));
        assert!(approx(stats.debt, -120.0));
        assert!(approx(stats.gini.unwrap(), 0.276));
    }

    #[test]
    fn test_fallback_formula_across_range() {
        for year in YearRange::default().iter() {
            let y = f64::from(year.get());
            let stats = fallback_stats(year);
            assert!(approx(stats.gdp, 400.0 + (y - 2000.0) * 10.0));
            assert!(approx(stats.population, 6.5 + (y - 2000.0) * 0.1));
            assert!(approx(stats.debt, 50.0 + (y - 2010.0) * 5.0));
            assert!(approx(stats.gini.unwrap(), 0.3 + (y - 2000.0) * 0.001));
        }
    }

    #[test]
    fn test_parse_without_gini() {
        let stats = StatsSnapshot::from_json(r#"{"gdp": 420.0, "population": 6.8, "debt": 120}"#)
            .unwrap();
        assert_eq!(stats.gdp, 420.0);
        assert_eq!(stats.debt, 120.0);
        assert_eq!(stats.gini, None);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let stats = StatsSnapshot::from_json(
            r#"{"gdp": 1, "population": 2, "debt": 3, "gini": 0.33, "source": "db"}"#,
        )
        .unwrap();
        assert_eq!(stats.gini, Some(0.33));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        assert!(StatsSnapshot::from_json(r#"{"gdp": 1, "population": 2}"#).is_err());
    }
}
