//! Configuration System
//!
//! Build-time dashboard configuration. The TOML in `dashboard.toml` is embedded
//! into the binary; there are no runtime files and no environment overrides.

use serde::Deserialize;

use crate::scenario::{ScenarioParam, ScenarioParams, PARAM_MAX};
use crate::stats::DEFAULT_API_BASE;
use crate::theme::Theme;
use crate::timeline::{Year, YearRange};

/// Embedded configuration source
const BUILTIN_CONFIG: &str = include_str!("../dashboard.toml");

/// Highest zoom level the tile provider serves
const MAX_ZOOM: u8 = 19;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub timeline: TimelineConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub scenario: ScenarioConfig,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Stats endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Timeline bounds and playback speed
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_min_year")]
    pub min_year: i32,

    #[serde(default = "default_max_year")]
    pub max_year: i32,

    #[serde(default = "default_initial_year")]
    pub initial_year: i32,

    #[serde(default = "default_tick_ms")]
    pub tick_ms: u32,
}

fn default_min_year() -> i32 {
    1976
}

fn default_max_year() -> i32 {
    2026
}

fn default_initial_year() -> i32 {
    2026
}

fn default_tick_ms() -> u32 {
    500
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            max_year: default_max_year(),
            initial_year: default_initial_year(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl TimelineConfig {
    pub fn range(&self) -> YearRange {
        YearRange::new(self.min_year, self.max_year)
    }

    pub fn initial_year(&self) -> Year {
        Year(self.initial_year)
    }
}

/// Basemap configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    #[serde(default = "default_center_lon")]
    pub center_lon: f64,

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_subdomains")]
    pub subdomains: Vec<String>,

    #[serde(default = "default_attribution")]
    pub attribution: String,

    #[serde(default = "default_attribution_url")]
    pub attribution_url: String,

    #[serde(default = "default_highlight_metric")]
    pub highlight_metric: String,

    #[serde(default = "default_tile_radius_x")]
    pub tile_radius_x: u32,

    #[serde(default = "default_tile_radius_y")]
    pub tile_radius_y: u32,
}

fn default_center_lat() -> f64 {
    -37.8136 // Melbourne
}

fn default_center_lon() -> f64 {
    144.9631
}

fn default_zoom() -> u8 {
    8
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_subdomains() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

fn default_attribution() -> String {
    "© OpenStreetMap contributors".to_string()
}

fn default_attribution_url() -> String {
    "https://www.openstreetmap.org/copyright".to_string()
}

fn default_highlight_metric() -> String {
    "gdp".to_string()
}

fn default_tile_radius_x() -> u32 {
    3
}

fn default_tile_radius_y() -> u32 {
    2
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            subdomains: default_subdomains(),
            attribution: default_attribution(),
            attribution_url: default_attribution_url(),
            highlight_metric: default_highlight_metric(),
            tile_radius_x: default_tile_radius_x(),
            tile_radius_y: default_tile_radius_y(),
        }
    }
}

/// Initial scenario slider values
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_parameters")]
    pub parameters: Vec<ScenarioParam>,
}

fn default_parameters() -> Vec<ScenarioParam> {
    ScenarioParams::standard().iter().cloned().collect()
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            parameters: default_parameters(),
        }
    }
}

impl ScenarioConfig {
    pub fn params(&self) -> ScenarioParams {
        ScenarioParams::from(self.parameters.clone())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into this build
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }

    /// The builtin configuration, or defaults if it is unusable
    pub fn load_default() -> Self {
        match Self::builtin() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load builtin config: {}", e);
                Self::default()
            }
        }
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timeline = &self.timeline;
        if timeline.min_year > timeline.max_year {
            return Err(ConfigError::Invalid(format!(
                "timeline.min_year ({}) is after timeline.max_year ({})",
                timeline.min_year, timeline.max_year
            )));
        }
        if !timeline.range().contains(timeline.initial_year()) {
            return Err(ConfigError::Invalid(format!(
                "timeline.initial_year ({}) is outside {}..={}",
                timeline.initial_year, timeline.min_year, timeline.max_year
            )));
        }
        if timeline.tick_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeline.tick_ms must be greater than zero".to_string(),
            ));
        }
        if self.map.zoom > MAX_ZOOM {
            return Err(ConfigError::Invalid(format!(
                "map.zoom ({}) exceeds {}",
                self.map.zoom, MAX_ZOOM
            )));
        }
        if let Some(param) = self.scenario.parameters.iter().find(|p| p.value > PARAM_MAX) {
            return Err(ConfigError::Invalid(format!(
                "scenario parameter {} ({}) exceeds {}",
                param.key, param.value, PARAM_MAX
            )));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// The embedded configuration document
pub fn generate_default_config() -> &'static str {
    BUILTIN_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_matches_defaults() {
        let config = DashboardConfig::builtin().unwrap();
        let defaults = DashboardConfig::default();

        assert_eq!(config.api.base_url, defaults.api.base_url);
        assert_eq!(config.timeline.range(), defaults.timeline.range());
        assert_eq!(config.timeline.initial_year(), Year(2026));
        assert_eq!(config.timeline.tick_ms, 500);
        assert_eq!(config.map.zoom, 8);
        assert_eq!(config.map.center_lat, defaults.map.center_lat);
        assert_eq!(config.map.subdomains, defaults.map.subdomains);
        assert_eq!(config.scenario.params(), ScenarioParams::standard());
        assert_eq!(config.theme, Theme::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.timeline.range(), YearRange::new(1976, 2026));
        assert_eq!(config.scenario.params().len(), 4);
    }

    #[test]
    fn test_partial_section() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [timeline]
            tick_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.timeline.tick_ms, 250);
        assert_eq!(config.timeline.min_year, 1976);
    }

    #[test]
    fn test_scenario_order_preserved() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [[scenario.parameters]]
            key = "zoning"
            value = 10

            [[scenario.parameters]]
            key = "amenity"
            value = 90
            "#,
        )
        .unwrap();
        let keys: Vec<_> = config.scenario.params().keys().map(String::from).collect();
        assert_eq!(keys, vec!["zoning", "amenity"]);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = DashboardConfig::from_toml_str(
            r#"
            [timeline]
            min_year = 2030
            max_year = 2000
            initial_year = 2010
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_initial_year_outside_bounds() {
        let err = DashboardConfig::from_toml_str("[timeline]\ninitial_year = 1900\n").unwrap_err();
        assert!(err.to_string().contains("initial_year"));
    }

    #[test]
    fn test_rejects_zero_tick() {
        assert!(DashboardConfig::from_toml_str("[timeline]\ntick_ms = 0\n").is_err());
    }

    #[test]
    fn test_rejects_param_over_max() {
        let err = DashboardConfig::from_toml_str(
            "[[scenario.parameters]]\nkey = \"migration\"\nvalue = 150\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("migration"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = DashboardConfig::from_toml_str("[timeline\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
