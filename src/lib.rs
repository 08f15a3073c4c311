//! # Vicsim
//!
//! Core of the regional economic simulation dashboard: everything the browser
//! UI (`vicsim-ui`) renders, kept free of DOM types so it can be tested natively.
//!
//! ## Modules
//!
//! - [`timeline`]: simulation years and playback wrap-around
//! - [`stats`]: stats snapshot, fallback formula and the data client
//! - [`scenario`]: ordered slider parameters
//! - [`metrics`]: header card view models
//! - [`map`]: basemap tile math and the placeholder region picker
//! - [`dashboard`]: the shell's view state and action dispatch
//! - [`config`] / [`theme`]: build-time configuration and style tokens
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vicsim::{Action, DashboardConfig, DashboardState, Effect, Year};
//!
//! let config = DashboardConfig::load_default();
//! let mut state = DashboardState::from_config(&config);
//!
//! for effect in state.dispatch(Action::SetYear(Year(2000))) {
//!     if let Effect::Fetch(ticket) = effect {
//!         println!("fetch stats for {}", ticket.year);
//!     }
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod map;
pub mod metrics;
pub mod scenario;
pub mod stats;
pub mod theme;
pub mod timeline;

pub use config::{
    generate_default_config, ApiConfig, ConfigError, DashboardConfig, LoggingConfig, MapConfig,
    ScenarioConfig, TimelineConfig,
};

pub use dashboard::{Action, Applied, DashboardState, Effect, FetchTicket};

pub use map::{
    layer_label, project, tile_for, tile_url, MapView, PlacedTile, RegionId, TileCoord,
    PLACEHOLDER_REGION, TILE_SIZE,
};

pub use metrics::{headline_cards, MetricCardModel, MetricTone, Trend, MISSING_VALUE};

pub use scenario::{
    display_label, parse_slider_value, ParamError, ScenarioParam, ScenarioParams, PARAM_MAX,
    PARAM_MIN,
};

pub use stats::{
    fallback_stats, stats_endpoint, FetchError, FetchResult, StatsClient, StatsSnapshot,
    StatsSource, DEFAULT_API_BASE,
};

pub use theme::Theme;

pub use timeline::{Year, YearRange};
