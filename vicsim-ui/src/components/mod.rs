//! UI Components
//!
//! Presentational Leptos components. Each one renders props and reports
//! user input through callbacks; none of them owns dashboard state.

pub mod map_surface;
pub mod metric_card;
pub mod scenario_panel;
pub mod timeline;

pub use map_surface::MapSurface;
pub use metric_card::{HeadlineCards, MetricCard};
pub use scenario_panel::ScenarioPanel;
pub use timeline::Timeline;
