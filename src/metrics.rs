//! Metric Cards
//!
//! View models for the header cards. Values arrive pre-formatted; a card
//! never computes anything from them.

use crate::stats::StatsSnapshot;
use crate::timeline::Year;

/// Placeholder shown while no snapshot has arrived
pub const MISSING_VALUE: &str = "---";

/// Accent palette of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricTone {
    #[default]
    Teal,
    Amber,
    Blue,
}

impl MetricTone {
    /// Class for the value text
    pub fn text_class(self) -> &'static str {
        match self {
            MetricTone::Teal => "text-neon-teal",
            MetricTone::Amber => "text-stress-amber",
            MetricTone::Blue => "text-blue-400",
        }
    }

    /// Class for the left accent border
    pub fn border_class(self) -> &'static str {
        match self {
            MetricTone::Teal => "border-neon-teal",
            MetricTone::Amber => "border-stress-amber",
            MetricTone::Blue => "border-blue-400",
        }
    }
}

/// Percentage change shown under a value
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    pub percent: f64,
    pub label: Option<String>,
}

impl Trend {
    pub fn new(percent: f64) -> Self {
        Self {
            percent,
            label: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Zero counts as a downturn
    pub fn is_positive(&self) -> bool {
        self.percent > 0.0
    }

    pub fn glyph(&self) -> &'static str {
        if self.is_positive() {
            "↗"
        } else {
            "↘"
        }
    }

    pub fn class(&self) -> &'static str {
        if self.is_positive() {
            "text-green-400"
        } else {
            "text-red-400"
        }
    }

    /// Magnitude text, e.g. `1.2%` or `2.4% YoY`
    pub fn text(&self) -> String {
        match &self.label {
            Some(label) => format!("{}% {}", self.percent.abs(), label),
            None => format!("{}%", self.percent.abs()),
        }
    }
}

/// Everything a metric card renders
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCardModel {
    pub label: String,
    pub value: String,
    pub tone: MetricTone,
    pub trend: Option<Trend>,
}

impl MetricCardModel {
    pub fn new(label: impl Into<String>, value: impl Into<String>, tone: MetricTone) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone,
            trend: None,
        }
    }

    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}

fn fixed(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// The four header cards for the current snapshot and year
pub fn headline_cards(stats: Option<&StatsSnapshot>, year: Year) -> Vec<MetricCardModel> {
    vec![
        MetricCardModel::new(
            "Total GSP (Billions)",
            format!("${}", fixed(stats.map(|s| s.gdp), 1)),
            MetricTone::Teal,
        )
        .trend(Trend::new(2.4)),
        MetricCardModel::new(
            "Population (Millions)",
            fixed(stats.map(|s| s.population), 2),
            MetricTone::Blue,
        ),
        MetricCardModel::new(
            "State Debt",
            format!("${}B", fixed(stats.map(|s| s.debt), 1)),
            MetricTone::Amber,
        )
        .trend(Trend::new(-1.2)),
        MetricCardModel::new("Sim Year", year.to_string(), MetricTone::Teal),
    ]
}
