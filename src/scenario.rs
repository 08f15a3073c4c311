//! Scenario Parameters
//!
//! Slider-backed simulation variables. They are local view state only:
//! nothing reads them to fetch stats or draw the map.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest slider value
pub const PARAM_MIN: u8 = 0;
/// Highest slider value
pub const PARAM_MAX: u8 = 100;

/// A single named parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioParam {
    pub key: String,
    pub value: u8,
}

/// Insertion-ordered mapping of parameter name to slider value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScenarioParams {
    entries: Vec<ScenarioParam>,
}

impl ScenarioParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock parameter set, in display order
    pub fn standard() -> Self {
        let defaults: [(&str, u8); 4] = [
            ("inflation", 3),
            ("migration", 50),
            ("housing_supply", 30),
            ("infra_investment", 60),
        ];
        defaults.into_iter().collect()
    }

    /// Append a parameter, or replace its value if the key exists
    pub fn insert(&mut self, key: impl Into<String>, value: u8) {
        let key = key.into();
        let value = value.min(PARAM_MAX);
        match self.entries.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(ScenarioParam { key, value }),
        }
    }

    /// Update an existing parameter, leaving every other key untouched
    pub fn set(&mut self, key: &str, value: u8) -> Result<(), ParamError> {
        let param = self
            .entries
            .iter_mut()
            .find(|p| p.key == key)
            .ok_or_else(|| ParamError::UnknownParameter(key.to_string()))?;
        param.value = value.min(PARAM_MAX);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<u8> {
        self.entries.iter().find(|p| p.key == key).map(|p| p.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioParam> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u8)> for ScenarioParams {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl From<Vec<ScenarioParam>> for ScenarioParams {
    fn from(entries: Vec<ScenarioParam>) -> Self {
        entries.into_iter().map(|p| (p.key, p.value)).collect()
    }
}

/// Parse raw slider text into a parameter value.
///
/// Returns `None` for text that is not an integer; out-of-range numbers are clamped.
pub fn parse_slider_value(raw: &str) -> Option<u8> {
    let value: i64 = raw.trim().parse().ok()?;
    Some(value.clamp(i64::from(PARAM_MIN), i64::from(PARAM_MAX)) as u8)
}

/// Human-readable label for a parameter key (`housing_supply` -> `Housing Supply`)
pub fn display_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scenario parameter errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("Unknown scenario parameter: {0}")]
    UnknownParameter(String),
}
