//! Simulation Timeline
//!
//! The simulation year and the fixed window the scrubber moves through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A simulation year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub i32);

impl Year {
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Year(value)
    }
}

/// Inclusive year bounds of the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: Year,
    pub max: Year,
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(1976, 2026)
    }
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min: Year(min),
            max: Year(max),
        }
    }

    /// Whether `year` lies within the bounds
    pub fn contains(&self, year: Year) -> bool {
        year >= self.min && year <= self.max
    }

    /// Pin `year` into the bounds, the way a range input does
    pub fn clamp(&self, year: Year) -> Year {
        year.max(self.min).min(self.max)
    }

    /// Next year during playback.
    ///
    /// Anything at or past the upper bound wraps back to the lower bound.
    pub fn advance(&self, year: Year) -> Year {
        if year >= self.max {
            self.min
        } else {
            Year(year.0 + 1)
        }
    }

    /// Number of years covered, both ends included
    pub fn len(&self) -> usize {
        (self.max.0 - self.min.0 + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse raw scrubber text, clamping into the bounds.
    ///
    /// Returns `None` for text that is not an integer.
    pub fn parse_input(&self, raw: &str) -> Option<Year> {
        raw.trim().parse::<i32>().ok().map(|y| self.clamp(Year(y)))
    }

    /// Iterate every year in the range
    pub fn iter(&self) -> impl Iterator<Item = Year> {
        (self.min.0..=self.max.0).map(Year)
    }
}
