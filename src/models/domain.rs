use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Wire value of the site selector meaning "no site filter"
pub const ALL_SITES: &str = "ALL";

/// Launch outcome, stored in the CSV as `class` (1 = success, 0 = failure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Numeric class used as the scatter y value
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

/// One row of the launch table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "launchSite")]
    pub site: String,
    #[serde(rename = "payloadMassKg")]
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    #[serde(rename = "boosterCategory")]
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(site: &str, payload_mass_kg: f64, outcome: Outcome, booster_category: &str) -> Self {
        Self {
            site: site.to_string(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.to_string(),
        }
    }
}

/// Observed payload extremes, used to seed the range slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Site selector value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a selector value; the literal `ALL` is the sentinel
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    #[inline]
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

/// Errors building a payload range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("payload range is inverted: low {low} > high {high}")]
    Inverted { low: f64, high: f64 },

    #[error("payload range bounds must be finite numbers")]
    NotFinite,
}

/// Inclusive payload mass range in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, RangeError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(RangeError::NotFinite);
        }
        if low > high {
            return Err(RangeError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Both bounds are inclusive
    #[inline]
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        Self {
            low: bounds.min,
            high: bounds.max,
        }
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Pie aggregation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// A chart with nothing to draw
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// One scatter point: x = payload, y = class, colour = booster category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    #[serde(rename = "payloadMassKg")]
    pub payload_mass_kg: f64,
    pub class: u8,
    #[serde(rename = "boosterCategory")]
    pub booster_category: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            class: record.outcome.class(),
            booster_category: record.booster_category.clone(),
        }
    }
}

/// Scatter filter result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
