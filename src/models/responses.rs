use serde::{Deserialize, Serialize};
use crate::models::domain::{PieSlice, ScatterPoint};

/// Response for the pie chart endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieResponse {
    pub site: String,
    pub total: u64,
    pub slices: Vec<PieSlice>,
    pub figure: serde_json::Value,
}

/// Response for the scatter chart endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterResponse {
    pub site: String,
    pub low: f64,
    pub high: f64,
    pub points: Vec<ScatterPoint>,
    pub figure: serde_json::Value,
}

/// Dropdown entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownLayout {
    pub options: Vec<SiteOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderLayout {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    /// Initial handle positions
    pub value: [f64; 2],
}

/// Controls description for the dashboard page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub title: String,
    pub dropdown: DropdownLayout,
    pub slider: SliderLayout,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub records: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
