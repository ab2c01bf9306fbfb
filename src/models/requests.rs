use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::ALL_SITES;

/// Query for the pie chart endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PieQuery {
    #[validate(length(min = 1))]
    #[serde(default = "default_site")]
    pub site: String,
}

/// Query for the scatter chart endpoint
///
/// Missing bounds fall back to the dataset's payload bounds.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScatterQuery {
    #[validate(length(min = 1))]
    #[serde(default = "default_site")]
    pub site: String,
    #[validate(range(min = 0.0))]
    pub low: Option<f64>,
    #[validate(range(min = 0.0))]
    pub high: Option<f64>,
}

fn default_site() -> String {
    ALL_SITES.to_string()
}
