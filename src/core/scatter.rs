use crate::core::filters::{matches_payload, matches_site};
use crate::models::{LaunchRecord, PayloadRange, ScatterChart, ScatterPoint, SiteSelection};

/// Filter the table by site and payload range and project the survivors
///
/// Points keep table order; nothing is aggregated, sorted or deduplicated.
pub fn scatter_chart(
    records: &[LaunchRecord],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterChart {
    let points = records
        .iter()
        .filter(|r| matches_site(r, selection))
        .filter(|r| matches_payload(r, range))
        .map(ScatterPoint::from)
        .collect();

    ScatterChart {
        title: format!("Scatter Plot for Payload vs. Launch Outcome at {}", selection),
        points,
    }
}
