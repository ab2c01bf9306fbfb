use std::collections::HashMap;

use crate::core::filters::{is_success, matches_site};
use crate::models::{LaunchRecord, PieChart, PieSlice, SiteSelection};

pub const SUCCESS_LABEL: &str = "Success";
pub const FAILURE_LABEL: &str = "Failure";

/// Aggregate the table into pie slices for the selected site
///
/// - `ALL`: successful launches grouped by site, one slice per site with at
///   least one success, in order of first appearance.
/// - a concrete site: exactly two slices, `Success` then `Failure`, summing
///   to the number of records at that site. An unknown site yields two zero
///   slices, i.e. an empty chart.
pub fn pie_chart(records: &[LaunchRecord], selection: &SiteSelection) -> PieChart {
    match selection {
        SiteSelection::All => PieChart {
            title: "Total Success Launches By all sites".to_string(),
            slices: successes_by_site(records),
        },
        SiteSelection::Site(site) => PieChart {
            title: format!("Total Success Rate at {}", site),
            slices: outcome_split(records, selection),
        },
    }
}

fn successes_by_site(records: &[LaunchRecord]) -> Vec<PieSlice> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut slices: Vec<PieSlice> = Vec::new();

    for record in records.iter().filter(|r| is_success(r)) {
        let slot = *index.entry(record.site.as_str()).or_insert_with(|| {
            slices.push(PieSlice {
                label: record.site.clone(),
                value: 0,
            });
            slices.len() - 1
        });
        slices[slot].value += 1;
    }

    slices
}

fn outcome_split(records: &[LaunchRecord], selection: &SiteSelection) -> Vec<PieSlice> {
    let (success, failure) = records
        .iter()
        .filter(|r| matches_site(r, selection))
        .fold((0u64, 0u64), |(s, f), r| {
            if is_success(r) {
                (s + 1, f)
            } else {
                (s, f + 1)
            }
        });

    vec![
        PieSlice {
            label: SUCCESS_LABEL.to_string(),
            value: success,
        },
        PieSlice {
            label: FAILURE_LABEL.to_string(),
            value: failure,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn table() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Success, "v1.1"),
            LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 4700.0, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS SLC-40", 3600.0, Outcome::Failure, "B4"),
        ]
    }

    #[test]
    fn test_all_sites_groups_successes() {
        let chart = pie_chart(&table(), &SiteSelection::All);

        assert_eq!(chart.title, "Total Success Launches By all sites");
        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        // First appearance among successes; CCAFS SLC-40 has none
        assert_eq!(labels, vec!["VAFB SLC-4E", "CCAFS LC-40", "KSC LC-39A"]);
        let values: Vec<u64> = chart.slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1, 2, 1]);
        assert_eq!(chart.total(), 4);
    }

    #[test]
    fn test_single_site_split() {
        let chart = pie_chart(&table(), &SiteSelection::parse("CCAFS LC-40"));

        assert_eq!(chart.title, "Total Success Rate at CCAFS LC-40");
        assert_eq!(
            chart.slices,
            vec![
                PieSlice { label: "Success".to_string(), value: 2 },
                PieSlice { label: "Failure".to_string(), value: 1 },
            ]
        );
    }

    #[test]
    fn test_site_without_successes() {
        let chart = pie_chart(&table(), &SiteSelection::parse("CCAFS SLC-40"));

        assert_eq!(chart.slices[0].value, 0);
        assert_eq!(chart.slices[1].value, 1);
        assert!(!chart.is_empty());
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let chart = pie_chart(&table(), &SiteSelection::parse("Boca Chica"));

        assert_eq!(chart.slices.len(), 2);
        assert!(chart.is_empty());
    }

    #[test]
    fn test_all_sites_no_successes() {
        let records = vec![LaunchRecord::new("A", 100.0, Outcome::Failure, "v1")];
        let chart = pie_chart(&records, &SiteSelection::All);

        assert!(chart.slices.is_empty());
        assert!(chart.is_empty());
    }
}
