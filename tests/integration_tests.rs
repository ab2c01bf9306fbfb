// Integration tests for Launch Dash

use launch_dash::core::{pie_chart, scatter_chart, Dashboard};
use launch_dash::models::{LaunchRecord, Outcome, PayloadRange, ScatterPoint, SiteSelection};
use launch_dash::services::Dataset;
use std::collections::HashSet;
use std::sync::Arc;

const LAUNCHES_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,CCAFS LC-40,1,3325.0,F9 v1.1,v1.1
3,4,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,5,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
5,6,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
6,7,KSC LC-39A,0,5300.0,F9 FT B1021.2,FT
7,8,KSC LC-39A,1,6460.0,F9 B5 B1046.1,B5
8,9,CCAFS SLC-40,1,2257.0,F9 FT  B1032.2,FT
9,10,CCAFS SLC-40,0,3600.0,F9 B4  B1043.1,B4
";

fn load() -> Dataset {
    Dataset::from_reader(LAUNCHES_CSV.as_bytes()).expect("sample CSV should load")
}

fn site(name: &str) -> SiteSelection {
    SiteSelection::parse(name)
}

#[test]
fn test_payload_filter_inclusive_at_both_bounds() {
    let dataset = load();
    let range = PayloadRange::new(525.0, 3325.0).unwrap();

    let chart = scatter_chart(dataset.records(), &SiteSelection::All, &range);
    let xs: Vec<f64> = chart.points.iter().map(|p| p.payload_mass_kg).collect();

    assert!(xs.contains(&525.0), "low bound must be included");
    assert!(xs.contains(&3325.0), "high bound must be included");
    assert!(xs.iter().all(|x| (525.0..=3325.0).contains(x)));
}

#[test]
fn test_all_sites_pie_one_slice_per_successful_site() {
    let dataset = load();
    let chart = pie_chart(dataset.records(), &SiteSelection::All);

    let successful_sites: HashSet<&str> = dataset
        .records()
        .iter()
        .filter(|r| r.outcome == Outcome::Success)
        .map(|r| r.site.as_str())
        .collect();
    let labels: HashSet<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
    let total_successes = dataset
        .records()
        .iter()
        .filter(|r| r.outcome == Outcome::Success)
        .count() as u64;

    assert_eq!(chart.slices.len(), successful_sites.len());
    assert_eq!(labels, successful_sites);
    assert_eq!(chart.total(), total_successes);
}

#[test]
fn test_site_pie_two_values_sum_to_site_count() {
    let dataset = load();

    for name in dataset.sites() {
        let chart = pie_chart(dataset.records(), &site(name));
        let site_count = dataset.records().iter().filter(|r| r.site == name).count() as u64;

        assert_eq!(chart.slices.len(), 2, "site {}", name);
        assert_eq!(chart.slices[0].label, "Success");
        assert_eq!(chart.slices[1].label, "Failure");
        assert_eq!(chart.total(), site_count, "site {}", name);
    }
}

#[test]
fn test_all_sites_full_range_is_whole_table() {
    let dataset = load();
    let dashboard = Dashboard::new(Arc::new(dataset.clone()));

    let chart = dashboard.scatter(&SiteSelection::All, &dashboard.default_range());
    let expected: Vec<ScatterPoint> = dataset.records().iter().map(ScatterPoint::from).collect();

    assert_eq!(chart.points, expected);
}

#[test]
fn test_unknown_site_yields_empty_charts() {
    let dataset = load();
    let unknown = site("Boca Chica");
    let range = PayloadRange::new(0.0, 10000.0).unwrap();

    assert!(pie_chart(dataset.records(), &unknown).is_empty());
    assert!(scatter_chart(dataset.records(), &unknown, &range).is_empty());
}

#[test]
fn test_two_record_example() {
    let records = vec![
        LaunchRecord::new("A", 4000.0, Outcome::Success, "v1"),
        LaunchRecord::new("A", 6000.0, Outcome::Failure, "v2"),
    ];

    let pie = pie_chart(&records, &site("A"));
    let values: Vec<(&str, u64)> = pie.slices.iter().map(|s| (s.label.as_str(), s.value)).collect();
    assert_eq!(values, vec![("Success", 1), ("Failure", 1)]);

    let range = PayloadRange::new(5000.0, 10000.0).unwrap();
    let scatter = scatter_chart(&records, &site("A"), &range);
    assert_eq!(
        scatter.points,
        vec![ScatterPoint {
            payload_mass_kg: 6000.0,
            class: 0,
            booster_category: "v2".to_string(),
        }]
    );
}

#[test]
fn test_payload_bounds_seed_slider() {
    let dataset = load();
    let bounds = dataset.payload_bounds();

    assert_eq!(bounds.min, 0.0);
    assert_eq!(bounds.max, 9600.0);
}

#[test]
fn test_bundled_dataset_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/spacex_launch_dash.csv");
    let dataset = Dataset::load(path).expect("bundled dataset should load");

    assert!(!dataset.is_empty());
    assert_eq!(
        dataset.sites(),
        vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
}
