//! Plotly figure descriptions for the dashboard charts.
//!
//! The browser hands these objects straight to `Plotly.react`, so the shape
//! follows plotly.js: `{ "data": [traces...], "layout": {...} }`.

use serde_json::{json, Value};

use crate::models::{PieChart, ScatterChart, ScatterPoint};

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const CLASS_AXIS_TITLE: &str = "class";

/// Build a pie figure with one trace
pub fn pie_figure(chart: &PieChart) -> Value {
    let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<u64> = chart.slices.iter().map(|s| s.value).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
        }],
        "layout": {
            "title": { "text": chart.title },
        },
    })
}

/// Build a scatter figure with one marker trace per booster category
pub fn scatter_figure(chart: &ScatterChart) -> Value {
    let traces: Vec<Value> = group_by_category(&chart.points)
        .into_iter()
        .map(|(category, points)| {
            let xs: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
            let ys: Vec<u8> = points.iter().map(|p| p.class).collect();
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": category,
                "legendgroup": category,
                "x": xs,
                "y": ys,
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "title": { "text": chart.title },
            "xaxis": { "title": { "text": PAYLOAD_AXIS_TITLE } },
            "yaxis": { "title": { "text": CLASS_AXIS_TITLE } },
            "legend": { "title": { "text": "Booster Version Category" } },
        },
    })
}

/// Group points by category, categories in order of first appearance
fn group_by_category(points: &[ScatterPoint]) -> Vec<(&str, Vec<&ScatterPoint>)> {
    let mut groups: Vec<(&str, Vec<&ScatterPoint>)> = Vec::new();

    for point in points {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == point.booster_category)
        {
            Some((_, members)) => members.push(point),
            None => groups.push((point.booster_category.as_str(), vec![point])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PieSlice;

    fn point(x: f64, class: u8, category: &str) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: x,
            class,
            booster_category: category.to_string(),
        }
    }

    #[test]
    fn test_pie_figure() {
        let chart = PieChart {
            title: "Total Success Rate at A".to_string(),
            slices: vec![
                PieSlice { label: "Success".to_string(), value: 3 },
                PieSlice { label: "Failure".to_string(), value: 1 },
            ],
        };

        let figure = pie_figure(&chart);

        assert_eq!(figure["data"][0]["type"], "pie");
        assert_eq!(figure["data"][0]["labels"], json!(["Success", "Failure"]));
        assert_eq!(figure["data"][0]["values"], json!([3, 1]));
        assert_eq!(figure["layout"]["title"]["text"], "Total Success Rate at A");
        assert_eq!(figure["layout"].as_object().map(|l| l.len()), Some(1));
    }

    #[test]
    fn test_scatter_traces_per_category() {
        let chart = ScatterChart {
            title: "t".to_string(),
            points: vec![point(100.0, 1, "FT"), point(200.0, 0, "B4"), point(300.0, 1, "FT")],
        };

        let figure = scatter_figure(&chart);
        let traces = figure["data"].as_array().unwrap();

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "FT");
        assert_eq!(traces[0]["x"], json!([100.0, 300.0]));
        assert_eq!(traces[0]["y"], json!([1, 1]));
        assert_eq!(traces[1]["name"], "B4");
        assert_eq!(figure["layout"]["xaxis"]["title"]["text"], PAYLOAD_AXIS_TITLE);
    }

    #[test]
    fn test_empty_scatter_has_no_traces() {
        let chart = ScatterChart { title: "t".to_string(), points: vec![] };
        let figure = scatter_figure(&chart);

        assert_eq!(figure["data"], json!([]));
    }
}
