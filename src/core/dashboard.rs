use std::sync::Arc;

use crate::core::{aggregate::pie_chart, figure, scatter::scatter_chart};
use crate::models::{PayloadRange, PieChart, ScatterChart, SiteSelection};
use crate::services::Dataset;

/// Chart orchestrator over the loaded launch table
///
/// Every call re-evaluates against the full table; nothing is cached between
/// control changes.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Range covering the whole table, the slider's initial value
    pub fn default_range(&self) -> PayloadRange {
        PayloadRange::from(self.dataset.payload_bounds())
    }

    pub fn pie(&self, selection: &SiteSelection) -> PieChart {
        pie_chart(self.dataset.records(), selection)
    }

    pub fn scatter(&self, selection: &SiteSelection, range: &PayloadRange) -> ScatterChart {
        scatter_chart(self.dataset.records(), selection, range)
    }

    /// Pie chart together with its plotly figure
    pub fn pie_with_figure(&self, selection: &SiteSelection) -> (PieChart, serde_json::Value) {
        let chart = self.pie(selection);
        let fig = figure::pie_figure(&chart);
        (chart, fig)
    }

    /// Scatter chart together with its plotly figure
    pub fn scatter_with_figure(
        &self,
        selection: &SiteSelection,
        range: &PayloadRange,
    ) -> (ScatterChart, serde_json::Value) {
        let chart = self.scatter(selection, range);
        let fig = figure::scatter_figure(&chart);
        (chart, fig)
    }
}
