use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::DashboardSettings;
use crate::core::Dashboard;
use crate::models::{
    DropdownLayout, ErrorResponse, HealthResponse, LayoutResponse, PayloadRange, PieQuery,
    PieResponse, ScatterQuery, ScatterResponse, SiteOption, SiteSelection, SliderLayout, ALL_SITES,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
    pub layout: Arc<LayoutResponse>,
}

impl AppState {
    pub fn new(dashboard: Dashboard, settings: &DashboardSettings) -> Self {
        let layout = Arc::new(build_layout(&dashboard, settings));
        Self { dashboard, layout }
    }
}

/// Describe the page controls
///
/// Dropdown sites come from configuration when set, otherwise from the
/// dataset in order of first appearance. The slider starts at the observed
/// payload bounds.
pub fn build_layout(dashboard: &Dashboard, settings: &DashboardSettings) -> LayoutResponse {
    let sites: Vec<String> = match &settings.sites {
        Some(sites) => sites.clone(),
        None => dashboard
            .dataset()
            .sites()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let mut options = Vec::with_capacity(sites.len() + 1);
    options.push(SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    });
    options.extend(sites.into_iter().map(|site| SiteOption {
        label: site.clone(),
        value: site,
    }));

    let bounds = dashboard.dataset().payload_bounds();

    LayoutResponse {
        title: settings.title.clone(),
        dropdown: DropdownLayout {
            options,
            value: ALL_SITES.to_string(),
            placeholder: "Select Launch Site".to_string(),
            searchable: true,
        },
        slider: SliderLayout {
            min: settings.slider_min,
            max: settings.slider_max,
            step: settings.slider_step,
            marks: settings.slider_marks.clone(),
            value: [bounds.min, bounds.max],
        },
    }
}

/// Configure all dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/layout", web::get().to(layout))
        .route("/charts/pie", web::get().to(pie_chart))
        .route("/charts/scatter", web::get().to(scatter_chart));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        records: state.dashboard.dataset().len(),
    })
}

/// Controls description
///
/// GET /api/v1/layout
async fn layout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.layout.as_ref())
}

/// Pie chart for the selected site
///
/// GET /api/v1/charts/pie?site={site}
async fn pie_chart(
    state: web::Data<AppState>,
    query: web::Query<PieQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors.to_string());
    }

    let selection = SiteSelection::parse(&query.site);
    let (chart, figure) = state.dashboard.pie_with_figure(&selection);

    tracing::debug!(
        "Pie chart for site {}: {} slices, total {}",
        selection,
        chart.slices.len(),
        chart.total()
    );

    HttpResponse::Ok().json(PieResponse {
        site: selection.to_string(),
        total: chart.total(),
        slices: chart.slices,
        figure,
    })
}

/// Scatter chart for the selected site and payload range
///
/// GET /api/v1/charts/scatter?site={site}&low={kg}&high={kg}
///
/// Missing bounds default to the dataset's payload bounds.
async fn scatter_chart(
    state: web::Data<AppState>,
    query: web::Query<ScatterQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors.to_string());
    }

    let defaults = state.dashboard.default_range();
    let range = match PayloadRange::new(
        query.low.unwrap_or(defaults.low()),
        query.high.unwrap_or(defaults.high()),
    ) {
        Ok(range) => range,
        Err(e) => {
            tracing::info!("Rejected scatter request: {}", e);
            return validation_failed(e.to_string());
        }
    };

    let selection = SiteSelection::parse(&query.site);
    let (chart, figure) = state.dashboard.scatter_with_figure(&selection, &range);

    tracing::debug!(
        "Scatter chart for site {} in [{}, {}]: {} points",
        selection,
        range.low(),
        range.high(),
        chart.points.len()
    );

    HttpResponse::Ok().json(ScatterResponse {
        site: selection.to_string(),
        low: range.low(),
        high: range.high(),
        points: chart.points,
        figure,
    })
}

fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}
