// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    LaunchRecord, Outcome, PayloadBounds, PayloadRange, PieChart, PieSlice, RangeError,
    ScatterChart, ScatterPoint, SiteSelection, ALL_SITES,
};
pub use requests::{PieQuery, ScatterQuery};
pub use responses::{
    DropdownLayout, ErrorResponse, HealthResponse, LayoutResponse, PieResponse, ScatterResponse,
    SiteOption, SliderLayout,
};
