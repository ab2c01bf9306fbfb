// Core chart exports
pub mod aggregate;
pub mod dashboard;
pub mod figure;
pub mod filters;
pub mod scatter;

pub use aggregate::pie_chart;
pub use dashboard::Dashboard;
pub use figure::{pie_figure, scatter_figure};
pub use filters::{is_success, matches_payload, matches_site};
pub use scatter::scatter_chart;
