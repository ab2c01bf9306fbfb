//! Launch Dash - interactive launch records dashboard
//!
//! Loads a CSV of historical launch records once at startup and serves two
//! charts over HTTP: a pie of launch outcomes per site and a scatter of payload
//! mass against outcome, filtered by site and payload range.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{pie_chart, scatter_chart, Dashboard};
pub use crate::models::{LaunchRecord, Outcome, PayloadRange, PieChart, ScatterChart, SiteSelection};
pub use crate::services::{Dataset, DatasetError};
