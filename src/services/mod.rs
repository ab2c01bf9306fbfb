// Service exports
pub mod dataset;

pub use dataset::{Dataset, DatasetError};
