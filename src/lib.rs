// Property Calendar Library
// Event aggregation, classification and month bucketing for property dashboards

pub mod models;
pub mod services;
pub mod utils;
