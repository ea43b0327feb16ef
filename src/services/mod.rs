// Service module exports

pub mod bucketing;
pub mod calendar;
pub mod classifier;
pub mod event_cache;
pub mod event_source;
pub mod settings;
pub mod window;
