// Module exports for models

pub mod calendar_event;
pub mod date_range;
pub mod filters;
pub mod reminder;
pub mod settings;
