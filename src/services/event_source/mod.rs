//! Event sources: where raw calendar events come from.
//!
//! The calendar asks a source for a complete, unordered batch of events per
//! date range. Caching and de-duplication live in
//! [`crate::services::event_cache`]; sources only fetch.

pub mod fetcher;
pub mod file;

use thiserror::Error;

use crate::models::calendar_event::CalendarEvent;
use crate::models::date_range::DateRange;
use crate::models::filters::EventFilters;

pub use self::fetcher::HttpEventSource;
pub use self::file::JsonFileEventSource;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid event source URL: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP status {0}")]
    Status(u16),
    #[error("response too large ({size} bytes > {limit} bytes)")]
    TooLarge { size: usize, limit: usize },
    #[error("could not decode events: {0}")]
    Decode(String),
    #[error("could not read events: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Whether repeating the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status(code) => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}

/// Anything that can produce the events for a date range.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    fn fetch_events(
        &self,
        range: &DateRange,
        filters: &EventFilters,
    ) -> Result<Vec<CalendarEvent>, FetchError>;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn fetch_events(
        &self,
        range: &DateRange,
        filters: &EventFilters,
    ) -> Result<Vec<CalendarEvent>, FetchError> {
        (**self).fetch_events(range, filters)
    }
}
