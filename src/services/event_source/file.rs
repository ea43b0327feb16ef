use std::fs;
use std::path::{Path, PathBuf};

use super::{EventSource, FetchError};
use crate::models::calendar_event::CalendarEvent;
use crate::models::date_range::DateRange;
use crate::models::filters::EventFilters;
use crate::utils::date::{parse_display_date, today};

/// Serves events from a JSON export on disk (an array of backend events).
///
/// Range filtering uses the same date parser as the classifier, so an event
/// with an unreadable date is served whenever today falls in the range.
pub struct JsonFileEventSource {
    path: PathBuf,
}

impl JsonFileEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<CalendarEvent>, FetchError> {
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|e| {
            FetchError::Decode(format!("{} ({})", e, self.path.display()))
        })
    }
}

fn matches_filters(event: &CalendarEvent, filters: &EventFilters) -> bool {
    if let Some(ref property_id) = filters.property_id {
        if event.property_id.as_ref() != Some(property_id) {
            return false;
        }
    }
    if let Some(kind) = filters.kind {
        if event.kind != kind {
            return false;
        }
    }
    if let Some(ref status) = filters.status {
        if event.status.as_ref() != Some(status) {
            return false;
        }
    }
    true
}

impl EventSource for JsonFileEventSource {
    fn fetch_events(
        &self,
        range: &DateRange,
        filters: &EventFilters,
    ) -> Result<Vec<CalendarEvent>, FetchError> {
        let today = today();
        let events: Vec<CalendarEvent> = self
            .load()?
            .into_iter()
            .filter(|event| matches_filters(event, filters))
            .filter(|event| range.contains(parse_display_date(&event.date, today)))
            .collect();

        log::info!(
            "Loaded {} calendar events from {}",
            events.len(),
            self.path.display()
        );
        Ok(events)
    }
}
