// Test fixtures - reusable test data
// Provides consistent events, dates and fake sources across test files

#![allow(dead_code)]

use std::cell::RefCell;

use chrono::NaiveDate;
use property_calendar::models::calendar_event::{CalendarEvent, EventKind, EventMetadata};
use property_calendar::models::date_range::DateRange;
use property_calendar::models::filters::EventFilters;
use property_calendar::services::event_source::{EventSource, FetchError};

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// The fixed "today" used across tests (18 Oct 2026)
    pub fn today() -> NaiveDate {
        ymd(2026, 10, 18)
    }

    /// Jan 5, 2026 - the pipe repair day
    pub fn pipe_repair_day() -> NaiveDate {
        ymd(2026, 1, 5)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn pipe_repair() -> CalendarEvent {
        CalendarEvent::new("evt-pipe", EventKind::Task, "Pipe repair", "5 Jan, 2026")
            .with_property("p-1", "Harbour View")
            .with_metadata(EventMetadata::default())
    }

    pub fn open_house() -> CalendarEvent {
        CalendarEvent::new("evt-open", EventKind::Reminder, "Open house", "17 Jan, 2026")
            .with_time("11:00")
            .with_property("p-2", "Elm Court")
    }

    pub fn tenant_meeting_tagged_viewing() -> CalendarEvent {
        CalendarEvent::new("evt-tag", EventKind::Reminder, "Meeting after repair", "20 Jan, 2026")
            .with_metadata(EventMetadata::with_reminder_type("viewing"))
    }

    /// `count` events on the same day with neutral titles.
    pub fn busy_day(count: usize, date: &str) -> Vec<CalendarEvent> {
        (1..=count)
            .map(|i| CalendarEvent::new(format!("busy-{}", i), EventKind::Task, format!("Item {}", i), date))
            .collect()
    }

    /// The backend's JSON for a small January batch.
    pub const JANUARY_JSON: &str = r#"[
        {"id": 1, "type": "task", "title": "Pipe repair", "date": "5 Jan, 2026", "metadata": {}},
        {"id": 2, "type": "reminder", "title": "Lease signing appointment", "date": "12 Jan, 2026",
         "propertyId": "p-7", "propertyName": "Riverside Lofts", "assignee": "Ana Ruiz"},
        {"id": 3, "type": "reminder", "title": "Rent reminder", "date": "12 Jan, 2026",
         "metadata": {"reminderType": "reminder"}},
        {"id": 4, "type": "task", "title": "Smoke alarm check", "date": "not a date"}
    ]"#;
}

/// In-memory event source that records the ranges it was asked for.
pub struct FakeEventSource {
    events: Vec<CalendarEvent>,
    fail_with_status: Option<u16>,
    pub requests: RefCell<Vec<(DateRange, EventFilters)>>,
}

impl FakeEventSource {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events,
            fail_with_status: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            events: Vec::new(),
            fail_with_status: Some(status),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl EventSource for FakeEventSource {
    fn fetch_events(
        &self,
        range: &DateRange,
        filters: &EventFilters,
    ) -> Result<Vec<CalendarEvent>, FetchError> {
        self.requests.borrow_mut().push((*range, filters.clone()));
        match self.fail_with_status {
            Some(status) => Err(FetchError::Status(status)),
            None => Ok(self.events.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::today().year(), 2026);
        assert_eq!(dates::leap_day_2024().day(), 29);
    }

    #[test]
    fn test_fixture_json_parses() {
        let parsed: Vec<CalendarEvent> = serde_json::from_str(events::JANUARY_JSON).unwrap();
        assert_eq!(parsed.len(), 4);
    }
}
