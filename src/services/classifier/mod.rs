//! Event classification.
//!
//! Turns raw [`CalendarEvent`]s into [`Reminder`]s, assigning each one a
//! [`ReminderType`] through a first-match-wins cascade:
//!
//! 1. the `reminderType` metadata hint, if it names a valid category
//!    (`"reminder"` is accepted as an alias for `other`);
//! 2. keyword scoring of the title (highest count wins, ties go to the
//!    higher-priority category);
//! 3. `other`.
//!
//! Classification is total. Malformed dates fall back to today and invalid
//! hints are logged and ignored, so every input event produces exactly one
//! reminder.

pub mod keywords;

use chrono::NaiveDate;

use crate::models::calendar_event::CalendarEvent;
use crate::models::reminder::{ClassificationSource, Reminder, ReminderType};
use crate::utils::date::parse_display_date;

use self::keywords::score_title;

/// Outcome of type inference for a single title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inference {
    pub reminder_type: ReminderType,
    pub source: ClassificationSource,
}

/// Normalize a metadata hint into a category, if it names one.
pub fn normalize_hint(hint: &str) -> Option<ReminderType> {
    let normalized = hint.trim().to_lowercase();
    let normalized = if normalized == "reminder" {
        "other"
    } else {
        normalized.as_str()
    };
    normalized.parse().ok()
}

/// Infer the category of a title given an optional metadata hint.
pub fn infer_type(title: &str, hint: Option<&str>) -> Inference {
    if let Some(hint) = hint.filter(|h| !h.trim().is_empty()) {
        match normalize_hint(hint) {
            Some(reminder_type) => {
                return Inference {
                    reminder_type,
                    source: ClassificationSource::Metadata,
                };
            }
            None => {
                log::warn!(
                    "Ignoring invalid reminderType {:?} for {:?}; falling back to keywords",
                    hint,
                    title
                );
            }
        }
    }

    let scores = score_title(title);
    if let Some(best) = scores.first() {
        if let Some(runner_up) = scores.get(1) {
            if runner_up.count == best.count {
                log::debug!(
                    "Ambiguous keywords in {:?}: {} and {} both matched {} time(s); using {}",
                    title,
                    best.reminder_type,
                    runner_up.reminder_type,
                    best.count,
                    best.reminder_type
                );
            }
        }
        return Inference {
            reminder_type: best.reminder_type,
            source: ClassificationSource::Keywords,
        };
    }

    Inference {
        reminder_type: ReminderType::Other,
        source: ClassificationSource::Default,
    }
}

/// Classify one event. `today` is the fallback for unparseable dates.
pub fn classify(event: &CalendarEvent, today: NaiveDate) -> Reminder {
    let inference = infer_type(&event.title, event.reminder_type_hint());

    Reminder {
        id: event.id.clone(),
        title: event.title.clone(),
        date: parse_display_date(&event.date, today),
        time: event.time.clone().unwrap_or_default(),
        reminder_type: inference.reminder_type,
        property: event.property_name.clone(),
        property_id: event.property_id.clone(),
        details: event.status.clone(),
        assignee_name: event.assignee.clone(),
        source: inference.source,
    }
}

/// Classify a batch, preserving input order.
pub fn classify_all(events: &[CalendarEvent], today: NaiveDate) -> Vec<Reminder> {
    events.iter().map(|event| classify(event, today)).collect()
}
