// Classification cascade tests against the public API
// Covers metadata priority, keyword scoring and the default fallback

#[path = "../fixtures/mod.rs"]
mod fixtures;

use test_case::test_case;

use fixtures::{dates, ymd};
use property_calendar::models::calendar_event::{CalendarEvent, EventKind, EventMetadata};
use property_calendar::models::reminder::{ClassificationSource, ReminderType};
use property_calendar::services::classifier::{classify, infer_type};

fn event(title: &str, hint: Option<&str>) -> CalendarEvent {
    let event = CalendarEvent::new("t", EventKind::Task, title, "24 Nov, 2025");
    match hint {
        Some(hint) => event.with_metadata(EventMetadata::with_reminder_type(hint)),
        None => event,
    }
}

#[test_case("Fix the fence", ReminderType::Maintenance; "fix keyword")]
#[test_case("repair and meeting about repair", ReminderType::Maintenance; "higher count wins")]
#[test_case("repair meeting", ReminderType::Maintenance; "tie goes to maintenance")]
#[test_case("meeting before the tour", ReminderType::Viewing; "tie goes to viewing over meeting")]
#[test_case("Tenant consultation and discussion after tour", ReminderType::Meeting; "meeting outscores viewing")]
#[test_case("Annual gas service", ReminderType::Maintenance; "service keyword")]
#[test_case("Property view for new buyers", ReminderType::Viewing; "property view phrase")]
#[test_case("Quarterly review", ReminderType::Other; "no keywords")]
#[test_case("Fixture install", ReminderType::Other; "partial word does not match")]
fn test_keyword_classification(title: &str, expected: ReminderType) {
    let reminder = classify(&event(title, None), dates::today());
    assert_eq!(reminder.reminder_type, expected);
}

#[test_case(Some("viewing"), "Boiler repair", ReminderType::Viewing, ClassificationSource::Metadata; "metadata beats keywords")]
#[test_case(Some(" MEETING "), "Boiler repair", ReminderType::Meeting, ClassificationSource::Metadata; "normalized metadata")]
#[test_case(Some("reminder"), "Boiler repair", ReminderType::Other, ClassificationSource::Metadata; "reminder alias")]
#[test_case(Some("urgent"), "Boiler repair", ReminderType::Maintenance, ClassificationSource::Keywords; "invalid metadata falls through")]
#[test_case(Some("urgent"), "Quarterly review", ReminderType::Other, ClassificationSource::Default; "invalid metadata then default")]
#[test_case(None, "Quarterly review", ReminderType::Other, ClassificationSource::Default; "plain default")]
fn test_cascade(
    hint: Option<&str>,
    title: &str,
    expected: ReminderType,
    expected_source: ClassificationSource,
) {
    let inference = infer_type(title, hint);
    assert_eq!(inference.reminder_type, expected);
    assert_eq!(inference.source, expected_source);
}

#[test]
fn test_classify_parses_display_date() {
    let reminder = classify(&event("Viewing", None), dates::today());
    assert_eq!(reminder.date, ymd(2025, 11, 24));
}

#[test]
fn test_every_event_produces_one_reminder() {
    let events = vec![
        event("", None),
        event("???", Some("")),
        CalendarEvent::new("x", EventKind::Reminder, "Open house", ""),
    ];
    let reminders: Vec<_> = events.iter().map(|e| classify(e, dates::today())).collect();
    assert_eq!(reminders.len(), 3);
    assert_eq!(reminders[2].date, dates::today());
    assert_eq!(reminders[2].reminder_type, ReminderType::Viewing);
}
