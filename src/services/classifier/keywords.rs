//! Keyword scoring for reminder titles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::reminder::ReminderType;

static MAINTENANCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(maintenance|repair|fix|check|inspection|service|upkeep)(?-u:\b)")
        .expect("MAINTENANCE_REGEX should compile - this is a bug")
});

static VIEWING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(viewing|show|tour|open house|property view)(?-u:\b)")
        .expect("VIEWING_REGEX should compile - this is a bug")
});

static MEETING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(meeting|appointment|conference|consultation|discussion)(?-u:\b)")
        .expect("MEETING_REGEX should compile - this is a bug")
});

fn patterns() -> [(ReminderType, &'static Regex); 3] {
    [
        (ReminderType::Maintenance, &*MAINTENANCE_REGEX),
        (ReminderType::Viewing, &*VIEWING_REGEX),
        (ReminderType::Meeting, &*MEETING_REGEX),
    ]
}

/// Number of keyword hits for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordScore {
    pub reminder_type: ReminderType,
    pub count: usize,
}

/// Score a title against every keyword pattern.
///
/// Only categories with at least one match are returned, sorted by count
/// descending with ties resolved by [`ReminderType::priority`].
pub fn score_title(title: &str) -> Vec<KeywordScore> {
    let lowered = title.to_lowercase();

    let mut scores: Vec<KeywordScore> = patterns()
        .iter()
        .map(|(reminder_type, regex)| KeywordScore {
            reminder_type: *reminder_type,
            count: regex.find_iter(&lowered).count(),
        })
        .filter(|score| score.count > 0)
        .collect();

    scores.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.reminder_type.priority().cmp(&b.reminder_type.priority()))
    });

    scores
}
