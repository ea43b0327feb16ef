//! Reminder model: the classified, display-ready projection of a calendar event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display category assigned to every reminder.
///
/// Variants are declared in tie-break priority order: when keyword counts are
/// equal, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    Maintenance,
    Viewing,
    Meeting,
    Other,
}

impl ReminderType {
    pub const ALL: [ReminderType; 4] = [
        ReminderType::Maintenance,
        ReminderType::Viewing,
        ReminderType::Meeting,
        ReminderType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderType::Maintenance => "maintenance",
            ReminderType::Viewing => "viewing",
            ReminderType::Meeting => "meeting",
            ReminderType::Other => "other",
        }
    }

    /// Position in the tie-break order (lower wins).
    pub fn priority(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no reminder type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReminderType(pub String);

impl fmt::Display for UnknownReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown reminder type: {}", self.0)
    }
}

impl std::error::Error for UnknownReminderType {}

impl FromStr for ReminderType {
    type Err = UnknownReminderType;

    /// Exact, lowercase match against the four category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintenance" => Ok(ReminderType::Maintenance),
            "viewing" => Ok(ReminderType::Viewing),
            "meeting" => Ok(ReminderType::Meeting),
            "other" => Ok(ReminderType::Other),
            _ => Err(UnknownReminderType(s.to_string())),
        }
    }
}

/// Which step of the classification cascade decided the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    Metadata,
    Keywords,
    Default,
}

/// A classified calendar entry ready for the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Empty when the source event carried no time.
    pub time: String,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub property: Option<String>,
    pub property_id: Option<String>,
    pub details: Option<String>,
    pub assignee_name: Option<String>,
    pub source: ClassificationSource,
}
