//! Inclusive date range used as the fetch boundary and cache key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Create a range, swapping the bounds if they are reversed.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        if end_date < start_date {
            Self {
                start_date: end_date,
                end_date: start_date,
            }
        } else {
            Self {
                start_date,
                end_date,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Bounds formatted as `YYYY-MM-DD` for query strings.
    pub fn query_bounds(&self) -> (String, String) {
        (
            self.start_date.format("%Y-%m-%d").to_string(),
            self.end_date.format("%Y-%m-%d").to_string(),
        )
    }
}
