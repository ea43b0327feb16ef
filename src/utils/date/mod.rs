// Date utility functions
// Display-date parsing and month arithmetic shared by the window and classifier

use chrono::{Datelike, Days, Local, NaiveDate};

/// Month abbreviations accepted by [`parse_display_date`], in calendar order.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a backend display date such as `"24 Nov, 2025"`.
///
/// Never fails: blank or malformed input yields `today`. A day number past
/// the end of the month rolls forward into the following month (and day 0
/// rolls back), matching ordinary calendar arithmetic.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use property_calendar::utils::date::parse_display_date;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let parsed = parse_display_date("24 Nov, 2025", today);
/// assert_eq!(parsed, NaiveDate::from_ymd_opt(2025, 11, 24).unwrap());
/// assert_eq!(parse_display_date("", today), today);
/// ```
pub fn parse_display_date(input: &str, today: NaiveDate) -> NaiveDate {
    if input.trim().is_empty() {
        return today;
    }

    let tokens: Vec<&str> = input.split(' ').collect();
    if tokens.len() < 3 {
        log::warn!("Unexpected date format {:?}, falling back to today", input);
        return today;
    }

    let Ok(day) = tokens[0].parse::<i64>() else {
        return today;
    };

    let month_token = tokens[1].trim_end_matches(',');
    let Some(month_index) = MONTH_ABBREVIATIONS.iter().position(|m| *m == month_token) else {
        return today;
    };

    let Ok(year) = tokens[2].trim_end_matches(',').parse::<i32>() else {
        return today;
    };

    rolled_date(year, month_index as u32 + 1, day).unwrap_or(today)
}

/// [`parse_display_date`] against the local clock.
pub fn parse_display_date_today(input: &str) -> NaiveDate {
    parse_display_date(input, today())
}

/// Format a date the way the backend does (`"5 Jan, 2026"`).
pub fn format_display_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        date.day(),
        MONTH_ABBREVIATIONS[date.month0() as usize],
        date.year()
    )
}

/// Build a date from a possibly out-of-range day number by offsetting from
/// the first of the month.
fn rolled_date(year: i32, month: u32, day: i64) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = day.checked_sub(1)?;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset as u64))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

pub fn is_same_day(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 == date2
}

/// Same calendar month and year.
pub fn is_same_month(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1.year() == date2.year() && date1.month() == date2.month()
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last = days_in_month(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}

/// Shift a month by `delta_months`, returning the first day of the target month.
pub fn add_months(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(new_year, new_month, 1).unwrap_or_else(|| start_of_month(date))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
