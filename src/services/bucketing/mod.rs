//! Day bucketing for the month grid.
//!
//! Each rendered month is laid out as whole weeks, including leading and
//! trailing days from the adjacent months. Reminders are matched to cells
//! by the grid's month and the cell's day-of-month, so a leading or trailing
//! cell shows the grid month's reminders for the same day number. At most `inline_cap` reminders render inline; the
//! rest collapse into a "+N more" affordance whose detail view lists the
//! whole day.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::reminder::Reminder;
use crate::utils::date::{days_in_month, is_same_month, start_of_month};

/// Reminders shown directly in a day cell before overflowing.
pub const DEFAULT_INLINE_CAP: usize = 2;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
}

/// Week-aligned cell layout for a single month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDate,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Lay out `month` starting each week on `first_day_of_week` (0 = Sunday).
    pub fn new(month: NaiveDate, first_day_of_week: u8) -> Self {
        let first_of_month = start_of_month(month);
        let leading = (first_of_month.weekday().num_days_from_sunday() as i64
            - first_day_of_week as i64
            + 7)
            % 7;
        let days = days_in_month(first_of_month.year(), first_of_month.month()) as i64;

        // Whole weeks only
        let weeks_needed = (leading + days + 6) / 7;
        let grid_start = first_of_month
            .checked_sub_days(Days::new(leading as u64))
            .unwrap_or(first_of_month);

        let cells = grid_start
            .iter_days()
            .take((weeks_needed * 7) as usize)
            .map(|date| GridCell {
                date,
                in_month: is_same_month(date, first_of_month),
            })
            .collect();

        Self {
            month: first_of_month,
            cells,
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }
}

/// Reminders belonging to `day` within the month grid for `grid_month`.
///
/// Matches on the grid's month and the day-of-month only, in input order.
pub fn events_for_day<'a>(
    grid_month: NaiveDate,
    day: NaiveDate,
    reminders: &'a [Reminder],
) -> Vec<&'a Reminder> {
    reminders
        .iter()
        .filter(|r| is_same_month(r.date, grid_month) && r.date.day() == day.day())
        .collect()
}

/// The "+N more" affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    pub hidden_count: usize,
}

impl Overflow {
    pub fn label(&self) -> String {
        format!("+{} more", self.hidden_count)
    }
}

/// The reminders of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub in_month: bool,
    reminders: Vec<Reminder>,
    inline_cap: usize,
}

impl DayBucket {
    pub fn new(cell: GridCell, reminders: Vec<Reminder>, inline_cap: usize) -> Self {
        Self {
            date: cell.date,
            in_month: cell.in_month,
            reminders,
            inline_cap,
        }
    }

    /// Reminders rendered directly in the cell.
    pub fn inline(&self) -> &[Reminder] {
        let shown = self.reminders.len().min(self.inline_cap);
        &self.reminders[..shown]
    }

    pub fn overflow(&self) -> Option<Overflow> {
        let hidden_count = self.reminders.len().saturating_sub(self.inline_cap);
        (hidden_count > 0).then_some(Overflow { hidden_count })
    }

    /// Everything for the day, including the inline reminders.
    pub fn detail(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

/// Day buckets for one rendered month, in grid order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBuckets {
    pub month: NaiveDate,
    pub days: Vec<DayBucket>,
}

impl MonthBuckets {
    /// The bucket for `date`, if the grid contains that cell.
    pub fn bucket_for(&self, date: NaiveDate) -> Option<&DayBucket> {
        self.days.iter().find(|bucket| bucket.date == date)
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayBucket]> {
        self.days.chunks(7)
    }

    /// Reminders placed on the month's own cells.
    pub fn reminder_count(&self) -> usize {
        self.days
            .iter()
            .filter(|bucket| bucket.in_month)
            .map(DayBucket::len)
            .sum()
    }
}

/// Partition `reminders` into the cells of `grid`.
pub fn bucket_month(grid: &MonthGrid, reminders: &[Reminder], inline_cap: usize) -> MonthBuckets {
    let days = grid
        .cells()
        .iter()
        .map(|cell| {
            let matched = events_for_day(grid.month(), cell.date, reminders)
                .into_iter()
                .cloned()
                .collect();
            DayBucket::new(*cell, matched, inline_cap)
        })
        .collect();

    MonthBuckets {
        month: grid.month(),
        days,
    }
}
