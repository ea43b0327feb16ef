//! Sliding month window for the infinitely scrolling calendar.
//!
//! The window is a contiguous, non-empty list of month starts. It grows by
//! one month at either end when the scroll position nears an edge and is
//! only reset by an explicit jump. Prepending shifts content under the
//! viewport, so callers pair [`MonthWindow::expand_backward`] with a
//! [`ScrollAnchor`]: capture the content height before the update commits,
//! then apply [`ScrollAnchor::compensate`] in the same layout pass.

pub mod visibility;

use chrono::NaiveDate;

use crate::models::date_range::DateRange;
use crate::utils::date::{add_months, end_of_month, start_of_month, today};

pub use self::visibility::{current_visible_month, Bounds, SectionBounds, VisibleMonthTracker};

/// What an expansion did to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChange {
    /// A month was added before the first one; scroll compensation is required.
    Prepended(NaiveDate),
    /// A month was added after the last one.
    Appended(NaiveDate),
}

/// Where the view should scroll once a jump has rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The specially marked today cell.
    Today,
    Date(NaiveDate),
}

/// Which edge of the scroll region the viewport is near.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEdge {
    Top,
    Bottom,
}

/// Scroll container measurements in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    pub fn distance_to_bottom(&self) -> f32 {
        self.content_height - (self.offset + self.viewport_height)
    }

    /// The edge within `threshold` pixels of the viewport, top first.
    pub fn edge_trigger(&self, threshold: f32) -> Option<ScrollEdge> {
        if self.offset <= threshold {
            Some(ScrollEdge::Top)
        } else if self.distance_to_bottom() <= threshold {
            Some(ScrollEdge::Bottom)
        } else {
            None
        }
    }
}

/// Content height recorded before a prepend commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnchor {
    content_height_before: f32,
}

impl ScrollAnchor {
    pub fn capture(content_height_before: f32) -> Self {
        Self {
            content_height_before,
        }
    }

    /// Scroll offset that keeps the same content under the viewport after the
    /// prepended month has been laid out.
    pub fn compensate(&self, content_height_after: f32, current_offset: f32) -> f32 {
        current_offset + (content_height_after - self.content_height_before)
    }
}

/// Months currently rendered, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    months: Vec<NaiveDate>,
}

impl MonthWindow {
    /// Previous, current and next month around `today`.
    pub fn initialize(today: NaiveDate) -> Self {
        Self {
            months: Self::centered_on(today),
        }
    }

    fn centered_on(date: NaiveDate) -> Vec<NaiveDate> {
        let month = start_of_month(date);
        vec![add_months(month, -1), month, add_months(month, 1)]
    }

    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn first_month(&self) -> Option<NaiveDate> {
        self.months.first().copied()
    }

    pub fn last_month(&self) -> Option<NaiveDate> {
        self.months.last().copied()
    }

    /// Reset to the months around `today` if the window is somehow empty.
    pub fn ensure_non_empty(&mut self, today: NaiveDate) {
        if self.months.is_empty() {
            log::warn!("Month window was empty; resetting around {}", today);
            self.months = Self::centered_on(today);
        }
    }

    pub fn expand_backward(&mut self) -> WindowChange {
        self.ensure_non_empty(today());
        let first = self.months[0];
        let month = add_months(first, -1);
        self.months.insert(0, month);
        WindowChange::Prepended(month)
    }

    pub fn expand_forward(&mut self) -> WindowChange {
        self.ensure_non_empty(today());
        let last = self.months[self.months.len() - 1];
        let month = add_months(last, 1);
        self.months.push(month);
        WindowChange::Appended(month)
    }

    /// Expand toward whichever edge the viewport is within `threshold` of.
    pub fn handle_scroll(&mut self, metrics: ScrollMetrics, threshold: f32) -> Option<WindowChange> {
        match metrics.edge_trigger(threshold)? {
            ScrollEdge::Top => Some(self.expand_backward()),
            ScrollEdge::Bottom => Some(self.expand_forward()),
        }
    }

    /// Re-center the window on `date` and report where to scroll afterwards.
    pub fn jump_to(&mut self, date: NaiveDate, today: NaiveDate) -> ScrollTarget {
        self.months = Self::centered_on(date);
        if date == today {
            ScrollTarget::Today
        } else {
            ScrollTarget::Date(date)
        }
    }

    /// Fetch boundary: first day of the first month to last day of the last.
    pub fn date_range(&self) -> DateRange {
        match (self.first_month(), self.last_month()) {
            (Some(first), Some(last)) => DateRange::new(start_of_month(first), end_of_month(last)),
            _ => Self::initialize(today()).date_range(),
        }
    }
}
