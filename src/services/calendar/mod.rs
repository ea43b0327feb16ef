//! Calendar session: window → fetch → classify → bucket.
//!
//! A session owns the month window for as long as the calendar is mounted.
//! Each refresh fetches the window's whole date range in one request,
//! classifies the batch, and lays every window month out as day buckets.

use chrono::NaiveDate;

use crate::models::date_range::DateRange;
use crate::models::filters::EventFilters;
use crate::models::reminder::Reminder;
use crate::models::settings::AppConfig;
use crate::services::bucketing::{bucket_month, MonthBuckets, MonthGrid, DEFAULT_INLINE_CAP};
use crate::services::classifier::classify_all;
use crate::services::event_cache::CachedEventSource;
use crate::services::event_source::EventSource;
use crate::services::window::{MonthWindow, ScrollMetrics, ScrollTarget, WindowChange};

/// Result of the latest refresh, for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loaded(Vec<MonthBuckets>),
    /// Fetch failed; the message is user-facing. No retry is scheduled.
    Failed(String),
}

impl LoadState {
    pub fn months(&self) -> &[MonthBuckets] {
        match self {
            LoadState::Loaded(months) => months,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

pub struct CalendarSession<S> {
    source: S,
    window: MonthWindow,
    filters: EventFilters,
    inline_cap: usize,
    first_day_of_week: u8,
    scroll_threshold_px: f32,
    state: LoadState,
}

impl<S: EventSource> CalendarSession<S> {
    pub fn new(source: S, today: NaiveDate) -> Self {
        Self {
            source,
            window: MonthWindow::initialize(today),
            filters: EventFilters::default(),
            inline_cap: DEFAULT_INLINE_CAP,
            first_day_of_week: 0,
            scroll_threshold_px: AppConfig::default().scroll_threshold_px,
            state: LoadState::NotLoaded,
        }
    }

    /// Session using the grid and scroll settings from `config`.
    pub fn with_config(source: S, today: NaiveDate, config: &AppConfig) -> Self {
        let mut session = Self::new(source, today);
        session.inline_cap = config.inline_cap.max(1);
        session.first_day_of_week = config.first_day_of_week;
        session.scroll_threshold_px = config.scroll_threshold_px;
        session
    }

    pub fn set_filters(&mut self, filters: EventFilters) {
        self.filters = filters;
    }

    pub fn filters(&self) -> &EventFilters {
        &self.filters
    }

    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn date_range(&self) -> DateRange {
        self.window.date_range()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn expand_backward(&mut self) -> WindowChange {
        self.window.expand_backward()
    }

    pub fn expand_forward(&mut self) -> WindowChange {
        self.window.expand_forward()
    }

    pub fn handle_scroll(&mut self, metrics: ScrollMetrics) -> Option<WindowChange> {
        self.window.handle_scroll(metrics, self.scroll_threshold_px)
    }

    pub fn jump_to(&mut self, date: NaiveDate, today: NaiveDate) -> ScrollTarget {
        self.window.jump_to(date, today)
    }

    /// Fetch, classify and bucket the current window.
    pub fn refresh(&mut self, today: NaiveDate) -> &LoadState {
        self.window.ensure_non_empty(today);
        let range = self.window.date_range();

        self.state = match self.source.fetch_events(&range, &self.filters) {
            Ok(events) => {
                let reminders = classify_all(&events, today);
                LoadState::Loaded(self.bucket_window(&reminders))
            }
            Err(err) => {
                log::error!("Failed to load calendar events: {}", err);
                LoadState::Failed(format!("Failed to load calendar events: {}", err))
            }
        };

        &self.state
    }

    fn bucket_window(&self, reminders: &[Reminder]) -> Vec<MonthBuckets> {
        self.window
            .months()
            .iter()
            .map(|month| {
                let grid = MonthGrid::new(*month, self.first_day_of_week);
                bucket_month(&grid, reminders, self.inline_cap)
            })
            .collect()
    }
}

impl<S: EventSource> CalendarSession<CachedEventSource<S>> {
    /// Drop cached batches touched by an external write; the next refresh
    /// refetches them.
    pub fn invalidate(&self, range: &DateRange) -> usize {
        self.source.invalidate_range(range)
    }
}
