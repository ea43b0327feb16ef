//! Range-keyed cache of fetched events.
//!
//! Entries are keyed by the exact date range and filters they were fetched
//! with. Writes made elsewhere (the add/edit flow) invalidate every entry
//! whose range overlaps the affected dates, so the next refresh refetches.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use crate::models::calendar_event::CalendarEvent;
use crate::models::date_range::DateRange;
use crate::models::filters::EventFilters;
use crate::services::event_source::{EventSource, FetchError};

/// Upper bound on cached batches; one per distinct window range and filter set.
pub const DEFAULT_MAX_BATCHES: u64 = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub range: DateRange,
    pub filters: EventFilters,
}

impl CacheKey {
    pub fn new(range: DateRange, filters: EventFilters) -> Self {
        Self { range, filters }
    }
}

/// Event batches keyed by fetch range and filters.
///
/// Entries expire `stale_after` their insertion and are evicted from
/// memory, not just skipped.
pub struct EventCache {
    entries: Cache<CacheKey, Arc<Vec<CalendarEvent>>>,
}

impl EventCache {
    pub fn new(stale_after: Duration) -> Self {
        Self::with_capacity(stale_after, DEFAULT_MAX_BATCHES)
    }

    pub fn with_capacity(stale_after: Duration, max_batches: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_batches)
                .time_to_live(stale_after)
                .build(),
        }
    }

    /// Fresh events for `key`, if any.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Vec<CalendarEvent>>> {
        self.entries.get(key)
    }

    pub fn insert(&self, key: CacheKey, events: Vec<CalendarEvent>) {
        self.entries.insert(key, Arc::new(events));
    }

    /// Drop every entry overlapping `range`; returns how many were removed.
    pub fn invalidate_range(&self, range: &DateRange) -> usize {
        let overlapping: Vec<Arc<CacheKey>> = self
            .entries
            .iter()
            .filter(|(key, _)| key.range.overlaps(range))
            .map(|(key, _)| key)
            .collect();

        for key in &overlapping {
            self.entries.invalidate(key.as_ref());
        }

        if !overlapping.is_empty() {
            log::debug!(
                "Invalidated {} cached event batch(es) overlapping {} to {}",
                overlapping.len(),
                range.start_date,
                range.end_date
            );
        }
        overlapping.len()
    }

    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks();
    }

    /// Batches still held in memory, after pending evictions have run.
    pub fn len(&self) -> usize {
        self.entries.run_pending_tasks();
        self.entries.entry_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An [`EventSource`] that answers repeat requests from an [`EventCache`].
///
/// Failed fetches are not cached.
pub struct CachedEventSource<S> {
    inner: S,
    cache: EventCache,
}

impl<S: EventSource> CachedEventSource<S> {
    pub fn new(inner: S, stale_after: Duration) -> Self {
        Self {
            inner,
            cache: EventCache::new(stale_after),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn invalidate_range(&self, range: &DateRange) -> usize {
        self.cache.invalidate_range(range)
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn cached_batches(&self) -> usize {
        self.cache.len()
    }
}

impl<S: EventSource> EventSource for CachedEventSource<S> {
    fn fetch_events(
        &self,
        range: &DateRange,
        filters: &EventFilters,
    ) -> Result<Vec<CalendarEvent>, FetchError> {
        let key = CacheKey::new(*range, filters.clone());

        if let Some(events) = self.cache.get(&key) {
            log::debug!("Serving {} cached events", events.len());
            return Ok(events.as_ref().clone());
        }

        let events = self.inner.fetch_events(range, filters)?;
        self.cache.insert(key, events.clone());
        Ok(events)
    }
}
