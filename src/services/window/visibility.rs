//! Header tracking: which rendered month dominates the scroll container.
//!
//! Drives the month/year label only; it never affects fetching.

use chrono::NaiveDate;

/// A section counts as current once more than this share of it is visible.
pub const VISIBLE_RATIO_THRESHOLD: f32 = 0.5;

/// Height of the band around the container's midpoint, as a share of the
/// container height, used when no section passes the ratio test.
pub const MIDPOINT_BAND_RATIO: f32 = 0.1;

/// Vertical extent in the scroll container's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Pixels of vertical overlap with `other` (zero when disjoint).
    pub fn overlap(&self, other: &Bounds) -> f32 {
        let overlap_top = self.top.max(other.top);
        let overlap_bottom = self.bottom().min(other.bottom());
        (overlap_bottom - overlap_top).max(0.0)
    }

    /// Share of this extent that lies inside `container`.
    pub fn intersection_ratio(&self, container: &Bounds) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        self.overlap(container) / self.height
    }
}

/// A rendered month section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub month: NaiveDate,
    pub bounds: Bounds,
}

/// The month whose section dominates `container`.
///
/// Sections are expected in render order. The first section more than half
/// visible wins; otherwise the first section touching the midpoint band.
pub fn current_visible_month(sections: &[SectionBounds], container: Bounds) -> Option<NaiveDate> {
    if let Some(section) = sections
        .iter()
        .find(|s| s.bounds.intersection_ratio(&container) > VISIBLE_RATIO_THRESHOLD)
    {
        return Some(section.month);
    }

    let band_height = container.height * MIDPOINT_BAND_RATIO;
    let band = Bounds::new(
        container.top + container.height / 2.0 - band_height / 2.0,
        band_height,
    );

    sections
        .iter()
        .find(|s| s.bounds.top <= band.bottom() && s.bounds.bottom() >= band.top)
        .map(|s| s.month)
}

/// Remembers the last resolved month so the header never goes blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMonthTracker {
    current: NaiveDate,
}

impl VisibleMonthTracker {
    pub fn new(initial: NaiveDate) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    /// Re-evaluate after a scroll; returns `true` if the header changed.
    pub fn update(&mut self, sections: &[SectionBounds], container: Bounds) -> bool {
        match current_visible_month(sections, container) {
            Some(month) if month != self.current => {
                self.current = month;
                true
            }
            _ => false,
        }
    }
}
