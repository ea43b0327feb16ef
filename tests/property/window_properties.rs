// Property-based tests for the month window
// Random expansion sequences must keep the window contiguous and growing

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use property_calendar::services::window::{MonthWindow, ScrollTarget};
use property_calendar::utils::date::{add_months, end_of_month};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990..2090i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn assert_contiguous(window: &MonthWindow) -> Result<(), TestCaseError> {
    for pair in window.months().windows(2) {
        prop_assert_eq!(add_months(pair[0], 1), pair[1]);
    }
    for month in window.months() {
        prop_assert_eq!(month.day(), 1);
    }
    Ok(())
}

proptest! {
    /// Property: any mix of expansions keeps the window contiguous and never shrinks it
    #[test]
    fn prop_expansions_keep_window_contiguous(
        today in date_strategy(),
        steps in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut window = MonthWindow::initialize(today);
        let mut previous_len = window.len();

        for backward in steps {
            if backward {
                window.expand_backward();
            } else {
                window.expand_forward();
            }
            prop_assert_eq!(window.len(), previous_len + 1);
            previous_len = window.len();
            assert_contiguous(&window)?;
        }
    }

    /// Property: the fetch range always spans whole months of the window
    #[test]
    fn prop_date_range_matches_window_ends(
        today in date_strategy(),
        back in 0..6usize,
        ahead in 0..6usize,
    ) {
        let mut window = MonthWindow::initialize(today);
        for _ in 0..back { window.expand_backward(); }
        for _ in 0..ahead { window.expand_forward(); }

        let range = window.date_range();
        prop_assert_eq!(range.start_date, window.first_month().unwrap());
        prop_assert_eq!(range.end_date, end_of_month(window.last_month().unwrap()));
        prop_assert!(range.contains(today));
    }

    /// Property: a jump always yields three months centred on the target
    #[test]
    fn prop_jump_to_centres_three_months(
        today in date_strategy(),
        target in date_strategy(),
        grow in 0..10usize,
    ) {
        let mut window = MonthWindow::initialize(today);
        for _ in 0..grow { window.expand_forward(); }

        let scroll = window.jump_to(target, today);
        prop_assert_eq!(window.len(), 3);
        prop_assert_eq!(window.months()[1], NaiveDate::from_ymd_opt(target.year(), target.month(), 1).unwrap());
        assert_contiguous(&window)?;
        if target == today {
            prop_assert_eq!(scroll, ScrollTarget::Today);
        } else {
            prop_assert_eq!(scroll, ScrollTarget::Date(target));
        }
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_year_boundary_expansion() {
        let mut window = MonthWindow::initialize(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        window.expand_forward();
        assert_eq!(window.last_month(), NaiveDate::from_ymd_opt(2026, 2, 1));
        window.expand_backward();
        assert_eq!(window.first_month(), NaiveDate::from_ymd_opt(2025, 10, 1));
    }
}
