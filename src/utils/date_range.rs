use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartEndDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl StartEndDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }
}

/// Splits `[start_date, end_date]` around `split_date` into a "before" and an
/// "after" part.
///
/// Neither part is clipped to `split_date`: each is the whole input interval.
/// The one exception is a range that starts exactly on `split_date`, where
/// "before" collapses to that single day and "after" (if any) begins the day
/// after the split.
pub fn split_start_end_dates(
    start_date: NaiveDate,
    end_date: NaiveDate,
    split_date: NaiveDate,
) -> (Option<StartEndDates>, Option<StartEndDates>) {
    let mut dates_before = None;
    let mut dates_after = None;

    if start_date < split_date {
        dates_before = Some(StartEndDates::new(start_date, end_date));
    }
    if end_date > split_date {
        dates_after = Some(StartEndDates::new(start_date, end_date));
    }
    if start_date == split_date {
        dates_before = Some(StartEndDates::new(split_date, start_date));
        if end_date > split_date {
            // "after" is always populated here by the check above.
            if let Some(after) = dates_after.as_mut() {
                after.start_date = split_date + Days::new(1);
            }
        }
    }

    (dates_before, dates_after)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn split_inside_range_returns_whole_range_twice() {
        let (before, after) = split_start_end_dates(d(1), d(10), d(5));
        assert_eq!(before, Some(StartEndDates::new(d(1), d(10))));
        assert_eq!(after, Some(StartEndDates::new(d(1), d(10))));
    }

    #[test]
    fn range_starting_on_split_moves_after_forward_a_day() {
        let (before, after) = split_start_end_dates(d(5), d(10), d(5));
        assert_eq!(before, Some(StartEndDates::new(d(5), d(5))));
        assert_eq!(after, Some(StartEndDates::new(d(6), d(10))));
    }

    #[test]
    fn single_day_on_split_has_no_after() {
        let (before, after) = split_start_end_dates(d(5), d(5), d(5));
        assert_eq!(before, Some(StartEndDates::new(d(5), d(5))));
        assert_eq!(after, None);
    }

    #[test]
    fn range_ending_on_split_is_before_only() {
        let (before, after) = split_start_end_dates(d(1), d(5), d(5));
        assert_eq!(before, Some(StartEndDates::new(d(1), d(5))));
        assert_eq!(after, None);
    }

    #[test]
    fn range_entirely_before_split_is_before_only() {
        let (before, after) = split_start_end_dates(d(1), d(3), d(5));
        assert_eq!(before, Some(StartEndDates::new(d(1), d(3))));
        assert_eq!(after, None);
    }

    #[test]
    fn range_entirely_after_split_is_after_only() {
        let (before, after) = split_start_end_dates(d(7), d(9), d(5));
        assert_eq!(before, None);
        assert_eq!(after, Some(StartEndDates::new(d(7), d(9))));
    }

    #[test]
    fn inverted_range_after_split_touches_nothing() {
        let (before, after) = split_start_end_dates(d(7), d(3), d(5));
        assert_eq!((before, after), (None, None));
    }

    #[test]
    fn split_across_month_boundary() {
        let jan_31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let feb_3 = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        let (_, after) = split_start_end_dates(jan_31, feb_3, jan_31);
        assert_eq!(
            after,
            Some(StartEndDates::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), feb_3))
        );
    }
}
