//! Month/day picker state.
//!
//! Years are never involved, so February always has 28 days.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::schedule::MonthDay;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Days in `month` (1-based); 0 for anything outside 1..=12.
pub fn days_in_month(month: u32) -> u32 {
    match month {
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Days the picker offers for `month`. Empty for an invalid month.
pub fn day_options(month: u32) -> RangeInclusive<u32> {
    match days_in_month(month) {
        0 => RangeInclusive::new(1, 0),
        max => 1..=max,
    }
}

/// Parses `MM-DD` (one or two digits per field). Returns `None` for empty
/// or malformed input; a day past the end of the month is clamped.
pub fn parse_month_day(raw: &str) -> Option<MonthDay> {
    let (month, day) = raw.trim().split_once('-')?;
    let month = parse_field(month)?;
    let day = parse_field(day)?;
    if day > 31 {
        return None;
    }
    MonthDay::new(month, day)
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Current picker selection. Either half may be unset.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MonthDaySelection {
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl MonthDaySelection {
    /// Selection for a stored value; invalid or empty input yields an empty selection.
    pub fn from_value(raw: Option<&str>) -> Self {
        match raw.and_then(parse_month_day) {
            Some(md) => Self {
                month: Some(md.month()),
                day: Some(md.day()),
            },
            None => Self::default(),
        }
    }

    /// Changes the month, pulling the selected day back to the new month's
    /// last day when it no longer fits. Invalid months are ignored.
    pub fn select_month(&mut self, month: u32) {
        let max = days_in_month(month);
        if max == 0 {
            return;
        }
        self.month = Some(month);
        if let Some(day) = self.day {
            if day > max {
                self.day = Some(max);
            }
        }
    }

    /// Changes the day, clamped to the selected month when there is one.
    pub fn select_day(&mut self, day: u32) {
        if day == 0 || day > 31 {
            return;
        }
        let max = self.month.map(days_in_month).unwrap_or(31);
        self.day = Some(day.min(max));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The complete selection, once both month and day are chosen.
    pub fn value(&self) -> Option<MonthDay> {
        MonthDay::new(self.month?, self.day?)
    }

    pub fn days_in_selected_month(&self) -> u32 {
        self.month.map(days_in_month).unwrap_or(31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_without_leap_years() {
        assert_eq!(days_in_month(1), 31);
        assert_eq!(days_in_month(2), 28);
        assert_eq!(days_in_month(4), 30);
        assert_eq!(days_in_month(12), 31);
        assert_eq!(days_in_month(0), 0);
        assert_eq!(days_in_month(13), 0);
    }

    #[test]
    fn test_month_names_and_day_options() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(day_options(2).count(), 28);
        assert_eq!(day_options(13).count(), 0);
    }

    #[test]
    fn test_parse_valid_values() {
        let md = parse_month_day("04-15").unwrap();
        assert_eq!((md.month(), md.day()), (4, 15));
        let md = parse_month_day(" 4-5 ").unwrap();
        assert_eq!((md.month(), md.day()), (4, 5));
    }

    #[test]
    fn test_parse_invalid_values_give_none() {
        for raw in ["", "-", "04", "4/15", "13-01", "00-10", "04-00", "04-32", "ab-cd", "004-15", "+4-15"] {
            assert!(parse_month_day(raw).is_none(), "'{raw}' must not parse");
        }
    }

    #[test]
    fn test_parse_clamps_day_past_month_end() {
        assert_eq!(parse_month_day("02-30").map(|m| m.to_string()), Some("02-28".into()));
        assert_eq!(parse_month_day("02-29").map(|m| m.to_string()), Some("02-28".into()));
    }

    #[test]
    fn test_from_value_invalid_is_empty_selection() {
        assert_eq!(MonthDaySelection::from_value(None), MonthDaySelection::default());
        assert_eq!(MonthDaySelection::from_value(Some("garbage")), MonthDaySelection::default());
    }

    #[test]
    fn test_month_change_clamps_day_31_to_30() {
        let mut sel = MonthDaySelection::from_value(Some("03-31"));
        sel.select_month(4);
        assert_eq!(sel.day, Some(30));
        assert_eq!(sel.value().map(|m| m.to_string()), Some("04-30".into()));
    }

    #[test]
    fn test_month_change_to_february_clamps_to_28() {
        let mut sel = MonthDaySelection::from_value(Some("01-30"));
        sel.select_month(2);
        assert_eq!(sel.day, Some(28));
    }

    #[test]
    fn test_month_change_keeps_day_that_fits() {
        let mut sel = MonthDaySelection::from_value(Some("02-28"));
        sel.select_month(3);
        assert_eq!(sel.day, Some(28));
        assert_eq!(sel.days_in_selected_month(), 31);
    }

    #[test]
    fn test_invalid_month_is_ignored() {
        let mut sel = MonthDaySelection::from_value(Some("05-10"));
        sel.select_month(13);
        assert_eq!(sel.month, Some(5));
    }

    #[test]
    fn test_partial_selection_has_no_value() {
        let mut sel = MonthDaySelection::default();
        sel.select_day(31);
        assert_eq!(sel.value(), None);
        sel.select_month(6);
        assert_eq!(sel.value().map(|m| m.to_string()), Some("06-30".into()));
    }

    #[test]
    fn test_select_day_clamps_to_month() {
        let mut sel = MonthDaySelection::default();
        sel.select_month(2);
        sel.select_day(30);
        assert_eq!(sel.day, Some(28));
        sel.select_day(0);
        assert_eq!(sel.day, Some(28));
        sel.clear();
        assert_eq!(sel, MonthDaySelection::default());
    }
}
