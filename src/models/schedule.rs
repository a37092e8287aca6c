use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use utoipa::ToSchema;

use crate::{
    error::GardenError,
    logic::month_day::{days_in_month, parse_month_day},
};

/// A calendar day without a year, written `MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Returns `None` for a month outside 1..=12 or a zero day. A day past
    /// the end of the month is clamped to the last day.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        let max = days_in_month(month);
        if max == 0 || day == 0 {
            return None;
        }
        Some(Self {
            month,
            day: day.min(max),
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// This day in `year`. February never exceeds the 28th, so this only
    /// fails outside chrono's supported years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_month_day(s).ok_or_else(|| GardenError::InvalidMonthDay(s.to_string()))
    }
}

/// Average frost days bounding the growing season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrostDates {
    #[schema(value_type = String, example = "04-15")]
    pub last_spring: MonthDay,
    #[schema(value_type = String, example = "10-15")]
    pub first_fall: MonthDay,
}

/// Key dates for one plant over a garden year.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub sow_indoors: Option<NaiveDate>,
    pub plant_out: NaiveDate,
    pub harvest: NaiveDate,
    /// Harvest falls after the first fall frost.
    pub frost_risk: bool,
}

/// Planting timeline for a bed, ordered by planting-out date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    /// Plant ids with no library entry.
    pub skipped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        let md = MonthDay::new(4, 5).unwrap();
        assert_eq!(md.to_string(), "04-05");
    }

    #[test]
    fn test_new_clamps_day_to_month_length() {
        assert_eq!(MonthDay::new(2, 30), MonthDay::new(2, 28));
        assert_eq!(MonthDay::new(4, 31).map(|m| m.day()), Some(30));
        assert!(MonthDay::new(13, 1).is_none());
        assert!(MonthDay::new(5, 0).is_none());
    }

    #[test]
    fn test_serde_uses_text_form() {
        let md: MonthDay = serde_json::from_str("\"10-15\"").unwrap();
        assert_eq!((md.month(), md.day()), (10, 15));
        assert_eq!(serde_json::to_string(&md).unwrap(), "\"10-15\"");
        assert!(serde_json::from_str::<MonthDay>("\"oct 15\"").is_err());
    }

    #[test]
    fn test_in_year() {
        let md = MonthDay::new(2, 28).unwrap();
        assert_eq!(md.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 28));
    }
}
