use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{GardenError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `planted_on` plus `days` calendar days. `None` past chrono's last date.
pub fn harvest_date(planted_on: NaiveDate, days: u32) -> Option<NaiveDate> {
    planted_on.checked_add_days(Days::new(u64::from(days)))
}

/// The manual date when there is one, otherwise `planted_on + days`.
pub fn effective_harvest_date(
    planted_on: NaiveDate,
    days: u32,
    manual: Option<NaiveDate>,
) -> Option<NaiveDate> {
    manual.or_else(|| harvest_date(planted_on, days))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| GardenError::InvalidDate(raw.to_string()))
}

/// Planting of one crop with its expected harvest.
///
/// The harvest date follows the planting date and offset until it is set by
/// hand; from then on it stays put until the override is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantingRecord {
    planted_on: NaiveDate,
    days_to_harvest: u32,
    harvest_on: NaiveDate,
    overridden: bool,
}

impl PlantingRecord {
    pub fn new(planted_on: NaiveDate, days_to_harvest: u32) -> Result<Self> {
        let harvest_on = harvest_date(planted_on, days_to_harvest).ok_or(GardenError::DateOutOfRange)?;
        Ok(Self {
            planted_on,
            days_to_harvest,
            harvest_on,
            overridden: false,
        })
    }

    pub fn planted_on(&self) -> NaiveDate {
        self.planted_on
    }

    pub fn days_to_harvest(&self) -> u32 {
        self.days_to_harvest
    }

    pub fn harvest_on(&self) -> NaiveDate {
        self.harvest_on
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// On error the record is left unchanged.
    pub fn set_planted_on(&mut self, planted_on: NaiveDate) -> Result<()> {
        if !self.overridden {
            self.harvest_on =
                harvest_date(planted_on, self.days_to_harvest).ok_or(GardenError::DateOutOfRange)?;
        }
        self.planted_on = planted_on;
        Ok(())
    }

    /// On error the record is left unchanged.
    pub fn set_days_to_harvest(&mut self, days: u32) -> Result<()> {
        if !self.overridden {
            self.harvest_on = harvest_date(self.planted_on, days).ok_or(GardenError::DateOutOfRange)?;
        }
        self.days_to_harvest = days;
        Ok(())
    }

    /// Pins the harvest date; later planting changes leave it alone.
    pub fn override_harvest(&mut self, harvest_on: NaiveDate) {
        self.harvest_on = harvest_on;
        self.overridden = true;
    }

    /// Drops the manual date and recomputes; stays overridden on error.
    pub fn clear_override(&mut self) -> Result<()> {
        self.harvest_on =
            harvest_date(self.planted_on, self.days_to_harvest).ok_or(GardenError::DateOutOfRange)?;
        self.overridden = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_adds_calendar_days_across_months() {
        assert_eq!(harvest_date(date(2024, 5, 1), 60), Some(date(2024, 6, 30)));
        assert_eq!(harvest_date(date(2023, 12, 20), 15), Some(date(2024, 1, 4)));
    }

    #[test]
    fn test_leap_day_counts_as_a_day() {
        assert_eq!(harvest_date(date(2024, 2, 28), 1), Some(date(2024, 2, 29)));
        assert_eq!(harvest_date(date(2023, 2, 28), 1), Some(date(2023, 3, 1)));
    }

    #[test]
    fn test_zero_offset_is_same_day() {
        assert_eq!(harvest_date(date(2024, 3, 10), 0), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(harvest_date(NaiveDate::MAX, 1), None);
        assert_eq!(PlantingRecord::new(NaiveDate::MAX, 1), Err(GardenError::DateOutOfRange));
    }

    #[test]
    fn test_manual_date_takes_precedence() {
        let manual = date(2024, 9, 1);
        assert_eq!(effective_harvest_date(date(2024, 5, 1), 60, Some(manual)), Some(manual));
        assert_eq!(effective_harvest_date(date(2024, 5, 1), 60, None), Some(date(2024, 6, 30)));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-01"), Ok(date(2024, 5, 1)));
        assert!(matches!(parse_date("05/01/2024"), Err(GardenError::InvalidDate(_))));
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn test_record_recalculates_on_change() {
        let mut record = PlantingRecord::new(date(2024, 5, 1), 60).unwrap();
        record.set_planted_on(date(2024, 5, 11)).unwrap();
        assert_eq!(record.harvest_on(), date(2024, 7, 10));
        record.set_days_to_harvest(30).unwrap();
        assert_eq!(record.harvest_on(), date(2024, 6, 10));
    }

    #[test]
    fn test_override_suppresses_recalculation() {
        let mut record = PlantingRecord::new(date(2024, 5, 1), 60).unwrap();
        record.override_harvest(date(2024, 8, 15));
        record.set_planted_on(date(2024, 6, 1)).unwrap();
        record.set_days_to_harvest(10).unwrap();
        assert!(record.is_overridden());
        assert_eq!(record.harvest_on(), date(2024, 8, 15));

        record.clear_override().unwrap();
        assert!(!record.is_overridden());
        assert_eq!(record.harvest_on(), date(2024, 6, 11));
    }

    #[test]
    fn test_failed_update_leaves_record_unchanged() {
        let mut record = PlantingRecord::new(date(2024, 5, 1), 60).unwrap();
        let before = record;

        assert_eq!(record.set_planted_on(NaiveDate::MAX), Err(GardenError::DateOutOfRange));
        assert_eq!(record, before);
        assert!(record.harvest_on() >= record.planted_on());

        record.set_planted_on(date(262_000, 1, 1)).unwrap();
        let before = record;
        assert_eq!(record.set_days_to_harvest(u32::MAX), Err(GardenError::DateOutOfRange));
        assert_eq!(record, before);
    }

    #[test]
    fn test_overridden_record_accepts_out_of_range_planting() {
        let mut record = PlantingRecord::new(date(2024, 5, 1), 60).unwrap();
        record.override_harvest(date(2024, 8, 15));
        record.set_planted_on(NaiveDate::MAX).unwrap();
        assert_eq!(record.planted_on(), NaiveDate::MAX);
        assert_eq!(record.harvest_on(), date(2024, 8, 15));

        assert_eq!(record.clear_override(), Err(GardenError::DateOutOfRange));
        assert!(record.is_overridden());
        assert_eq!(record.harvest_on(), date(2024, 8, 15));
    }
}
