use chrono::{Days, NaiveDate};
use log::debug;

use crate::{
    error::{GardenError, Result},
    logic::harvest::harvest_date,
    models::{
        bed::PlantEntry,
        plant::PlantLibrary,
        schedule::{FrostDates, Timeline, TimelineEntry},
    },
};

/// Moves `date` by a signed number of weeks.
pub fn shift_weeks(date: NaiveDate, weeks: i32) -> Option<NaiveDate> {
    let days = Days::new(u64::from(weeks.unsigned_abs()) * 7);
    if weeks >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// Builds the planting timeline of `plants` for the growing season starting in `year`.
///
/// Sowing and planting-out dates are offsets from the last spring frost
/// (planting out defaults to the frost day itself). A crop is flagged when
/// its harvest lands after the first fall frost. When the fall frost comes
/// earlier in the calendar than the spring one, it is taken in the next year.
pub fn plan_timeline(
    year: i32,
    frost: FrostDates,
    plants: &[PlantEntry],
    library: &PlantLibrary,
) -> Result<Timeline> {
    let last_spring = frost
        .last_spring
        .in_year(year)
        .ok_or(GardenError::DateOutOfRange)?;
    let fall_year = if frost.first_fall < frost.last_spring {
        year + 1
    } else {
        year
    };
    let first_fall = frost
        .first_fall
        .in_year(fall_year)
        .ok_or(GardenError::DateOutOfRange)?;

    let mut timeline = Timeline::default();
    for entry in plants {
        let Some(plant) = library.get(&entry.id) else {
            debug!("Plant '{}' not in library, left out of the timeline", entry.id);
            timeline.skipped.push(entry.id.clone());
            continue;
        };

        let plant_out = shift_weeks(last_spring, plant.plant_out_weeks.unwrap_or(0))
            .ok_or(GardenError::DateOutOfRange)?;
        let sow_indoors = match plant.sow_indoors_weeks {
            Some(weeks) => Some(shift_weeks(last_spring, weeks).ok_or(GardenError::DateOutOfRange)?),
            None => None,
        };
        let harvest =
            harvest_date(plant_out, plant.days_to_maturity).ok_or(GardenError::DateOutOfRange)?;

        timeline.entries.push(TimelineEntry {
            id: plant.id.clone(),
            name: plant.name.clone(),
            quantity: entry.quantity(),
            sow_indoors,
            plant_out,
            harvest,
            frost_risk: harvest > first_fall,
        });
    }

    timeline.entries.sort_by_key(|e| e.plant_out);
    Ok(timeline)
}
