//! Turns a raw forecast into the day/hour partitioned view model.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{DayView, Forecast, HourView};

// Open-Meteo local-time formats (timezone=auto resolves to the coordinate's zone).
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Build one [`DayView`] per daily index, each carrying the hours of that
/// calendar date that are still ahead of (or exactly at) `now`.
///
/// Pure and idempotent: the same forecast and `now` always yield identical
/// output. Entries with unparseable timestamps are skipped, not errors.
pub fn build_day_views(forecast: &Forecast, now: NaiveDateTime) -> Vec<DayView> {
    let mut days = Vec::with_capacity(forecast.daily.len());

    for sample in forecast.daily.iter() {
        let Ok(date) = NaiveDate::parse_from_str(sample.time, DATE_FORMAT) else {
            tracing::warn!(time = sample.time, "skipping daily entry with bad date");
            continue;
        };

        // A date on or before today's is labeled "Today". The server returns
        // days in ascending order starting with the current one, so at most
        // one day normally matches; a stale past date also gets the label.
        let day = if date <= now.date() {
            "Today".to_string()
        } else {
            date.format("%a %d.%m.").to_string()
        };

        days.push(DayView {
            day,
            min_temperature: sample.temperature_min.round() as i32,
            max_temperature: sample.temperature_max.round() as i32,
            weather_code: sample.weather_code,
            hours: remaining_hours(forecast, date, now),
        });
    }

    days
}

/// Hours of `date` at or after `now`, in the original ascending order.
/// The boundary is inclusive: an hour exactly equal to `now` is kept.
fn remaining_hours(forecast: &Forecast, date: NaiveDate, now: NaiveDateTime) -> Vec<HourView> {
    let mut hours = Vec::new();

    for sample in forecast.hourly.iter() {
        let Ok(stamp) = NaiveDateTime::parse_from_str(sample.time, DATETIME_FORMAT) else {
            tracing::warn!(time = sample.time, "skipping hourly entry with bad timestamp");
            continue;
        };
        if stamp.date() != date || stamp < now {
            continue;
        }

        hours.push(HourView {
            hour: stamp.format("%H:%M").to_string(),
            temperature: sample.temperature.round() as i32,
            weather_code: sample.weather_code,
            wind_direction_deg: sample.wind_direction.round() as i32,
            wind_speed_ms: sample.wind_speed.round() as i32,
            is_day: sample.is_day,
        });
    }

    hours
}
