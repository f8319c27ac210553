//! Store availability engine
//!
//! Pure function of the weekly schedule and the wall clock. The feed
//! subscription and the periodic re-run live in [`crate::schedule`];
//! this module never touches a clock or channel itself.
//!
//! Boundary semantics: `open_time` is inclusive, `close_time` is
//! exclusive — exactly at closing time counts as closed.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;
use shared::models::{BusinessStatus, NextOpening, ScheduleRecord};
use shared::{StoreError, StoreResult};

/// Compute the open/closed status for the given schedule set and time
///
/// - Empty set → closed, "no schedules configured", no scan.
/// - No record for today, or today is not an open day → closed, with
///   the nearest open day found by scanning forward up to 7 days.
/// - Open day → minutes-of-day compared against `[open, close)`.
///   Before opening, `next_opening` stays unset: the opening is later
///   today and is reported through `current` and the message.
pub fn compute_status(
    schedules: &[ScheduleRecord],
    now: DateTime<Tz>,
) -> StoreResult<BusinessStatus> {
    if schedules.is_empty() {
        return Ok(BusinessStatus {
            is_open: false,
            message: Some("No hay horarios configurados".to_string()),
            current: None,
            next_opening: None,
        });
    }

    let current_day = now.weekday().num_days_from_sunday() as u8;
    let current_minutes = now.hour() * 60 + now.minute();

    let today = schedules
        .iter()
        .find(|s| s.day_index == current_day && s.is_open_day);

    let Some(today) = today else {
        return Ok(BusinessStatus {
            is_open: false,
            message: Some("Cerrado hoy".to_string()),
            current: None,
            next_opening: find_next_opening(schedules, current_day),
        });
    };

    let open_minutes = parse_minutes(&today.open_time)?;
    let close_minutes = parse_minutes(&today.close_time)?;

    if current_minutes >= open_minutes && current_minutes < close_minutes {
        Ok(BusinessStatus {
            is_open: true,
            message: Some(format!("Abierto hasta las {}", today.close_time)),
            current: Some(today.clone()),
            next_opening: None,
        })
    } else if current_minutes < open_minutes {
        // Opens later today: no forward scan, today still qualifies
        Ok(BusinessStatus {
            is_open: false,
            message: Some(format!("Abre hoy a las {}", today.open_time)),
            current: Some(today.clone()),
            next_opening: None,
        })
    } else {
        Ok(BusinessStatus {
            is_open: false,
            message: Some("Cerrado por hoy".to_string()),
            current: None,
            next_opening: find_next_opening(schedules, current_day),
        })
    }
}

/// Scan forward day-by-day (wrapping after Saturday) for the first
/// open day, starting from tomorrow. Inspects at most 7 candidates.
fn find_next_opening(schedules: &[ScheduleRecord], current_day: u8) -> Option<NextOpening> {
    for offset in 1..=7u8 {
        let day = (current_day + offset) % 7;
        if let Some(record) = schedules
            .iter()
            .find(|s| s.day_index == day && s.is_open_day)
        {
            return Some(NextOpening {
                day_label: record.day_label.clone(),
                time: record.open_time.clone(),
            });
        }
    }
    None
}

/// Parse a `HH:MM` time-of-day into minutes since midnight
fn parse_minutes(value: &str) -> StoreResult<u32> {
    let invalid = || StoreError::invalid_schedule_format(value);

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}
