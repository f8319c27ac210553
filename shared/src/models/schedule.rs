//! Weekly schedule model
//!
//! One `ScheduleRecord` per weekday, pushed by the schedule feed.
//! `BusinessStatus` is derived from the records and the clock; it is
//! recomputed on every snapshot and never persisted.

use serde::{Deserialize, Serialize};

/// One weekly open/close record
///
/// At most one record per `day_index`; the set may be incomplete and
/// missing days are treated as closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Weekday index, 0 = Sunday .. 6 = Saturday
    pub day_index: u8,
    /// Display name for the day ("Martes")
    pub day_label: String,
    /// If false the store does not operate that day regardless of times
    #[serde(default)]
    pub is_open_day: bool,
    /// Opening time of day, "HH:MM"
    pub open_time: String,
    /// Closing time of day, "HH:MM" (`open_time < close_time` assumed)
    pub close_time: String,
}

impl ScheduleRecord {
    /// Hours line for the weekly schedule listing
    pub fn hours_label(&self) -> String {
        if self.is_open_day {
            format!("{} - {}", self.open_time, self.close_time)
        } else {
            "Cerrado".to_string()
        }
    }
}

/// Next day/time at which the store will accept orders again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextOpening {
    pub day_label: String,
    /// Opening time of day on that day, "HH:MM"
    pub time: String,
}

/// Derived open/closed state
///
/// `current` carries today's record when one applies (open now, or
/// opening later today). `next_opening` is only filled when the store
/// is closed with no opening left today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BusinessStatus {
    pub is_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<ScheduleRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_opening: Option<NextOpening>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_label() {
        let open = ScheduleRecord {
            day_index: 2,
            day_label: "Martes".to_string(),
            is_open_day: true,
            open_time: "14:00".to_string(),
            close_time: "22:00".to_string(),
        };
        assert_eq!(open.hours_label(), "14:00 - 22:00");

        let closed = ScheduleRecord {
            is_open_day: false,
            ..open
        };
        assert_eq!(closed.hours_label(), "Cerrado");
    }
}
