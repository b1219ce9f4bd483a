//! Business-window configuration.
//!
//! The daily bookable range (start/end hour, business timezone), slot duration,
//! and weekend exclusion are parameters rather than constants so the engine
//! stays testable across timezones and schedules.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Configuration for the daily business window and slot generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// IANA timezone the business window is expressed in.
    pub timezone: Tz,
    /// First bookable hour of the day (local wall clock), in [0, 24).
    pub start_hour: u32,
    /// End of the bookable range (local wall clock, exclusive), in [0, 24).
    pub end_hour: u32,
    /// Candidate slot duration in minutes. Must divide 60.
    pub slot_minutes: i64,
    /// When true, Saturday/Sunday short-circuit to "no availability" without
    /// querying the calendar provider.
    pub exclude_weekends: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::New_York,
            start_hour: 9,
            end_hour: 17,
            slot_minutes: 30,
            exclude_weekends: true,
        }
    }
}

impl ScheduleConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidConfig` when the hour range is empty or
    /// out of bounds, or when the slot duration does not tile an hour evenly.
    pub fn validate(&self) -> Result<()> {
        if self.start_hour >= 24 || self.end_hour >= 24 {
            return Err(ScheduleError::InvalidConfig(format!(
                "hours must be in [0, 24): start={}, end={}",
                self.start_hour, self.end_hour
            )));
        }
        if self.start_hour >= self.end_hour {
            return Err(ScheduleError::InvalidConfig(format!(
                "start hour {} must be before end hour {}",
                self.start_hour, self.end_hour
            )));
        }
        if self.slot_minutes <= 0 || 60 % self.slot_minutes != 0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "slot duration {} must be a positive divisor of 60",
                self.slot_minutes
            )));
        }
        Ok(())
    }
}
