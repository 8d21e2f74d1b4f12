// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{CalendarError, DEFAULT_MAX_VISIBLE_LANES, HolidaySet};

/// The name of the application.
pub const APP_NAME: &str = "calendarun";

/// Layout configuration of a calendar surface.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Lanes shown per day; schedules beyond this are left out.
    #[serde(default = "default_max_visible_lanes")]
    pub max_visible_lanes: usize,

    /// Dates styled as holidays.
    #[serde(default)]
    pub holidays: Vec<Date>,
}

const fn default_max_visible_lanes() -> usize {
    DEFAULT_MAX_VISIBLE_LANES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible_lanes: default_max_visible_lanes(),
            holidays: Vec::new(),
        }
    }
}

impl Config {
    /// Checks values the layout cannot work with.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.max_visible_lanes == 0 {
            return Err(CalendarError::InvalidLaneCount(self.max_visible_lanes));
        }
        Ok(())
    }

    /// The configured holidays as a lookup.
    #[must_use]
    pub fn holiday_set(&self) -> HolidaySet {
        self.holidays.iter().copied().collect()
    }
}
