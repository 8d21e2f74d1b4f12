// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::Date;

use crate::{CalendarError, CalendarId, Color};

/// Stable identifier of a schedule, assigned by the schedule store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ScheduleId(pub u64);

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ScheduleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A schedule occupying an inclusive range of whole days.
///
/// The range is validated on construction, so layout code can rely on
/// `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "ScheduleSpanRaw")]
pub struct ScheduleSpan {
    id: ScheduleId,
    start: Date,
    end: Date,
    text: String,
    color: Color,
    calendar: Option<CalendarId>,
}

impl ScheduleSpan {
    /// Creates a schedule, rejecting ranges that end before they start.
    pub fn new(
        id: impl Into<ScheduleId>,
        start: Date,
        end: Date,
        text: impl Into<String>,
        color: Color,
    ) -> Result<Self, CalendarError> {
        let id = id.into();
        if end < start {
            return Err(CalendarError::InvalidSpan { id, start, end });
        }

        Ok(Self {
            id,
            start,
            end,
            text: text.into(),
            color,
            calendar: None,
        })
    }

    /// Assigns the schedule to a calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: impl Into<CalendarId>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }

    /// The identifier of the schedule.
    #[must_use]
    pub fn id(&self) -> ScheduleId {
        self.id
    }

    /// The first day of the schedule.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last day of the schedule, inclusive.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// The text shown on the schedule bar.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The color of the schedule bar.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The calendar the schedule belongs to, if any.
    #[must_use]
    pub fn calendar(&self) -> Option<CalendarId> {
        self.calendar
    }

    /// Whether the schedule covers the given date.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the schedule shares at least one day with `[from, to]`.
    #[must_use]
    pub fn overlaps(&self, from: Date, to: Date) -> bool {
        self.start <= to && from <= self.end
    }
}

#[derive(Debug, serde::Deserialize)]
struct ScheduleSpanRaw {
    id: ScheduleId,
    #[serde(alias = "name")]
    text: String,
    start: Date,
    end: Date,
    #[serde(default)]
    color: Color,
    #[serde(default)]
    calendar: Option<CalendarId>,
}

impl TryFrom<ScheduleSpanRaw> for ScheduleSpan {
    type Error = CalendarError;

    fn try_from(raw: ScheduleSpanRaw) -> Result<Self, Self::Error> {
        let span = Self::new(raw.id, raw.start, raw.end, raw.text, raw.color)?;
        Ok(match raw.calendar {
            Some(calendar) => span.with_calendar(calendar),
            None => span,
        })
    }
}

/// Sorts schedules into the canonical layout order: start date ascending,
/// then id ascending.
pub fn sort_schedules(schedules: &mut [ScheduleSpan]) {
    schedules.sort_by_key(|a| (a.start, a.id));
}

/// The schedules covering `date`, ordered by start date.
#[must_use]
pub fn schedules_on(date: Date, schedules: &[ScheduleSpan]) -> Vec<&ScheduleSpan> {
    let mut found: Vec<_> = schedules.iter().filter(|a| a.covers(date)).collect();
    found.sort_by_key(|a| a.start);
    found
}
