// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::calendar::CalendarId;
use crate::schedule::ScheduleId;

/// Errors raised while constructing calendar inputs.
///
/// Layout itself never fails on validated input: dropping a schedule that
/// does not fit is a policy outcome, not an error.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A schedule ends before it starts.
    #[error("schedule {id} ends ({end}) before it starts ({start})")]
    InvalidSpan {
        /// Identifier of the offending schedule.
        id: ScheduleId,
        /// Declared start date.
        start: Date,
        /// Declared end date.
        end: Date,
    },

    /// Two schedules share an identifier.
    #[error("schedule id {0} is used more than once")]
    DuplicateScheduleId(ScheduleId),

    /// A schedule names a calendar that is not declared.
    #[error("schedule {schedule} refers to unknown calendar {calendar}")]
    UnknownCalendar {
        /// Identifier of the offending schedule.
        schedule: ScheduleId,
        /// The calendar it refers to.
        calendar: CalendarId,
    },

    /// Two calendars share an identifier.
    #[error("calendar id {0} is used more than once")]
    DuplicateCalendarId(CalendarId),

    /// A calendar has an empty or whitespace-only name.
    #[error("calendar {0} has a blank name")]
    BlankCalendarName(CalendarId),

    /// A slice has an empty or whitespace-only name.
    #[error("slice {index} of calendar {calendar} has a blank name")]
    BlankSliceName {
        /// Calendar owning the slice.
        calendar: CalendarId,
        /// Position of the slice in the calendar, from zero.
        index: usize,
    },

    /// A slice lacks its start or end date.
    #[error("slice {index} of calendar {calendar} needs both a start and an end date")]
    MissingSliceDate {
        /// Calendar owning the slice.
        calendar: CalendarId,
        /// Position of the slice in the calendar, from zero.
        index: usize,
    },

    /// A slice ends before it starts.
    #[error("slice {index} of calendar {calendar} ends ({end}) before it starts ({start})")]
    InvalidSlice {
        /// Calendar owning the slice.
        calendar: CalendarId,
        /// Position of the slice in the calendar, from zero.
        index: usize,
        /// Declared start date.
        start: Date,
        /// Declared end date.
        end: Date,
    },

    /// Walking the grid left the range of representable dates.
    #[error("month of {0} cannot be laid out within the supported date range")]
    OutOfRange(Date),

    /// A color literal could not be parsed.
    #[error("invalid color `{0}`, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    /// A surface was configured without lanes.
    #[error("at least one lane is required, got {0}")]
    InvalidLaneCount(usize),

    /// A month literal could not be parsed.
    #[error("invalid month `{0}`, expected YYYY-MM")]
    InvalidMonth(String),

    /// Date arithmetic failed.
    #[error(transparent)]
    Date(#[from] jiff::Error),
}
