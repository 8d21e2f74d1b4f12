// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar layout core of CalendaRun.
//!
//! Builds Sunday-first month grids and places multi-day schedules into
//! horizontal lanes so their bars render as continuous, non-overlapping strips
//! across the days and week rows they span. Everything here is synchronous and
//! free of I/O; callers fetch schedules before laying them out.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]

mod calendar;
mod color;
mod config;
mod diff;
mod error;
mod grid;
mod holiday;
mod lane;
mod schedule;
mod selection;

pub use crate::calendar::{Calendar, CalendarId, Slice, SliceDraft};
pub use crate::color::Color;
pub use crate::config::{APP_NAME, Config};
pub use crate::diff::diff_render_maps;
pub use crate::error::CalendarError;
pub use crate::grid::{
    DAYS_PER_WEEK, DateCell, DayType, MonthGrid, Week, build_year_grid, parse_month,
};
pub use crate::holiday::{HolidayLookup, HolidaySet, NoHolidays};
pub use crate::lane::{
    DEFAULT_MAX_VISIBLE_LANES, LaneAssigner, LaneCache, LaneSlot, RenderCell, RenderMap,
    assign_lanes,
};
pub use crate::schedule::{ScheduleId, ScheduleSpan, schedules_on, sort_schedules};
pub use crate::selection::{ClickOutcome, DaySelection};
