// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use calendarun_core::{Color, MonthGrid, NoHolidays, RenderCell, ScheduleSpan};
use jiff::ToSpan;
use jiff::civil::{Date, date};

/// Creates a schedule with a default color and a text derived from its id.
#[must_use]
pub fn schedule(id: u64, start: Date, end: Date) -> ScheduleSpan {
    schedule_colored(id, start, end, Color::default())
}

/// Creates a schedule with the given color.
#[must_use]
pub fn schedule_colored(id: u64, start: Date, end: Date, color: Color) -> ScheduleSpan {
    ScheduleSpan::new(id, start, end, format!("schedule {id}"), color)
        .expect("fixture schedules are valid")
}

/// The April 2024 grid without holidays.
#[must_use]
pub fn april_2024() -> MonthGrid {
    MonthGrid::build(date(2024, 4, 1), &NoHolidays).expect("April 2024 is in range")
}

/// First days of every month from `from` up to and including `to`.
#[must_use]
pub fn months_between(from: Date, to: Date) -> Vec<Date> {
    from.first_of_month()
        .series(1.month())
        .take_while(|a| *a <= to)
        .collect()
}

/// The schedule ids of a cell, lane by lane.
#[must_use]
pub fn ids_in_lanes(cell: &RenderCell) -> Vec<Option<u64>> {
    cell.slots()
        .iter()
        .map(|a| a.map(|slot| slot.schedule_id.0))
        .collect()
}
