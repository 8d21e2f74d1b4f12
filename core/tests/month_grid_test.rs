// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Structural properties of month grids over many months.

mod common;

use std::collections::BTreeSet;

use calendarun_core::{DayType, HolidaySet, MonthGrid, NoHolidays, build_year_grid};
use jiff::civil::{Weekday, date};

use crate::common::{april_2024, months_between};

#[test]
fn rows_run_sunday_to_saturday() {
    for month in months_between(date(1999, 1, 1), date(2031, 12, 1)) {
        let grid = MonthGrid::build(month, &NoHolidays).unwrap();
        for week in grid.weeks() {
            assert_eq!(week.cells().len(), 7, "{month}");
            assert_eq!(week.start().weekday(), Weekday::Sunday, "{month}");
            assert_eq!(week.end().weekday(), Weekday::Saturday, "{month}");
            for pair in week.cells().windows(2) {
                assert_eq!(pair[0].date().tomorrow().unwrap(), pair[1].date());
            }
        }
    }
}

#[test]
fn every_day_of_the_month_appears_once() {
    for month in months_between(date(1999, 1, 1), date(2031, 12, 1)) {
        let grid = MonthGrid::build(month, &NoHolidays).unwrap();
        let visible: Vec<_> = grid
            .cells()
            .filter(|a| !a.is_padding())
            .map(|a| a.date())
            .collect();
        let expected: Vec<_> = (1..=month.days_in_month())
            .map(|d| month.with().day(d).build().unwrap())
            .collect();
        assert_eq!(visible, expected, "{month}");

        let unique: BTreeSet<_> = visible.iter().collect();
        assert_eq!(unique.len(), visible.len());
    }
}

#[test]
fn padding_belongs_to_adjacent_months() {
    for month in months_between(date(2020, 1, 1), date(2026, 12, 1)) {
        let grid = MonthGrid::build(month, &NoHolidays).unwrap();
        for cell in grid.cells() {
            let same_month =
                cell.date().year() == month.year() && cell.date().month() == month.month();
            assert_eq!(cell.is_padding(), !same_month, "{}", cell.date());
        }
    }
}

#[test]
fn four_to_six_rows() {
    let mut seen = BTreeSet::new();
    for month in months_between(date(1999, 1, 1), date(2031, 12, 1)) {
        let rows = MonthGrid::build(month, &NoHolidays).unwrap().weeks().len();
        assert!((4..=6).contains(&rows), "{month}: {rows}");
        seen.insert(rows);
    }
    assert_eq!(seen, BTreeSet::from([4, 5, 6]));
}

#[test]
fn building_twice_gives_equal_grids() {
    let a = MonthGrid::build(date(2024, 2, 29), &NoHolidays).unwrap();
    let b = MonthGrid::build(date(2024, 2, 1), &NoHolidays).unwrap();
    assert_eq!(a, b);
}

#[test]
fn april_2024_padding() {
    let grid = april_2024();
    assert_eq!(grid.weeks().len(), 5);

    let first = grid.weeks()[0].cells();
    assert_eq!(first[0].date(), date(2024, 3, 31));
    assert_eq!(first[0].day_type(), DayType::Padding);
    assert_eq!(first[1].date(), date(2024, 4, 1));
    assert_eq!(first.iter().filter(|a| a.is_padding()).count(), 1);

    let last = grid.weeks()[4].cells();
    let trailing: Vec<_> = last
        .iter()
        .filter(|a| a.is_padding())
        .map(|a| a.date())
        .collect();
    assert_eq!(
        trailing,
        vec![
            date(2024, 5, 1),
            date(2024, 5, 2),
            date(2024, 5, 3),
            date(2024, 5, 4)
        ]
    );
}

#[test]
fn six_row_month() {
    // March 2024 starts on a Friday and has 31 days
    let grid = MonthGrid::build(date(2024, 3, 1), &NoHolidays).unwrap();
    assert_eq!(grid.weeks().len(), 6);
    assert_eq!(grid.visible_range(), (date(2024, 2, 25), date(2024, 4, 6)));
}

#[test]
fn day_types_follow_weekdays_and_holidays() {
    let holidays: HolidaySet = [date(2024, 4, 10)].into_iter().collect();
    let grid = MonthGrid::build(date(2024, 4, 1), &holidays).unwrap();
    let kind = |d| grid.cell(d).unwrap().day_type();
    assert_eq!(kind(date(2024, 4, 7)), DayType::Sunday);
    assert_eq!(kind(date(2024, 4, 8)), DayType::Weekday);
    assert_eq!(kind(date(2024, 4, 10)), DayType::Holiday);
    assert_eq!(kind(date(2024, 4, 13)), DayType::Saturday);
}

#[test]
fn year_grid_months_hold_their_first_week() {
    let year = build_year_grid(2025, &NoHolidays).unwrap();
    assert_eq!(year.len(), 12);
    for grid in &year {
        let firsts = grid
            .weeks()
            .iter()
            .filter(|a| a.contains_first_of_month(grid.month()))
            .count();
        assert_eq!(firsts, 1, "{}", grid.month());
        assert!(grid.weeks()[0].contains_first_of_month(grid.month()));
    }
}
