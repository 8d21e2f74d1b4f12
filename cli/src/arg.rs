// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calendarun_core::{CalendarError, CalendarId, parse_month};
use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::civil::Date;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn width(default: &'static str) -> Arg {
        arg!(-w --width <WIDTH> "Columns per day cell")
            .value_parser(value_parser!(u16).range(2..=40))
            .default_value(default)
    }

    pub fn get_width(matches: &ArgMatches) -> usize {
        matches.get_one::<u16>("width").map_or(2, |&a| usize::from(a))
    }

    pub fn calendar() -> Arg {
        arg!(--calendar <ID> "Only show schedules of this calendar")
            .value_parser(value_parser!(u64))
    }

    pub fn get_calendar(matches: &ArgMatches) -> Option<CalendarId> {
        matches.get_one::<u64>("calendar").map(|&a| CalendarId(a))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DateArgs;

impl DateArgs {
    pub fn month() -> Arg {
        arg!([MONTH] "The month to show, as YYYY-MM. Defaults to the current month")
            .value_parser(parse_month)
    }

    pub fn get_month(matches: &ArgMatches) -> Option<Date> {
        matches.get_one("MONTH").copied()
    }

    pub fn year() -> Arg {
        arg!([YEAR] "The year to show. Defaults to the current year")
            .value_parser(value_parser!(i16).range(1..=9999))
    }

    pub fn get_year(matches: &ArgMatches) -> Option<i16> {
        matches.get_one("YEAR").copied()
    }

    pub fn date() -> Arg {
        arg!(<DATE> "The day to inspect, as YYYY-MM-DD").value_parser(parse_date)
    }

    pub fn get_date(matches: &ArgMatches) -> Date {
        *matches.get_one("DATE").expect("date is required")
    }
}

/// Parses a `YYYY-MM-DD` literal.
pub fn parse_date(s: &str) -> Result<Date, CalendarError> {
    Ok(s.trim().parse()?)
}
