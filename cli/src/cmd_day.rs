// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calendarun_core::{CalendarId, ScheduleSpan};
use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::civil::Date;

use crate::app::App;
use crate::arg::{CommonArgs, DateArgs};
use crate::month_view::calendar_caption;
use crate::table::{Column, PaddingDirection, Table};

#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub date: Date,
    pub calendar: Option<CalendarId>,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("List the schedules covering a day")
            .arg(DateArgs::date())
            .arg(CommonArgs::calendar())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DateArgs::get_date(matches),
            calendar: CommonArgs::get_calendar(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing schedules of the day...");
        let calendar = app.calendar(self.calendar)?;
        println!("🗓️ {}", self.date.strftime("%A, %B %-d, %Y").to_string().bold());
        if let Some(calendar) = calendar {
            println!("{}", calendar_caption(calendar, self.date, self.date).italic());
        }

        let schedules: Vec<_> = app
            .store()
            .on(self.date, self.calendar)
            .into_iter()
            .cloned()
            .collect();
        if schedules.is_empty() {
            println!("No schedules");
        } else {
            print!("{}", format_day(&schedules));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum ScheduleColumn {
    Id,
    Span,
    Text,
}

impl Column<ScheduleSpan> for ScheduleColumn {
    fn format(&self, data: &ScheduleSpan) -> String {
        match self {
            Self::Id => data.id().to_string(),
            Self::Span if data.start() == data.end() => data.start().to_string(),
            Self::Span => format!("{} ~ {}", data.start(), data.end()),
            Self::Text => data.text().to_string(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id => PaddingDirection::Right,
            Self::Span | Self::Text => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &ScheduleSpan) -> Option<colored::Color> {
        match self {
            Self::Text => {
                let (r, g, b) = data.color().channels();
                Some(colored::Color::TrueColor { r, g, b })
            }
            Self::Id | Self::Span => None,
        }
    }
}

fn format_day(schedules: &[ScheduleSpan]) -> String {
    const COLUMNS: [ScheduleColumn; 3] =
        [ScheduleColumn::Id, ScheduleColumn::Span, ScheduleColumn::Text];
    Table {
        columns: &COLUMNS,
        separator: "  ",
        data: schedules,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use calendarun_core::Color;
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_day() {
        let cmd = Command::new("test").subcommand(CmdDay::command());
        let matches = cmd
            .try_get_matches_from(["test", "day", "2024-04-10", "--calendar", "4"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("day").unwrap();
        let parsed = CmdDay::from(sub_matches);
        assert_eq!(parsed.date, date(2024, 4, 10));
        assert_eq!(parsed.calendar, Some(CalendarId(4)));
    }

    #[test]
    fn test_parse_day_requires_date() {
        let cmd = Command::new("test").subcommand(CmdDay::command());
        assert!(cmd.try_get_matches_from(["test", "day"]).is_err());
    }

    #[test]
    fn test_format_day() {
        colored::control::set_override(false);
        let color = Color::default();
        let schedules = [
            ScheduleSpan::new(2, date(2024, 4, 10), date(2024, 4, 16), "Trip", color).unwrap(),
            ScheduleSpan::new(12, date(2024, 4, 12), date(2024, 4, 12), "Dentist", color).unwrap(),
        ];
        let expected = format!(
            " #2  2024-04-10 ~ 2024-04-16  Trip\n#12  2024-04-12{}Dentist\n",
            " ".repeat(13 + 2)
        );
        assert_eq!(format_day(&schedules), expected);
    }
}
