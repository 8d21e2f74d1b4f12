// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calendarun_core::CalendarId;
use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::civil::Date;

use crate::app::App;
use crate::arg::{CommonArgs, DateArgs};
use crate::month_view::{
    GUTTER_WIDTH, MonthTitle, MonthView, calendar_caption, weekday_header,
};

#[derive(Debug, Clone, Copy)]
pub struct CmdYear {
    pub year: Option<i16>,
    pub width: usize,
    pub calendar: Option<CalendarId>,
}

impl CmdYear {
    pub const NAME: &str = "year";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("y")
            .about("Show the twelve months of a year")
            .arg(DateArgs::year())
            .arg(CommonArgs::calendar())
            .arg(CommonArgs::width("6"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: DateArgs::get_year(matches),
            width: CommonArgs::get_width(matches),
            calendar: CommonArgs::get_calendar(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing year...");
        let year = self.year.unwrap_or(app.today().year());
        let months = app.render_year(year, self.calendar)?;

        let width = self.width * 7;
        println!(
            "{}{}",
            " ".repeat(GUTTER_WIDTH),
            format!("{year:^width$}").bold()
        );
        if let Some(calendar) = app.calendar(self.calendar)? {
            let (from, to) = (Date::new(year, 1, 1)?, Date::new(year, 12, 31)?);
            let caption = calendar_caption(calendar, from, to);
            println!(
                "{}{}",
                " ".repeat(GUTTER_WIDTH),
                format!("{caption:^width$}").italic()
            );
        }
        println!("{}{}", " ".repeat(GUTTER_WIDTH), weekday_header(self.width));
        for month in &months {
            let view = MonthView::new(month, self.width)
                .with_title(MonthTitle::Gutter)
                .with_today(app.today());
            print!("{view}");
        }
        Ok(())
    }
}
