// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calendarun_core::CalendarId;
use clap::{ArgMatches, Command};
use jiff::civil::Date;

use crate::app::App;
use crate::arg::{CommonArgs, DateArgs};
use crate::month_view::MonthView;

#[derive(Debug, Clone, Copy)]
pub struct CmdMonth {
    pub month: Option<Date>,
    pub width: usize,
    pub calendar: Option<CalendarId>,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show a month with its schedules")
            .arg(DateArgs::month())
            .arg(CommonArgs::calendar())
            .arg(CommonArgs::width("10"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: DateArgs::get_month(matches),
            width: CommonArgs::get_width(matches),
            calendar: CommonArgs::get_calendar(matches),
        }
    }

    pub fn run(self, app: &App) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month...");
        let month = app.render_month(self.month.unwrap_or(app.today()), self.calendar)?;
        let view = MonthView::new(&month, self.width).with_today(app.today());
        print!("{view}");
        Ok(())
    }
}

impl Default for CmdMonth {
    fn default() -> Self {
        Self {
            month: None,
            width: 10,
            calendar: None,
        }
    }
}
