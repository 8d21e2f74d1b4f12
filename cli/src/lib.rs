// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal front end of calendarun: month, year and day views of multi-day schedules.

mod app;
mod arg;
mod cli;
mod cmd_day;
mod cmd_month;
mod cmd_year;
mod config;
mod month_view;
mod store;
mod table;

pub use crate::{
    cli::{Cli, Commands, run},
    config::Config,
};
