// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calendarun_core::{
    Calendar, CalendarId, Config as CoreConfig, HolidaySet, LaneAssigner, MonthGrid, RenderMap,
    ScheduleSpan, build_year_grid,
};
use jiff::{Zoned, civil::Date};

use crate::config::Config;
use crate::store::ScheduleStore;

/// A month laid out and ready to print.
#[derive(Debug, Clone)]
pub struct RenderedMonth {
    pub grid: MonthGrid,
    pub cells: RenderMap,
    pub schedules: Vec<ScheduleSpan>,
    pub calendar: Option<Calendar>,
}

/// Loaded configuration and schedules.
#[derive(Debug)]
pub struct App {
    config: CoreConfig,
    holidays: HolidaySet,
    store: ScheduleStore,
    today: Date,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        let store = match &config.schedules {
            Some(path) => ScheduleStore::load(path).await?,
            None => ScheduleStore::default(),
        };
        Ok(Self::with_store(config.core, store, Zoned::now().date()))
    }

    pub fn with_store(config: CoreConfig, store: ScheduleStore, today: Date) -> Self {
        let holidays = config.holiday_set();
        tracing::debug!(
            schedules = store.len(),
            holidays = holidays.len(),
            %today,
            "calendar ready"
        );
        Self {
            config,
            holidays,
            store,
            today,
        }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    /// Looks up the calendar selected on the command line.
    pub fn calendar(&self, id: Option<CalendarId>) -> Result<Option<&Calendar>, Box<dyn Error>> {
        match id {
            Some(id) => {
                let calendar = self
                    .store
                    .calendar(id)
                    .ok_or_else(|| format!("No calendar with id {}", id.0))?;
                Ok(Some(calendar))
            }
            None => Ok(None),
        }
    }

    /// Lays out the month containing `month`, optionally for one calendar.
    pub fn render_month(
        &self,
        month: Date,
        calendar: Option<CalendarId>,
    ) -> Result<RenderedMonth, Box<dyn Error>> {
        let calendar = self.calendar(calendar)?;
        let grid = MonthGrid::build(month, &self.holidays)?;
        Ok(self.render(grid, calendar))
    }

    /// Lays out the twelve months of `year`, optionally for one calendar.
    pub fn render_year(
        &self,
        year: i16,
        calendar: Option<CalendarId>,
    ) -> Result<Vec<RenderedMonth>, Box<dyn Error>> {
        let calendar = self.calendar(calendar)?;
        let grids = build_year_grid(year, &self.holidays)?;
        Ok(grids.into_iter().map(|a| self.render(a, calendar)).collect())
    }

    fn render(&self, grid: MonthGrid, calendar: Option<&Calendar>) -> RenderedMonth {
        let (from, to) = grid.visible_range();
        let schedules = self.store.in_range(from, to, calendar.map(Calendar::id));

        // each month is its own surface, so lanes never leak between grids
        let mut assigner = LaneAssigner::new(self.config.max_visible_lanes);
        let cells = assigner.submit(&grid, &schedules);
        RenderedMonth {
            grid,
            cells,
            schedules,
            calendar: calendar.cloned(),
        }
    }
}
