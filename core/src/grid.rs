// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month grids: the Sunday-first week rows shown by month and year views.

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};

use crate::{CalendarError, HolidayLookup};

/// Number of columns in a week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Classification of a day cell for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday to Friday.
    Weekday,

    /// Saturday.
    Saturday,

    /// Sunday.
    Sunday,

    /// A holiday, whatever day of the week it falls on.
    Holiday,

    /// A day of an adjacent month, shown only to complete a week row.
    Padding,
}

impl DayType {
    fn classify(date: Date, holidays: &impl HolidayLookup) -> Self {
        if holidays.is_holiday(date) {
            return Self::Holiday;
        }

        match date.weekday() {
            Weekday::Sunday => Self::Sunday,
            Weekday::Saturday => Self::Saturday,
            _ => Self::Weekday,
        }
    }

    /// Whether this is a padding day.
    #[must_use]
    pub fn is_padding(self) -> bool {
        self == Self::Padding
    }
}

/// A single day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateCell {
    date: Date,
    day_type: DayType,
}

impl DateCell {
    /// Creates a cell.
    #[must_use]
    pub const fn new(date: Date, day_type: DayType) -> Self {
        Self { date, day_type }
    }

    /// The date of the cell.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// The day type of the cell.
    #[must_use]
    pub const fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Whether the cell belongs to an adjacent month.
    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.day_type.is_padding()
    }
}

/// Seven contiguous cells, Sunday to Saturday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    cells: Vec<DateCell>,
}

impl Week {
    /// Creates a week row.
    ///
    /// # Panics
    ///
    /// If `cells` is not exactly seven consecutive days starting on a Sunday.
    /// Such a row can only come from a defect in the caller.
    #[must_use]
    pub fn new(cells: Vec<DateCell>) -> Self {
        assert_eq!(
            cells.len(),
            DAYS_PER_WEEK,
            "a week row must hold exactly {DAYS_PER_WEEK} cells, got {}",
            cells.len()
        );
        assert_eq!(
            cells[0].date.weekday(),
            Weekday::Sunday,
            "a week row must start on Sunday, got {}",
            cells[0].date
        );
        for pair in cells.windows(2) {
            assert_eq!(
                pair[0].date.tomorrow().ok(),
                Some(pair[1].date),
                "week row cells must be consecutive days: {} then {}",
                pair[0].date,
                pair[1].date
            );
        }

        Self { cells }
    }

    /// The cells, Sunday first.
    #[must_use]
    pub fn cells(&self) -> &[DateCell] {
        &self.cells
    }

    /// The Sunday that opens the row.
    #[must_use]
    pub fn start(&self) -> Date {
        self.cells[0].date
    }

    /// The Saturday that closes the row.
    #[must_use]
    pub fn end(&self) -> Date {
        self.cells[DAYS_PER_WEEK - 1].date
    }

    /// The leftmost cell that is not padding, if any.
    #[must_use]
    pub fn first_visible(&self) -> Option<&DateCell> {
        self.cells.iter().find(|a| !a.is_padding())
    }

    /// The non-padding cells of the row.
    pub fn visible_cells(&self) -> impl Iterator<Item = &DateCell> {
        self.cells.iter().filter(|a| !a.is_padding())
    }

    /// Whether the row holds the non-padding first day of `month`'s month.
    #[must_use]
    pub fn contains_first_of_month(&self, month: Date) -> bool {
        let first = month.first_of_month();
        self.visible_cells().any(|a| a.date == first)
    }
}

/// The week rows of one month, padded with adjacent-month days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: Date,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lays out the month containing `reference`.
    ///
    /// The first row starts on the Sunday on or before the 1st and the last
    /// row ends on the Saturday on or after the last day of the month.
    pub fn build(reference: Date, holidays: &impl HolidayLookup) -> Result<Self, CalendarError> {
        let first = reference.first_of_month();
        let last = reference.last_of_month();

        let leading = i64::from(first.weekday().to_sunday_zero_offset());
        let trailing = 6 - i64::from(last.weekday().to_sunday_zero_offset());
        let grid_start = first
            .checked_sub(leading.days())
            .map_err(|_| CalendarError::OutOfRange(reference))?;
        let grid_end = last
            .checked_add(trailing.days())
            .map_err(|_| CalendarError::OutOfRange(reference))?;

        let cells: Vec<_> = grid_start
            .series(1.day())
            .take_while(|date| *date <= grid_end)
            .map(|date| {
                let day_type = if first <= date && date <= last {
                    DayType::classify(date, holidays)
                } else {
                    DayType::Padding
                };
                DateCell::new(date, day_type)
            })
            .collect();

        let chunks = cells.chunks_exact(DAYS_PER_WEEK);
        assert!(
            chunks.remainder().is_empty(),
            "month grid of {first} left {} dangling cells",
            chunks.remainder().len()
        );
        let weeks: Vec<_> = chunks.map(|a| Week::new(a.to_vec())).collect();

        tracing::debug!(month = %first, weeks = weeks.len(), leading, trailing, "built month grid");
        Ok(Self {
            month: first,
            weeks,
        })
    }

    /// The first day of the laid-out month.
    #[must_use]
    pub fn month(&self) -> Date {
        self.month
    }

    /// The week rows, in date order.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// All cells, padding included, in date order.
    pub fn cells(&self) -> impl Iterator<Item = &DateCell> {
        self.weeks.iter().flat_map(|a| a.cells.iter())
    }

    /// The cell for `date`, if the grid shows it.
    #[must_use]
    pub fn cell(&self, date: Date) -> Option<&DateCell> {
        self.week_index_of(date)
            .and_then(|i| self.weeks[i].cells.iter().find(|a| a.date == date))
    }

    /// The index of the week row showing `date`.
    #[must_use]
    pub fn week_index_of(&self, date: Date) -> Option<usize> {
        self.weeks
            .iter()
            .position(|a| a.start() <= date && date <= a.end())
    }

    /// The first and last dates shown, padding included.
    #[must_use]
    pub fn visible_range(&self) -> (Date, Date) {
        // at least four rows always exist
        (self.weeks[0].start(), self.weeks[self.weeks.len() - 1].end())
    }
}

/// Lays out the twelve months of `year`, January first.
pub fn build_year_grid(
    year: i16,
    holidays: &impl HolidayLookup,
) -> Result<Vec<MonthGrid>, CalendarError> {
    (1..=12)
        .map(|month| MonthGrid::build(Date::new(year, month, 1)?, holidays))
        .collect()
}

/// Parses a `YYYY-MM` literal into the first day of that month.
pub fn parse_month(s: &str) -> Result<Date, CalendarError> {
    let invalid = || CalendarError::InvalidMonth(s.to_string());
    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i16 = year.parse().map_err(|_| invalid())?;
    let month: i8 = month.parse().map_err(|_| invalid())?;
    Date::new(year, month, 1).map_err(|_| invalid())
}
