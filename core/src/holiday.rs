// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use jiff::civil::Date;

/// Decides whether a date is a holiday.
pub trait HolidayLookup {
    /// Returns `true` if `date` should be styled as a holiday.
    fn is_holiday(&self, date: Date) -> bool;
}

/// A lookup that knows no holidays.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHolidays;

impl HolidayLookup for NoHolidays {
    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

/// A fixed set of holiday dates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HolidaySet(BTreeSet<Date>);

impl HolidaySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday, returning whether it was newly inserted.
    pub fn insert(&mut self, date: Date) -> bool {
        self.0.insert(date)
    }

    /// Number of holidays in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl HolidayLookup for HolidaySet {
    fn is_holiday(&self, date: Date) -> bool {
        self.0.contains(&date)
    }
}

impl<F: Fn(Date) -> bool> HolidayLookup for F {
    fn is_holiday(&self, date: Date) -> bool {
        self(date)
    }
}
