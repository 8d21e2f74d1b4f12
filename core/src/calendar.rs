// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::Date;

use crate::CalendarError;

/// Identifier of a calendar that schedules can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct CalendarId(pub u64);

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<u64> for CalendarId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A named, inclusive date range inside a calendar, such as a semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    name: String,
    start: Date,
    end: Date,
}

impl Slice {
    /// The name of the slice.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The first day of the slice.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last day of the slice, inclusive.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether the slice covers the given date.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// An unvalidated slice, as read from user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct SliceDraft {
    /// Name of the slice.
    #[serde(default)]
    pub name: String,
    /// First day, required.
    #[serde(default)]
    pub start: Option<Date>,
    /// Last day, required.
    #[serde(default)]
    pub end: Option<Date>,
}

/// A named calendar with optional slices.
///
/// A calendar without slices is a plain default calendar; one with slices
/// spans from its earliest slice start to its latest slice end.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "CalendarRaw")]
pub struct Calendar {
    id: CalendarId,
    name: String,
    slices: Vec<Slice>,
}

impl Calendar {
    /// Creates a calendar, validating its name and every slice.
    pub fn new(
        id: impl Into<CalendarId>,
        name: impl Into<String>,
        slices: impl IntoIterator<Item = SliceDraft>,
    ) -> Result<Self, CalendarError> {
        let id = id.into();
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CalendarError::BlankCalendarName(id));
        }

        let slices = slices
            .into_iter()
            .enumerate()
            .map(|(index, draft)| validate_slice(id, index, draft))
            .collect::<Result<_, _>>()?;

        Ok(Self { id, name, slices })
    }

    /// The identifier of the calendar.
    #[must_use]
    pub fn id(&self) -> CalendarId {
        self.id
    }

    /// The display name of the calendar.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The slices, in declaration order.
    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Whether this is a plain calendar without slices.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.slices.is_empty()
    }

    /// The range from the earliest slice start to the latest slice end.
    #[must_use]
    pub fn span(&self) -> Option<(Date, Date)> {
        let start = self.slices.iter().map(Slice::start).min()?;
        let end = self.slices.iter().map(Slice::end).max()?;
        Some((start, end))
    }

    /// The first declared slice covering `date`.
    #[must_use]
    pub fn slice_on(&self, date: Date) -> Option<&Slice> {
        self.slices.iter().find(|a| a.covers(date))
    }

    /// The slices sharing at least one day with `[from, to]`.
    pub fn slices_within(&self, from: Date, to: Date) -> impl Iterator<Item = &Slice> {
        self.slices
            .iter()
            .filter(move |a| a.start <= to && from <= a.end)
    }
}

fn validate_slice(
    calendar: CalendarId,
    index: usize,
    draft: SliceDraft,
) -> Result<Slice, CalendarError> {
    if draft.name.trim().is_empty() {
        return Err(CalendarError::BlankSliceName { calendar, index });
    }

    let (Some(start), Some(end)) = (draft.start, draft.end) else {
        return Err(CalendarError::MissingSliceDate { calendar, index });
    };

    if end < start {
        return Err(CalendarError::InvalidSlice {
            calendar,
            index,
            start,
            end,
        });
    }

    Ok(Slice {
        name: draft.name,
        start,
        end,
    })
}

#[derive(Debug, serde::Deserialize)]
struct CalendarRaw {
    id: CalendarId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    slices: Vec<SliceDraft>,
}

impl TryFrom<CalendarRaw> for Calendar {
    type Error = CalendarError;

    fn try_from(raw: CalendarRaw) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name, raw.slices)
    }
}
