// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::DateCell;

/// The selected day of a calendar surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DaySelection {
    /// No day is selected.
    #[default]
    Unselected,

    /// The given day is selected.
    Selected(Date),
}

/// What a click on a day cell means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A padding day was clicked, nothing happens.
    Ignored,

    /// A new day was selected.
    Primary(Date),

    /// The already selected day was clicked again.
    Secondary(Date),
}

impl DaySelection {
    /// The selected date, if any.
    #[must_use]
    pub fn date(&self) -> Option<Date> {
        match self {
            Self::Unselected => None,
            Self::Selected(date) => Some(*date),
        }
    }

    /// Applies a click on `cell` and reports which callback it triggers.
    pub fn click(&mut self, cell: &DateCell) -> ClickOutcome {
        if cell.is_padding() {
            return ClickOutcome::Ignored;
        }

        let date = cell.date();
        match *self {
            Self::Selected(selected) if selected == date => ClickOutcome::Secondary(date),
            _ => {
                *self = Self::Selected(date);
                ClickOutcome::Primary(date)
            }
        }
    }
}
