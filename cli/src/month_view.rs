// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fmt;

use calendarun_core::{
    Calendar, DateCell, DayType, LaneSlot, ScheduleId, ScheduleSpan, Slice, Week,
};
use colored::{ColoredString, Colorize};
use jiff::civil::Date;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::RenderedMonth;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Width of the month label printed left of each row in the year view.
pub const GUTTER_WIDTH: usize = 5;

/// How the month is identified in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthTitle {
    /// A centered `April 2024` heading above the weekday names.
    Heading,
    /// A short month name in a gutter, on the row holding the 1st.
    Gutter,
}

/// Terminal rendering of a laid-out month.
pub struct MonthView<'a> {
    month: &'a RenderedMonth,
    names: HashMap<ScheduleId, &'a ScheduleSpan>,
    today: Option<Date>,
    cell_width: usize,
    title: MonthTitle,
}

impl<'a> MonthView<'a> {
    pub fn new(month: &'a RenderedMonth, cell_width: usize) -> Self {
        let names = month.schedules.iter().map(|a| (a.id(), a)).collect();
        Self {
            month,
            names,
            today: None,
            cell_width: cell_width.max(2),
            title: MonthTitle::Heading,
        }
    }

    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_title(mut self, title: MonthTitle) -> Self {
        self.title = title;
        self
    }

    fn write_heading(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.grid.month();
        let title = month.strftime("%B %Y").to_string();
        let width = self.cell_width * WEEKDAYS.len();
        writeln!(f, "{}", format!("{title:^width$}").bold())?;
        if let Some(calendar) = &self.month.calendar {
            let (from, to) = (month.first_of_month(), month.last_of_month());
            let caption = calendar_caption(calendar, from, to);
            writeln!(f, "{}", format!("{caption:^width$}").italic())?;
        }
        writeln!(f, "{}", weekday_header(self.cell_width))
    }

    fn write_week(&self, f: &mut fmt::Formatter<'_>, week: &Week) -> fmt::Result {
        let month = self.month.grid.month();
        if self.title == MonthTitle::Gutter {
            let label = if week.contains_first_of_month(month) {
                month.strftime("%b").to_string()
            } else {
                String::new()
            };
            write!(f, "{}", fit(&label, GUTTER_WIDTH).bold())?;
        }
        for cell in week.cells() {
            write!(f, "{}", self.day_number(cell))?;
        }
        writeln!(f)?;

        let lanes = self
            .month
            .cells
            .get(&week.start())
            .map_or(0, |a| a.slots().len());
        for lane in 0..lanes {
            let used = week.cells().iter().any(|a| self.slot_at(a.date(), lane));
            if !used {
                continue;
            }

            if self.title == MonthTitle::Gutter {
                write!(f, "{}", " ".repeat(GUTTER_WIDTH))?;
            }
            for segment in self.lane_row(week, lane) {
                write!(f, "{segment}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn slot_at(&self, date: Date, lane: usize) -> bool {
        self.month
            .cells
            .get(&date)
            .and_then(|a| a.lane(lane))
            .is_some()
    }

    fn day_number(&self, cell: &DateCell) -> ColoredString {
        if cell.is_padding() {
            return " ".repeat(self.cell_width).normal();
        }

        let text = fit(&format!("{:>2}", cell.date().day()), self.cell_width);
        let text = match cell.day_type() {
            DayType::Sunday | DayType::Holiday => text.red(),
            DayType::Saturday => text.blue(),
            _ => text.normal(),
        };
        if self.today == Some(cell.date()) {
            text.bold().underline()
        } else {
            text
        }
    }

    /// One lane of a week row. A label runs on across the following cells
    /// of the same bar.
    fn lane_row(&self, week: &Week, lane: usize) -> Vec<ColoredString> {
        let slots: Vec<Option<&LaneSlot>> = week
            .cells()
            .iter()
            .map(|a| self.month.cells.get(&a.date()).and_then(|b| b.lane(lane)))
            .collect();

        let mut segments = Vec::with_capacity(slots.len());
        let mut column = 0;
        while column < slots.len() {
            let Some(slot) = slots[column] else {
                segments.push(" ".repeat(self.cell_width).normal());
                column += 1;
                continue;
            };

            let run = slots[column..]
                .iter()
                .take_while(|a| a.is_some_and(|b| b.schedule_id == slot.schedule_id))
                .count();
            let label = match self.names.get(&slot.schedule_id) {
                Some(schedule) if slot.is_label_visible => schedule.text(),
                _ => "",
            };
            let (r, g, b) = slot.color.channels();
            for part in spread(label, self.cell_width, run) {
                segments.push(part.white().on_truecolor(r, g, b));
            }
            column += run;
        }
        segments
    }
}

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title == MonthTitle::Heading {
            self.write_heading(f)?;
        }
        for week in self.month.grid.weeks() {
            self.write_week(f, week)?;
        }
        Ok(())
    }
}

/// Weekday names, each fitted to `cell_width` columns.
pub fn weekday_header(cell_width: usize) -> String {
    WEEKDAYS.iter().map(|a| fit(a, cell_width)).collect()
}

/// The calendar name, followed by its slices overlapping `[from, to]`.
pub fn calendar_caption(calendar: &Calendar, from: Date, to: Date) -> String {
    let slices: Vec<_> = calendar.slices_within(from, to).map(Slice::name).collect();
    if slices.is_empty() {
        calendar.name().to_string()
    } else {
        format!("{} ({})", calendar.name(), slices.join(", "))
    }
}

/// Splits `text` over `cells` cells of `width` columns each, never breaking
/// a character across two cells.
pub fn spread(text: &str, width: usize, cells: usize) -> Vec<String> {
    let mut parts = Vec::with_capacity(cells);
    let mut current = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            if parts.len() + 1 >= cells {
                break;
            }
            parts.push(fit(&current, width));
            current.clear();
            used = 0;
        }
        current.push(c);
        used += w;
    }
    parts.push(fit(&current, width));
    parts.resize(cells, " ".repeat(width));
    parts
}

/// Cuts `text` to at most `width` display columns, then pads it with spaces.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - out.width().min(width)));
    out
}

#[cfg(test)]
mod tests {
    use calendarun_core::{Color, HolidaySet, LaneAssigner, MonthGrid, SliceDraft};
    use jiff::civil::date;

    use super::*;

    fn render(month: Date, schedules: Vec<ScheduleSpan>) -> RenderedMonth {
        let grid = MonthGrid::build(month, &HolidaySet::default()).unwrap();
        let cells = LaneAssigner::new(3).submit(&grid, &schedules);
        RenderedMonth {
            grid,
            cells,
            schedules,
            calendar: None,
        }
    }

    fn trip() -> ScheduleSpan {
        let (start, end) = (date(2024, 4, 10), date(2024, 4, 16));
        ScheduleSpan::new(1, start, end, "Trip", Color::default()).unwrap()
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Trip", 6), "Trip  ");
        assert_eq!(fit("Birthday", 4), "Birt");
        assert_eq!(fit("日本語", 5), "日本 ");
        assert_eq!(fit("", 2), "  ");
    }

    #[test]
    fn test_spread() {
        assert_eq!(spread("Conference", 4, 3), vec!["Conf", "eren", "ce  "]);
        assert_eq!(spread("Trip", 4, 3), vec!["Trip", "    ", "    "]);
        assert_eq!(spread("Conference", 2, 2), vec!["Co", "nf"]);
        assert_eq!(spread("日本語", 3, 2), vec!["日 ", "本 "]);
        assert_eq!(spread("Trip", 6, 1), vec![fit("Trip", 6)]);
    }

    #[test]
    fn test_weekday_header() {
        assert_eq!(weekday_header(4), "Sun Mon Tue Wed Thu Fri Sat ");
    }

    #[test]
    fn test_month_skips_empty_lanes() {
        colored::control::set_override(false);
        let month = render(date(2024, 4, 1), vec![trip()]);
        let out = MonthView::new(&month, 6).to_string();

        // heading, weekdays, five rows, one lane under each of the two rows the trip spans
        assert_eq!(out.lines().count(), 2 + 5 + 2);
        assert!(out.lines().next().unwrap().contains("April 2024"));
        assert_eq!(out.matches("Trip").count(), 2);
    }

    #[test]
    fn test_padding_days_are_blank() {
        colored::control::set_override(false);
        let month = render(date(2024, 4, 1), Vec::new());
        let out = MonthView::new(&month, 3).to_string();
        let first_row = out.lines().nth(2).unwrap();
        assert!(first_row.starts_with("    1  2"));
        assert!(!out.contains("31"));
    }

    #[test]
    fn test_gutter_marks_first_row() {
        colored::control::set_override(false);
        let month = render(date(2024, 4, 1), Vec::new());
        let out = MonthView::new(&month, 3)
            .with_title(MonthTitle::Gutter)
            .with_today(date(2024, 4, 2))
            .to_string();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Apr  "));
        assert!(lines[1].starts_with("     "));
    }

    #[test]
    fn test_label_runs_on_across_the_bar() {
        colored::control::set_override(false);
        let (start, end) = (date(2024, 4, 10), date(2024, 4, 13));
        let conference = ScheduleSpan::new(2, start, end, "Conference", Color::default()).unwrap();
        let month = render(date(2024, 4, 1), vec![conference]);
        let out = MonthView::new(&month, 2).to_string();

        // Apr 10 is the fourth cell of its row
        assert!(out.lines().any(|a| a == format!("{}Conferen", " ".repeat(6))));
    }

    #[test]
    fn test_calendar_caption() {
        colored::control::set_override(false);
        let spring = SliceDraft {
            name: "Spring".to_string(),
            start: Some(date(2024, 2, 26)),
            end: Some(date(2024, 6, 30)),
        };
        let calendar = Calendar::new(1, "School", [spring]).unwrap();
        assert_eq!(
            calendar_caption(&calendar, date(2024, 4, 1), date(2024, 4, 30)),
            "School (Spring)"
        );
        assert_eq!(
            calendar_caption(&calendar, date(2024, 8, 1), date(2024, 8, 31)),
            "School"
        );

        let mut month = render(date(2024, 4, 1), Vec::new());
        month.calendar = Some(calendar);
        let out = MonthView::new(&month, 4).to_string();
        assert_eq!(out.lines().nth(1).map(str::trim), Some("School (Spring)"));
    }
}
