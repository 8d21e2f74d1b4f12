// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// Rows of `data`, one column per entry in `columns`, aligned by display width.
pub struct Table<'a, T, C: Column<T>> {
    pub columns: &'a [C],
    pub separator: &'a str,
    pub data: &'a [T],
}

impl<T, C: Column<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|item| self.columns.iter().map(|col| col.format(item)).collect())
            .collect();
        let widths = get_column_max_width(&rows, self.columns.len());

        for (cells, item) in rows.into_iter().zip(self.data) {
            let last = self.columns.len().saturating_sub(1);
            for (j, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let cell = match col.padding_direction() {
                    // the last column does not need padding if it's left-aligned
                    PaddingDirection::Left if j == last => cell,
                    direction => pad(&cell, widths[j], direction),
                };
                match col.get_color(item) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }

                if j < last {
                    write!(f, "{}", self.separator)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn get_color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: &str, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn get_column_max_width(rows: &[Vec<String>], columns: usize) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    enum RowColumn {
        Word,
        Tail,
    }

    impl Column<Row> for RowColumn {
        fn format(&self, data: &Row) -> String {
            match self {
                RowColumn::Word => data.0.to_string(),
                RowColumn::Tail => data.1.to_string(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            match self {
                RowColumn::Word => PaddingDirection::Right,
                RowColumn::Tail => PaddingDirection::Left,
            }
        }

        fn get_color(&self, _data: &Row) -> Option<Color> {
            None
        }
    }

    #[test]
    fn aligns_by_display_width() {
        let columns = [RowColumn::Word, RowColumn::Tail];
        let data = [Row("1", "one"), Row("12", "twelve"), Row("旅", "trip")];
        let table = Table {
            columns: &columns,
            separator: " | ",
            data: &data,
        };
        assert_eq!(table.to_string(), " 1 | one\n12 | twelve\n旅 | trip\n");
    }

    #[test]
    fn empty_table_prints_nothing() {
        let columns = [RowColumn::Word];
        let data: [Row; 0] = [];
        let table = Table {
            columns: &columns,
            separator: " ",
            data: &data,
        };
        assert_eq!(table.to_string(), "");
    }
}
