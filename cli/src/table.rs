// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

pub struct Table<'a, S: TableStyle, T, C: TableColumn<T>> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, T, C: TableColumn<T>> Table<'a, S, T, C> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, T, C: TableColumn<T>> fmt::Display for Table<'_, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

/// Aligned plain-text rows, one record per line.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self { separator: "  " }
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let cells: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let mut widths = vec![0; columns.len()];
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        for (i, (row, record)) in cells.iter().zip(data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, (col, cell)) in columns.iter().zip(row).enumerate() {
                let last = j == columns.len() - 1;
                let fill = " ".repeat(widths[j].saturating_sub(cell.width()));
                let padded = match col.padding_direction() {
                    PaddingDirection::Left if last => cell.to_string(),
                    PaddingDirection::Left => format!("{cell}{fill}"),
                    PaddingDirection::Right => format!("{fill}{cell}"),
                };
                match col.get_color(record) {
                    Some(color) => write!(f, "{}", padded.color(color))?,
                    None => write!(f, "{padded}")?,
                }
                if !last {
                    write!(f, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }
}

/// An array of objects keyed by column name.
#[derive(Debug, Clone)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| {
                        let key = col.name().to_lowercase().replace(' ', "_");
                        (key, col.format(row).into_owned().into())
                    })
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}
