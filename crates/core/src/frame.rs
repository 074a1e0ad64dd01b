//! Logical 14x28 bitmap.
//!
//! A [`Frame`] is a value: build it, hand it to a sink, build the next one.
//! Column `c` bit `r` is the dot at column `c`, row `r` (row 0 on top).

use std::fmt;

use crate::error::{Axis, OutOfRangeSnafu, Result};
use crate::types::{Column, COLUMN_MASK, DISPLAY_COLUMNS, DISPLAY_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    columns: [Column; DISPLAY_COLUMNS],
}

impl Frame {
    /// All dots off.
    pub const fn blank() -> Self {
        Self {
            columns: [0; DISPLAY_COLUMNS],
        }
    }

    /// Wrap raw column values.
    ///
    /// Bits above row 13 are kept as given; the encoder drops them.
    pub const fn from_columns(columns: [Column; DISPLAY_COLUMNS]) -> Self {
        Self { columns }
    }

    /// Take the 28-column window of `stream` starting at `start`.
    ///
    /// Columns past the end of the stream read as blank.
    pub fn from_window(stream: &[Column], start: usize) -> Self {
        let mut columns = [0; DISPLAY_COLUMNS];
        let available = stream.get(start..).unwrap_or(&[]);
        for (dst, src) in columns.iter_mut().zip(available) {
            *dst = *src;
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[Column; DISPLAY_COLUMNS] {
        &self.columns
    }

    pub fn column(&self, col: usize) -> Result<Column> {
        check_column(col)?;
        Ok(self.columns[col])
    }

    pub fn set_column(&mut self, col: usize, value: Column) -> Result<()> {
        check_column(col)?;
        self.columns[col] = value;
        Ok(())
    }

    /// Whether the dot at (`col`, `row`) is flipped on.
    pub fn get(&self, col: usize, row: usize) -> Result<bool> {
        check_column(col)?;
        check_row(row)?;
        Ok(self.columns[col] & (1 << row) != 0)
    }

    pub fn set(&mut self, col: usize, row: usize, on: bool) -> Result<()> {
        check_column(col)?;
        check_row(row)?;
        if on {
            self.columns[col] |= 1 << row;
        } else {
            self.columns[col] &= !(1 << row);
        }
        Ok(())
    }

    pub fn clear(&mut self, col: usize, row: usize) -> Result<()> {
        self.set(col, row, false)
    }

    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|c| c & COLUMN_MASK == 0)
    }

    /// Number of dots that would show as on.
    pub fn lit_count(&self) -> u32 {
        self.columns
            .iter()
            .map(|c| (c & COLUMN_MASK).count_ones())
            .sum()
    }
}

fn check_column(col: usize) -> Result<()> {
    snafu::ensure!(
        col < DISPLAY_COLUMNS,
        OutOfRangeSnafu {
            axis: Axis::Column,
            index: col,
            limit: DISPLAY_COLUMNS,
        }
    );
    Ok(())
}

fn check_row(row: usize) -> Result<()> {
    snafu::ensure!(
        row < DISPLAY_ROWS,
        OutOfRangeSnafu {
            axis: Axis::Row,
            index: row,
            limit: DISPLAY_ROWS,
        }
    );
    Ok(())
}

/// 14 lines of `#` (on) and `.` (off), for logs and assertion output.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..DISPLAY_ROWS {
            for col in self.columns {
                let ch = if col & (1 << row) != 0 { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
            if row + 1 < DISPLAY_ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
