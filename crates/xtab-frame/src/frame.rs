//! Frames: ordered collections of aligned, uniquely named columns

use crate::error::{FrameError, FrameResult};
use crate::Column;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A table of equal-length, uniquely named columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from columns, validating name uniqueness and alignment
    pub fn from_columns<I>(columns: I) -> FrameResult<Self>
    where
        I: IntoIterator<Item = Column>,
    {
        let mut frame = Self::new();
        for column in columns {
            frame.push(column)?;
        }
        Ok(frame)
    }

    /// Append a column, validating against the existing ones
    pub fn push(&mut self, column: Column) -> FrameResult<()> {
        if self.columns.iter().any(|c| c.name() == column.name()) {
            return Err(FrameError::duplicate_column(column.name()));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(FrameError::length_mismatch(
                    column.name(),
                    first.len(),
                    column.len(),
                ));
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> FrameResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| FrameError::column_not_found(name))
    }

    /// Whether a column with this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == name)
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }
}

impl fmt::Display for Frame {
    /// Render as padded text, one row per line, for REPL display
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "(empty frame)");
        }
        let rendered: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.iter().map(|v| v.to_string()).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&rendered)
            .map(|(c, cells)| {
                cells
                    .iter()
                    .map(String::len)
                    .max()
                    .unwrap_or(0)
                    .max(c.name().len())
            })
            .collect();

        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{:>width$}", column.name(), width = widths[i])?;
        }
        for row in 0..self.nrows() {
            writeln!(f)?;
            for (i, cells) in rendered.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", cells[row], width = widths[i])?;
            }
        }
        Ok(())
    }
}
