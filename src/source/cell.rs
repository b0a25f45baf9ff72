//! Typed view of a single spreadsheet cell.

use anyhow::{anyhow, Result};
use calamine::Data;

/// A spreadsheet cell reduced to the shapes the importer cares about.
///
/// Whitespace-only text collapses to `Empty`, matching the "absent means
/// unknown" handling of blank cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    pub fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => {
                if s.trim().is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(s.clone())
                }
            }
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) => Cell::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Render the cell as text. Integral numbers drop the trailing `.0` so a
    /// numeric `3` reads back as `"3"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(f) => {
                if f.fract() == 0.0 {
                    Some((*f as i64).to_string())
                } else {
                    Some(f.to_string())
                }
            }
            Cell::Bool(b) => Some(b.to_string()),
        }
    }

    /// Coerce to a float; empty cells are `None`, unparseable cells an error.
    pub fn to_f64(&self, field: &str) -> Result<Option<f64>> {
        match self {
            Cell::Empty => Ok(None),
            Cell::Number(f) => Ok(Some(*f)),
            Cell::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| anyhow!("invalid number for '{}': {:?}", field, s)),
            Cell::Bool(b) => Err(anyhow!("invalid number for '{}': {}", field, b)),
        }
    }

    /// Coerce to an integer; fractional numbers truncate toward zero.
    pub fn to_i64(&self, field: &str) -> Result<Option<i64>> {
        match self {
            Cell::Empty => Ok(None),
            Cell::Number(f) => Ok(Some(*f as i64)),
            Cell::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| anyhow!("invalid integer for '{}': {:?}", field, s)),
            Cell::Bool(b) => Err(anyhow!("invalid integer for '{}': {}", field, b)),
        }
    }
}
