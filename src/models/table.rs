use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EconError;

/// A single auto-typed cell of the loaded table.
///
/// The loader detects per-cell types the way a generic CSV-to-table parser
/// would: numeric-looking strings (thousands separators allowed) become
/// `Number`, empty cells become `Missing`, everything else stays `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    /// Parse a raw source cell, treating `thousands` as a grouping
    /// separator inside numeric candidates.
    pub fn parse(raw: &str, thousands: Option<char>) -> Cell {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }

        let candidate = match thousands {
            Some(sep) if trimmed.contains(sep) => {
                trimmed.chars().filter(|c| *c != sep).collect::<String>()
            }
            _ => trimmed.to_string(),
        };

        match candidate.parse::<f64>() {
            Ok(n) => Cell::Number(n),
            Err(_) => Cell::Text(trimmed.to_string()),
        }
    }

    /// Numeric value of the cell, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            // Integral values print without a trailing ".0" so identifiers
            // like FIPS codes read naturally.
            Cell::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Missing => Ok(()),
        }
    }
}

/// An in-memory tabular dataset: labeled columns over rows of [`Cell`]s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of a named column, or `FieldNotFound`.
    pub fn column_index(&self, name: &str) -> Result<usize, EconError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| EconError::FieldNotFound(name.to_string()))
    }
}
