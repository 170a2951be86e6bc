use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Column-level type tag
///
/// Every column carries one of these tags so that "all numeric columns" or
/// "all categorical columns" can be used as a selector without inspecting
/// cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Integer or floating point values
    Numeric,
    /// Text values
    Categorical,
}

/// A single cell of a column
///
/// Missing values are represented by the dedicated `Na` variant rather than
/// by an in-band sentinel, so `0`, `0.0` and `""` are all valid data.
/// `NaN` is never stored; missing numeric data is `Na`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value marker
    Na,
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Str(String),
}

impl Cell {
    /// Check if the cell is missing
    pub fn is_na(&self) -> bool {
        matches!(self, Cell::Na)
    }

    /// Check if the cell holds a value
    pub fn is_value(&self) -> bool {
        !self.is_na()
    }

    /// Check if the cell holds a numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }

    /// Get the numeric value as f64 (if the cell holds one)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the text value (if the cell holds one)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The `ColumnType` this cell belongs to, or `None` for a missing cell
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Cell::Na => None,
            Cell::Int(_) | Cell::Float(_) => Some(ColumnType::Numeric),
            Cell::Str(_) => Some(ColumnType::Categorical),
        }
    }
}

// NaN is never stored, so float equality is total here
impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Cell::Na => 0u8.hash(state),
            Cell::Int(v) => {
                1u8.hash(state);
                v.hash(state);
            }
            Cell::Float(v) => {
                2u8.hash(state);
                // 0.0 == -0.0 must hash identically
                let v = if *v == 0.0 { 0.0f64 } else { *v };
                v.to_bits().hash(state);
            }
            Cell::Str(s) => {
                3u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Na => write!(f, "NA"),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Str(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Str(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Cell::Na,
        }
    }
}
