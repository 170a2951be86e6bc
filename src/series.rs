use std::collections::HashMap;

use crate::cell::{Cell, ColumnType};
use crate::error::{Error, Result};
use crate::stats;

/// Series struct: one named column supporting missing values
///
/// The `ColumnType` tag is nominal: it records what the column holds for
/// selection purposes. Imputation may insert a cell of a different type
/// (e.g. a numeric sentinel into a categorical column); the tag is not
/// re-inferred afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// The cell values, missing entries included
    values: Vec<Cell>,
    /// The name of the Series
    name: Option<String>,
    /// Column-level type tag
    dtype: ColumnType,
}

impl Series {
    /// Create a new Series, inferring the type tag from the first
    /// non-missing cell
    ///
    /// A column mixing numeric and text cells is rejected with
    /// `InvalidInput`. A column holding only missing values defaults to
    /// `Categorical`; use [`Series::with_dtype`] to tag it explicitly.
    pub fn new(values: Vec<Cell>, name: Option<String>) -> Result<Self> {
        let dtype = values
            .iter()
            .find_map(|c| c.column_type())
            .unwrap_or(ColumnType::Categorical);
        Self::with_dtype(values, dtype, name)
    }

    /// Create a new Series with an explicit type tag
    ///
    /// Every non-missing cell must match the tag.
    pub fn with_dtype(values: Vec<Cell>, dtype: ColumnType, name: Option<String>) -> Result<Self> {
        for cell in &values {
            if let Some(t) = cell.column_type() {
                if t != dtype {
                    return Err(Error::InvalidInput(format!(
                        "column '{}' mixes numeric and text values",
                        name.as_deref().unwrap_or("<unnamed>")
                    )));
                }
            }
        }
        Ok(Series {
            values,
            name,
            dtype,
        })
    }

    /// Create from a vector of plain values (no missing entries)
    pub fn from_vec<T: Into<Cell>>(values: Vec<T>, name: Option<String>) -> Result<Self> {
        Self::new(values.into_iter().map(Into::into).collect(), name)
    }

    /// Create from a vector of Options (`None` becomes the missing marker)
    pub fn from_options<T: Into<Cell>>(values: Vec<Option<T>>, name: Option<String>) -> Result<Self> {
        Self::new(values.into_iter().map(Cell::from).collect(), name)
    }

    // Construct without re-validating the tag. Used internally where cells
    // may legitimately disagree with the nominal tag after a fill.
    pub(crate) fn from_parts(values: Vec<Cell>, dtype: ColumnType, name: Option<String>) -> Self {
        Series {
            values,
            name,
            dtype,
        }
    }

    /// Get the length of the Series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the Series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get value by position
    pub fn get(&self, pos: usize) -> Option<&Cell> {
        self.values.get(pos)
    }

    /// Get the array of values
    pub fn values(&self) -> &[Cell] {
        &self.values
    }

    /// Get the name
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// Set the name
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the name (mutable reference)
    pub fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    /// Get the column type tag
    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    /// Get the count of missing values
    pub fn na_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_na()).count()
    }

    /// Get the count of non-missing values
    pub fn value_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_value()).count()
    }

    /// Check if there are any missing values
    pub fn has_na(&self) -> bool {
        self.values.iter().any(|v| v.is_na())
    }

    /// Get a boolean array indicating which elements are missing
    pub fn is_na(&self) -> Vec<bool> {
        self.values.iter().map(|v| v.is_na()).collect()
    }

    /// Return a Series with missing values removed
    pub fn dropna(&self) -> Self {
        let filtered: Vec<Cell> = self
            .values
            .iter()
            .filter(|v| v.is_value())
            .cloned()
            .collect();
        Series::from_parts(filtered, self.dtype, self.name.clone())
    }

    /// Fill missing values with a specified cell
    ///
    /// The fill value may be of a different type than the column tag;
    /// non-missing values pass through unchanged.
    pub fn fillna(&self, fill_value: impl Into<Cell>) -> Self {
        let fill = fill_value.into();
        let filled: Vec<Cell> = self
            .values
            .iter()
            .map(|v| match v {
                Cell::Na => fill.clone(),
                _ => v.clone(),
            })
            .collect();
        Series::from_parts(filled, self.dtype, self.name.clone())
    }

    /// Non-missing values as f64
    ///
    /// Fails with `InvalidInput` if the column holds text values.
    pub fn numeric_values(&self) -> Result<Vec<f64>> {
        self.values
            .iter()
            .filter(|v| v.is_value())
            .map(|v| {
                v.as_f64().ok_or_else(|| {
                    Error::InvalidInput(format!("column '{}' is not numeric", self.display_name()))
                })
            })
            .collect()
    }

    /// Calculate the mean of the non-missing values
    pub fn mean(&self) -> Result<f64> {
        stats::mean(&self.non_empty_numeric_values()?)
    }

    /// Calculate the median of the non-missing values
    pub fn median(&self) -> Result<f64> {
        stats::median(&self.non_empty_numeric_values()?)
    }

    /// Calculate the q-quantile of the non-missing values (linear
    /// interpolation)
    pub fn quantile(&self, q: f64) -> Result<f64> {
        stats::quantile(&self.non_empty_numeric_values()?, q)
    }

    /// The most frequent non-missing value, ties broken by first occurrence
    /// in row order
    ///
    /// Fails with `InvalidInput` when there are no non-missing values to
    /// derive a mode from.
    pub fn mode(&self) -> Result<Cell> {
        let mut counts: HashMap<&Cell, usize> = HashMap::new();
        for cell in self.values.iter().filter(|v| v.is_value()) {
            *counts.entry(cell).or_insert(0) += 1;
        }
        if counts.is_empty() {
            return Err(Error::InvalidInput(format!(
                "column '{}' has no non-missing values to compute a mode from",
                self.display_name()
            )));
        }

        let mut best: Option<(&Cell, usize)> = None;
        for cell in self.values.iter().filter(|v| v.is_value()) {
            let count = counts[cell];
            if best.map_or(true, |(_, n)| count > n) {
                best = Some((cell, count));
            }
        }
        // counts is non-empty, so best is set
        Ok(best.map(|(c, _)| c.clone()).unwrap_or(Cell::Na))
    }

    fn non_empty_numeric_values(&self) -> Result<Vec<f64>> {
        let values = self.numeric_values()?;
        if values.is_empty() {
            return Err(Error::InvalidInput(format!(
                "column '{}' has no non-missing values to compute a statistic from",
                self.display_name()
            )));
        }
        Ok(values)
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}
