use std::collections::HashMap;

use crate::cell::ColumnType;
use crate::error::{Error, Result};
use crate::series::Series;

/// DataFrame struct: column-oriented 2D data structure
///
/// Columns are named, equal length, and keep their insertion order. Row `i`
/// refers to the same entity across all columns.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    columns: HashMap<String, Series>,
    column_order: Vec<String>,
    row_count: usize,
}

impl DataFrame {
    /// Create a new empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DataFrame from (name, series) pairs, preserving their order
    pub fn from_columns<S, I>(columns: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Series)>,
    {
        let mut df = Self::new();
        for (name, series) in columns {
            df.add_column(name, series)?;
        }
        Ok(df)
    }

    /// Check if the DataFrame contains a column with the given name
    pub fn contains_column(&self, column_name: &str) -> bool {
        self.columns.contains_key(column_name)
    }

    /// Get the number of rows in the DataFrame
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns in the DataFrame
    pub fn column_count(&self) -> usize {
        self.column_order.len()
    }

    /// Add a column to the DataFrame
    ///
    /// The series takes the column name as its own name if it has none.
    pub fn add_column(&mut self, column_name: impl Into<String>, series: Series) -> Result<()> {
        let column_name = column_name.into();
        if self.contains_column(&column_name) {
            return Err(Error::DuplicateColumnName(column_name));
        }

        let series_len = series.len();
        if !self.columns.is_empty() && series_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: series_len,
            });
        }

        let mut series = series;
        if series.name().is_none() {
            series.set_name(column_name.clone());
        }

        self.columns.insert(column_name.clone(), series);
        self.column_order.push(column_name);

        if self.row_count == 0 {
            self.row_count = series_len;
        }

        Ok(())
    }

    /// Replace an existing column with a new series of the same length
    pub fn replace_column(&mut self, column_name: &str, series: Series) -> Result<()> {
        if !self.contains_column(column_name) {
            return Err(Error::column_not_found(column_name));
        }
        if series.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: series.len(),
            });
        }

        let mut series = series;
        if series.name().is_none() {
            series.set_name(column_name.to_string());
        }
        self.columns.insert(column_name.to_string(), series);
        Ok(())
    }

    /// Get column names in insertion order
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }

    /// Get a column from the DataFrame
    pub fn get_column(&self, column_name: &str) -> Result<&Series> {
        self.columns
            .get(column_name)
            .ok_or_else(|| Error::column_not_found(column_name))
    }

    /// Names of all numeric columns, in frame order
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.column_names_of_type(ColumnType::Numeric)
    }

    /// Names of all categorical columns, in frame order
    pub fn categorical_column_names(&self) -> Vec<String> {
        self.column_names_of_type(ColumnType::Categorical)
    }

    fn column_names_of_type(&self, dtype: ColumnType) -> Vec<String> {
        self.column_order
            .iter()
            .filter(|name| self.columns[*name].dtype() == dtype)
            .cloned()
            .collect()
    }

    /// Count of missing values per column, in frame order
    pub fn na_counts(&self) -> Vec<(String, usize)> {
        self.column_order
            .iter()
            .map(|name| (name.clone(), self.columns[name].na_count()))
            .collect()
    }

    /// Total count of missing values across all columns
    pub fn total_na_count(&self) -> usize {
        self.column_order
            .iter()
            .map(|name| self.columns[name].na_count())
            .sum()
    }
}
