//! fillna - Column-wise missing value imputation for in-memory tables
//!
//! This crate provides a small tabular data model with an explicit missing
//! value marker and a set of composable imputation rules:
//!
//! - [`cell`] - Cell values and column type tags
//! - [`series`] - A single named column supporting missing values
//! - [`dataframe`] - An ordered collection of equal-length columns
//! - [`stats`] - Descriptive statistics used to derive fill values
//! - [`impute`] - Series and table imputation rules plus the pipeline
//!
//! # Example
//!
//! ```
//! use fillna::{DataFrame, Series, MeanImputer, StatisticsImputer, DataFrameImputer};
//!
//! let mut df = DataFrame::from_columns(vec![(
//!     "LotFrontage",
//!     Series::from_options(vec![Some(60.0), None, Some(80.0)], None).unwrap(),
//! )])
//! .unwrap();
//!
//! StatisticsImputer::new("LotFrontage", MeanImputer)
//!     .impute(&mut df)
//!     .unwrap();
//! assert_eq!(df.total_na_count(), 0);
//! ```

pub mod cell;
pub mod dataframe;
pub mod error;
pub mod impute;
pub mod series;
pub mod stats;

pub use cell::{Cell, ColumnType};
pub use dataframe::DataFrame;
pub use error::{Error, Result};
pub use impute::{
    impute_missing_values, verify_columns_exist, ColumnSelector, ConstantImputer,
    DataFrameImputer, GroupStatisticImputer, ImputeStrategy, MeanImputer, MedianImputer,
    MostFrequentImputer, Pipeline, QuantileImputer, SeriesImputer, StatisticsImputer,
};
pub use series::Series;

/// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
