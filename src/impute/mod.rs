//! Missing value imputation
//!
//! Two levels of rules:
//! - [`SeriesImputer`]: derives one scalar statistic from a column's
//!   non-missing values and fills every missing entry with it
//!   (most frequent, median, mean, quantile).
//! - [`DataFrameImputer`]: mutates a subset of a table's columns, either
//!   with a literal value ([`ConstantImputer`]), a per-column statistic
//!   ([`StatisticsImputer`]), or a group-conditioned statistic
//!   ([`GroupStatisticImputer`]).
//!
//! [`Pipeline`] chains table rules in order.

mod constant;
mod group;
mod pipeline;
mod selector;
mod statistics;
mod strategy;

pub use constant::ConstantImputer;
pub use group::GroupStatisticImputer;
pub use pipeline::{impute_missing_values, Pipeline};
pub use selector::{verify_columns_exist, ColumnSelector};
pub use statistics::StatisticsImputer;
pub use strategy::{
    ImputeStrategy, MeanImputer, MedianImputer, MostFrequentImputer, QuantileImputer,
    SeriesImputer,
};

use crate::dataframe::DataFrame;
use crate::error::Result;

/// Trait for table-level imputation rules
///
/// A rule mutates the selected columns of the table in place and leaves
/// everything else untouched: rows are never reordered and columns are
/// never added or removed. Rules are immutable after construction, so one
/// instance may be applied to any number of tables.
pub trait DataFrameImputer: Send + Sync {
    /// Fill missing values in the table according to this rule
    fn impute(&self, df: &mut DataFrame) -> Result<()>;
}
