use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::series::Series;

/// Trait for series-level imputation strategies
///
/// A strategy derives one scalar statistic from the non-missing values of a
/// column and fills every missing entry with it. Implementations carry no
/// mutable state, so one instance can be reused across tables and threads.
pub trait SeriesImputer: Send + Sync {
    /// Compute the fill value from the non-missing values of the series
    fn fill_value(&self, series: &Series) -> Result<Cell>;

    /// Fill every missing entry with the computed statistic
    ///
    /// Non-missing values pass through unchanged. A series without missing
    /// values is returned as-is and the statistic is not computed.
    fn impute(&self, series: &Series) -> Result<Series> {
        if !series.has_na() {
            return Ok(series.clone());
        }
        let fill = self.fill_value(series)?;
        Ok(series.fillna(fill))
    }
}

/// Fill with the most frequent non-missing value (ties broken by first
/// occurrence). Works for both numeric and categorical columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostFrequentImputer;

impl SeriesImputer for MostFrequentImputer {
    fn fill_value(&self, series: &Series) -> Result<Cell> {
        series.mode()
    }
}

/// Fill with the median of the non-missing values. Numeric columns only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianImputer;

impl SeriesImputer for MedianImputer {
    fn fill_value(&self, series: &Series) -> Result<Cell> {
        series.median().map(Cell::Float)
    }
}

/// Fill with the arithmetic mean of the non-missing values. Numeric columns
/// only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanImputer;

impl SeriesImputer for MeanImputer {
    fn fill_value(&self, series: &Series) -> Result<Cell> {
        series.mean().map(Cell::Float)
    }
}

/// Fill with the q-quantile of the non-missing values (linear
/// interpolation). Numeric columns only.
#[derive(Debug, Clone, Copy)]
pub struct QuantileImputer {
    q: f64,
}

impl QuantileImputer {
    /// Create a quantile imputer; `q` must lie in `[0, 1]`
    pub fn new(q: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&q) {
            return Err(Error::InvalidInput(format!(
                "quantile must be between 0 and 1, got {}",
                q
            )));
        }
        Ok(QuantileImputer { q })
    }

    /// The quantile this imputer fills with
    pub fn q(&self) -> f64 {
        self.q
    }
}

impl SeriesImputer for QuantileImputer {
    fn fill_value(&self, series: &Series) -> Result<Cell> {
        series.quantile(self.q).map(Cell::Float)
    }
}

/// Named imputation strategy, for configuration-driven use
///
/// Parsing an unrecognized name fails with `InvalidStrategy` up front, and
/// [`ImputeStrategy::to_imputer`] validates parameters at construction
/// rather than at fill time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImputeStrategy {
    /// Impute with the most frequent value
    MostFrequent,
    /// Impute with the median
    Median,
    /// Impute with the mean
    Mean,
    /// Impute with an arbitrary quantile
    Quantile(f64),
}

impl ImputeStrategy {
    /// Build the corresponding `SeriesImputer`
    pub fn to_imputer(self) -> Result<Box<dyn SeriesImputer>> {
        Ok(match self {
            ImputeStrategy::MostFrequent => Box::new(MostFrequentImputer),
            ImputeStrategy::Median => Box::new(MedianImputer),
            ImputeStrategy::Mean => Box::new(MeanImputer),
            ImputeStrategy::Quantile(q) => Box::new(QuantileImputer::new(q)?),
        })
    }
}

impl FromStr for ImputeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "most_frequent" => Ok(ImputeStrategy::MostFrequent),
            "median" => Ok(ImputeStrategy::Median),
            "mean" => Ok(ImputeStrategy::Mean),
            other => {
                if let Some(q) = other.strip_prefix("quantile=") {
                    let q: f64 = q
                        .parse()
                        .map_err(|_| Error::InvalidStrategy(other.to_string()))?;
                    return Ok(ImputeStrategy::Quantile(q));
                }
                Err(Error::InvalidStrategy(other.to_string()))
            }
        }
    }
}
