use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::impute::selector::ColumnSelector;
use crate::impute::strategy::SeriesImputer;
use crate::impute::DataFrameImputer;

/// Fill each selected column independently with a statistic computed from
/// that column's own non-missing values
///
/// No grouping is involved; strategy-level failures (a non-numeric column
/// for a numeric statistic, or a column with no non-missing values)
/// propagate unchanged.
pub struct StatisticsImputer {
    selector: ColumnSelector,
    strategy: Box<dyn SeriesImputer>,
}

impl StatisticsImputer {
    /// Create a statistics imputer over the selected columns
    pub fn new(
        selector: impl Into<ColumnSelector>,
        strategy: impl SeriesImputer + 'static,
    ) -> Self {
        Self::with_boxed(selector, Box::new(strategy))
    }

    /// Create from an already boxed strategy (e.g. from
    /// [`ImputeStrategy::to_imputer`](crate::ImputeStrategy::to_imputer))
    pub fn with_boxed(selector: impl Into<ColumnSelector>, strategy: Box<dyn SeriesImputer>) -> Self {
        StatisticsImputer {
            selector: selector.into(),
            strategy,
        }
    }
}

impl DataFrameImputer for StatisticsImputer {
    fn impute(&self, df: &mut DataFrame) -> Result<()> {
        for name in self.selector.resolve(df)? {
            let filled = self.strategy.impute(df.get_column(&name)?)?;
            df.replace_column(&name, filled)?;
        }
        Ok(())
    }
}
