use std::collections::HashMap;

use crate::cell::Cell;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::impute::selector::verify_columns_exist;
use crate::impute::strategy::SeriesImputer;
use crate::impute::DataFrameImputer;
use crate::series::Series;

/// Fill missing target values with a statistic computed per group
///
/// For every missing entry in the target column, the strategy's statistic
/// is computed using only the rows sharing that row's value in the grouping
/// column, and the entry is filled with that group-local statistic.
///
/// Preconditions: both columns must exist, and the grouping column must not
/// contain missing values — ambiguous group membership is an error, never a
/// group of its own. A group whose target values are all missing has no
/// statistic to fill from and fails with `InvalidInput` naming the group.
pub struct GroupStatisticImputer {
    group_feature: String,
    target_feature: String,
    strategy: Box<dyn SeriesImputer>,
}

impl GroupStatisticImputer {
    /// Create a group-conditioned imputer
    pub fn new(
        group_feature: impl Into<String>,
        target_feature: impl Into<String>,
        strategy: impl SeriesImputer + 'static,
    ) -> Self {
        GroupStatisticImputer {
            group_feature: group_feature.into(),
            target_feature: target_feature.into(),
            strategy: Box::new(strategy),
        }
    }
}

impl DataFrameImputer for GroupStatisticImputer {
    fn impute(&self, df: &mut DataFrame) -> Result<()> {
        verify_columns_exist(
            df,
            &[self.group_feature.clone(), self.target_feature.clone()],
        )?;

        let group_col = df.get_column(&self.group_feature)?;
        if group_col.has_na() {
            return Err(Error::InvalidInput(format!(
                "group column '{}' contains missing values",
                self.group_feature
            )));
        }
        let group_values = group_col.values().to_vec();
        let target = df.get_column(&self.target_feature)?.clone();

        // Row indices per group key, groups kept in first-appearance order
        let mut row_indices: HashMap<&Cell, Vec<usize>> = HashMap::new();
        let mut group_order: Vec<&Cell> = Vec::new();
        for (i, key) in group_values.iter().enumerate() {
            row_indices
                .entry(key)
                .or_insert_with(|| {
                    group_order.push(key);
                    Vec::new()
                })
                .push(i);
        }

        let mut new_values = target.values().to_vec();
        for key in group_order {
            let indices = &row_indices[key];
            if !indices.iter().any(|&i| new_values[i].is_na()) {
                continue;
            }

            let sub = Series::from_parts(
                indices.iter().map(|&i| new_values[i].clone()).collect(),
                target.dtype(),
                target.name().cloned(),
            );
            if sub.value_count() == 0 {
                return Err(Error::InvalidInput(format!(
                    "group '{}' of column '{}' has only missing values in '{}'",
                    key, self.group_feature, self.target_feature
                )));
            }
            let fill = self.strategy.fill_value(&sub)?;
            for &i in indices {
                if new_values[i].is_na() {
                    new_values[i] = fill.clone();
                }
            }
        }

        let filled = Series::from_parts(new_values, target.dtype(), target.name().cloned());
        df.replace_column(&self.target_feature, filled)
    }
}
