use crate::cell::Cell;
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::impute::selector::ColumnSelector;
use crate::impute::DataFrameImputer;

/// Replace every missing entry in the selected columns with a literal value
///
/// The fill value's type need not match the columns' nominal type: a
/// numeric column may be filled with `0` and a categorical column with a
/// sentinel string, or vice versa.
#[derive(Debug, Clone)]
pub struct ConstantImputer {
    selector: ColumnSelector,
    fill_value: Cell,
}

impl ConstantImputer {
    /// Create a constant imputer over a single name, a name collection, or
    /// a type-tag selector
    pub fn new(selector: impl Into<ColumnSelector>, fill_value: impl Into<Cell>) -> Self {
        ConstantImputer {
            selector: selector.into(),
            fill_value: fill_value.into(),
        }
    }
}

impl DataFrameImputer for ConstantImputer {
    fn impute(&self, df: &mut DataFrame) -> Result<()> {
        for name in self.selector.resolve(df)? {
            let filled = df.get_column(&name)?.fillna(self.fill_value.clone());
            df.replace_column(&name, filled)?;
        }
        Ok(())
    }
}
