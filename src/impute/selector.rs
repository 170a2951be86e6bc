use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Verify that every requested column exists in the DataFrame
///
/// Fails with a single `ColumnNotFound` enumerating all absent names, not
/// just the first one.
pub fn verify_columns_exist(df: &DataFrame, names: &[String]) -> Result<()> {
    let missing: Vec<String> = names
        .iter()
        .filter(|name| !df.contains_column(name))
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::ColumnNotFound(missing))
    }
}

/// Which columns a table-level imputer acts on
///
/// A single name or a collection of names is normalized here, at the
/// boundary; imputers only ever see the resolved ordered list. The
/// `Numeric` and `Categorical` variants select every column with that tag,
/// in frame order.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSelector {
    /// One column by name
    Name(String),
    /// Several columns by name
    Names(Vec<String>),
    /// Every numeric column
    Numeric,
    /// Every categorical column
    Categorical,
}

impl ColumnSelector {
    /// Resolve to an ordered list of existing column names
    ///
    /// An explicitly empty name collection fails with `EmptyColumnList`;
    /// absent names fail with `ColumnNotFound` listing all of them. The
    /// type-tag selectors resolve to whatever columns carry the tag, which
    /// may be none.
    pub fn resolve(&self, df: &DataFrame) -> Result<Vec<String>> {
        match self {
            ColumnSelector::Name(name) => {
                let names = vec![name.clone()];
                verify_columns_exist(df, &names)?;
                Ok(names)
            }
            ColumnSelector::Names(names) => {
                if names.is_empty() {
                    return Err(Error::EmptyColumnList);
                }
                verify_columns_exist(df, names)?;
                Ok(names.clone())
            }
            ColumnSelector::Numeric => Ok(df.numeric_column_names()),
            ColumnSelector::Categorical => Ok(df.categorical_column_names()),
        }
    }
}

impl From<&str> for ColumnSelector {
    fn from(name: &str) -> Self {
        ColumnSelector::Name(name.to_string())
    }
}

impl From<String> for ColumnSelector {
    fn from(name: String) -> Self {
        ColumnSelector::Name(name)
    }
}

impl From<Vec<String>> for ColumnSelector {
    fn from(names: Vec<String>) -> Self {
        ColumnSelector::Names(names)
    }
}

impl From<Vec<&str>> for ColumnSelector {
    fn from(names: Vec<&str>) -> Self {
        ColumnSelector::Names(names.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ColumnSelector {
    fn from(names: &[&str]) -> Self {
        ColumnSelector::Names(names.iter().map(|s| s.to_string()).collect())
    }
}
