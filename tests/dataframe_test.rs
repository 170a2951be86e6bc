use fillna::{Cell, DataFrame, Error, Series};

fn sample_df() -> DataFrame {
    DataFrame::from_columns(vec![
        (
            "Neighborhood",
            Series::from_vec(vec!["North", "North", "South"], None).unwrap(),
        ),
        (
            "LotFrontage",
            Series::from_options(vec![Some(60.0), None, Some(80.0)], None).unwrap(),
        ),
    ])
    .unwrap()
}

#[test]
fn test_dataframe_creation() {
    let df = sample_df();
    assert_eq!(df.row_count(), 3);
    assert_eq!(df.column_count(), 2);
    assert_eq!(df.column_names(), ["Neighborhood", "LotFrontage"]);
    assert!(df.contains_column("LotFrontage"));
    assert!(!df.contains_column("SalePrice"));
}

#[test]
fn test_add_column_takes_the_column_name() {
    let df = sample_df();
    let col = df.get_column("LotFrontage").unwrap();
    assert_eq!(col.name(), Some(&"LotFrontage".to_string()));
}

#[test]
fn test_duplicate_column_rejected() {
    let mut df = sample_df();
    let extra = Series::from_vec(vec![1, 2, 3], None).unwrap();
    let err = df.add_column("LotFrontage", extra).unwrap_err();
    assert!(matches!(err, Error::DuplicateColumnName(_)));
}

#[test]
fn test_inconsistent_row_count_rejected() {
    let mut df = sample_df();
    let short = Series::from_vec(vec![1, 2], None).unwrap();
    let err = df.add_column("Short", short).unwrap_err();
    assert!(matches!(
        err,
        Error::InconsistentRowCount {
            expected: 3,
            found: 2
        }
    ));

    let short = Series::from_vec(vec![1, 2], None).unwrap();
    let err = df.replace_column("LotFrontage", short).unwrap_err();
    assert!(matches!(err, Error::InconsistentRowCount { .. }));
}

#[test]
fn test_get_column_not_found() {
    let df = sample_df();
    let err = df.get_column("SalePrice").unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));
    assert!(err.to_string().contains("SalePrice"));
}

#[test]
fn test_column_type_selectors() {
    let df = sample_df();
    assert_eq!(df.numeric_column_names(), vec!["LotFrontage"]);
    assert_eq!(df.categorical_column_names(), vec!["Neighborhood"]);
}

#[test]
fn test_na_counts() {
    let df = sample_df();
    assert_eq!(
        df.na_counts(),
        vec![("Neighborhood".to_string(), 0), ("LotFrontage".to_string(), 1)]
    );
    assert_eq!(df.total_na_count(), 1);
}

#[test]
fn test_replace_column() {
    let mut df = sample_df();
    let filled = df.get_column("LotFrontage").unwrap().fillna(0.0);
    df.replace_column("LotFrontage", filled).unwrap();
    assert_eq!(df.total_na_count(), 0);
    assert_eq!(
        df.get_column("LotFrontage").unwrap().get(1),
        Some(&Cell::Float(0.0))
    );

    let err = df
        .replace_column("SalePrice", Series::from_vec(vec![1, 2, 3], None).unwrap())
        .unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));
}
