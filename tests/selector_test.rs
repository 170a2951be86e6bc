use fillna::{verify_columns_exist, ColumnSelector, DataFrame, Error, Series};

fn sample_df() -> DataFrame {
    DataFrame::from_columns(vec![
        ("A", Series::from_vec(vec![1, 2], None).unwrap()),
        ("Cat", Series::from_vec(vec!["x", "y"], None).unwrap()),
    ])
    .unwrap()
}

#[test]
fn test_verify_columns_exist_lists_only_missing_names() {
    let df = sample_df();
    assert!(verify_columns_exist(&df, &["A".to_string()]).is_ok());

    let err = verify_columns_exist(&df, &["A".to_string(), "B".to_string()]).unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(ref names) if names == &["B"]));
    let message = err.to_string();
    assert!(message.contains("B"));
    assert!(!message.contains("A"));
}

#[test]
fn test_verify_columns_exist_reports_every_missing_name() {
    let df = sample_df();
    let err = verify_columns_exist(
        &df,
        &["X".to_string(), "A".to_string(), "Y".to_string()],
    )
    .unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(ref names) if names == &["X", "Y"]));
}

#[test]
fn test_selector_normalizes_single_name() {
    let df = sample_df();
    let selector: ColumnSelector = "A".into();
    assert_eq!(selector.resolve(&df).unwrap(), vec!["A"]);
}

#[test]
fn test_selector_preserves_collection_order() {
    let df = sample_df();
    let selector: ColumnSelector = vec!["Cat", "A"].into();
    assert_eq!(selector.resolve(&df).unwrap(), vec!["Cat", "A"]);
}

#[test]
fn test_selector_rejects_empty_collection() {
    let df = sample_df();
    let selector = ColumnSelector::Names(Vec::new());
    assert!(matches!(selector.resolve(&df), Err(Error::EmptyColumnList)));
}

#[test]
fn test_type_tag_selectors() {
    let df = sample_df();
    assert_eq!(ColumnSelector::Numeric.resolve(&df).unwrap(), vec!["A"]);
    assert_eq!(
        ColumnSelector::Categorical.resolve(&df).unwrap(),
        vec!["Cat"]
    );
}
