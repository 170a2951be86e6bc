use fillna::{
    impute_missing_values, Cell, ConstantImputer, DataFrame, DataFrameImputer,
    GroupStatisticImputer, MeanImputer, MostFrequentImputer, Pipeline, Series,
    StatisticsImputer,
};

fn order_sensitive_df() -> DataFrame {
    DataFrame::from_columns(vec![
        (
            "Group",
            Series::from_vec(vec!["A", "A", "B", "B"], None).unwrap(),
        ),
        (
            "Value",
            Series::from_options(vec![Some(1.0), None, Some(3.0), None], None).unwrap(),
        ),
        (
            "Constant",
            Series::from_options::<i64>(vec![None, None, None, None], None).unwrap(),
        ),
    ])
    .unwrap()
}

#[test]
fn test_pipeline_applies_stages_in_order() {
    let mut df = order_sensitive_df();

    Pipeline::new()
        .with_stage(GroupStatisticImputer::new("Group", "Value", MeanImputer))
        .with_stage(ConstantImputer::new("Constant", 0))
        .run(&mut df)
        .unwrap();

    assert_eq!(
        df.get_column("Value").unwrap().values(),
        [
            Cell::Float(1.0),
            Cell::Float(1.0),
            Cell::Float(3.0),
            Cell::Float(3.0)
        ]
    );
    assert_eq!(
        df.get_column("Constant").unwrap().values(),
        [Cell::Int(0), Cell::Int(0), Cell::Int(0), Cell::Int(0)]
    );
    assert_eq!(df.total_na_count(), 0);
}

#[test]
fn test_pipeline_later_stages_see_earlier_fills() {
    // A statistic computed after a constant fill includes the filled values
    let mut df = DataFrame::from_columns(vec![(
        "Value",
        Series::from_options(vec![Some(4.0), None, None], None).unwrap(),
    )])
    .unwrap();

    Pipeline::new()
        .with_stage(ConstantImputer::new("Value", 2.0))
        .with_stage(StatisticsImputer::new("Value", MeanImputer))
        .run(&mut df)
        .unwrap();
    assert_eq!(
        df.get_column("Value").unwrap().values(),
        [Cell::Float(4.0), Cell::Float(2.0), Cell::Float(2.0)]
    );

    // Reversed order: the mean is derived from the one non-missing value
    let mut df = DataFrame::from_columns(vec![(
        "Value",
        Series::from_options(vec![Some(4.0), None, None], None).unwrap(),
    )])
    .unwrap();

    Pipeline::new()
        .with_stage(StatisticsImputer::new("Value", MeanImputer))
        .with_stage(ConstantImputer::new("Value", 2.0))
        .run(&mut df)
        .unwrap();
    assert_eq!(
        df.get_column("Value").unwrap().values(),
        [Cell::Float(4.0), Cell::Float(4.0), Cell::Float(4.0)]
    );
}

#[test]
fn test_single_rule_runs_without_a_pipeline() {
    let mut df = order_sensitive_df();
    ConstantImputer::new("Constant", 0).impute(&mut df).unwrap();
    assert_eq!(df.get_column("Constant").unwrap().na_count(), 0);
}

#[test]
fn test_pipelines_compose() {
    let inner = Pipeline::new()
        .with_stage(GroupStatisticImputer::new("Group", "Value", MeanImputer))
        .with_stage(ConstantImputer::new("Constant", 0));
    let outer = Pipeline::new()
        .with_stage(inner)
        .with_stage(StatisticsImputer::new("Group", MostFrequentImputer));

    assert_eq!(outer.len(), 2);
    let mut df = order_sensitive_df();
    outer.run(&mut df).unwrap();
    assert_eq!(df.total_na_count(), 0);
}

#[test]
fn test_failing_stage_aborts_but_keeps_earlier_fills() {
    let mut df = order_sensitive_df();

    let result = Pipeline::new()
        .with_stage(ConstantImputer::new("Constant", 0))
        .with_stage(ConstantImputer::new("NoSuchColumn", 0))
        .with_stage(ConstantImputer::new("Value", 0.0))
        .run(&mut df);

    assert!(result.is_err());
    // The first stage's fills remain; the stage after the failure never ran
    assert_eq!(df.get_column("Constant").unwrap().na_count(), 0);
    assert_eq!(df.get_column("Value").unwrap().na_count(), 2);
}

#[test]
fn test_impute_missing_values_entry_point() {
    let mut df = order_sensitive_df();
    let imputers: Vec<Box<dyn DataFrameImputer>> = vec![
        Box::new(GroupStatisticImputer::new("Group", "Value", MeanImputer)),
        Box::new(ConstantImputer::new("Constant", 0)),
    ];
    impute_missing_values(&mut df, &imputers).unwrap();
    assert_eq!(df.total_na_count(), 0);
}

#[test]
fn test_pipeline_from_iterator() {
    let stages: Vec<Box<dyn DataFrameImputer>> = vec![
        Box::new(ConstantImputer::new("Constant", 0)),
        Box::new(GroupStatisticImputer::new("Group", "Value", MeanImputer)),
    ];
    let pipeline: Pipeline = stages.into_iter().collect();
    assert_eq!(pipeline.len(), 2);

    let mut df = order_sensitive_df();
    pipeline.run(&mut df).unwrap();
    assert_eq!(df.total_na_count(), 0);
}

#[test]
fn test_empty_pipeline_is_a_no_op() {
    let mut df = order_sensitive_df();
    let before = df.total_na_count();
    Pipeline::new().run(&mut df).unwrap();
    assert!(Pipeline::new().is_empty());
    assert_eq!(df.total_na_count(), before);
}
