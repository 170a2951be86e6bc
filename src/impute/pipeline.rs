use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::impute::DataFrameImputer;

/// An ordered sequence of table-level imputation rules
///
/// Stages run strictly left to right; a later stage sees the fills applied
/// by earlier ones, so order is semantically significant. The first failing
/// stage aborts the run — because stages mutate the table in place, fills
/// applied before the failure remain in the caller's table, and the caller
/// decides whether to keep or discard it.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn DataFrameImputer>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Pipeline { stages: Vec::new() }
    }

    /// Add a stage, builder style
    pub fn with_stage(mut self, stage: impl DataFrameImputer + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Add a stage
    pub fn add_stage(&mut self, stage: impl DataFrameImputer + 'static) {
        self.stages.push(Box::new(stage));
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Apply every stage in order
    pub fn run(&self, df: &mut DataFrame) -> Result<()> {
        for stage in &self.stages {
            stage.impute(df)?;
        }
        Ok(())
    }
}

// A pipeline is itself a table rule, so pipelines compose and any API that
// accepts one rule accepts a whole sequence.
impl DataFrameImputer for Pipeline {
    fn impute(&self, df: &mut DataFrame) -> Result<()> {
        self.run(df)
    }
}

impl FromIterator<Box<dyn DataFrameImputer>> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Box<dyn DataFrameImputer>>>(iter: I) -> Self {
        Pipeline {
            stages: iter.into_iter().collect(),
        }
    }
}

/// Apply a sequence of imputers to the table, left to right
pub fn impute_missing_values(
    df: &mut DataFrame,
    imputers: &[Box<dyn DataFrameImputer>],
) -> Result<()> {
    for imputer in imputers {
        imputer.impute(df)?;
    }
    Ok(())
}
