use thiserror::Error;

/// Runtime failures around tree operations.
///
/// Shape mismatches never show up here: they are rejected by the compiler.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid normal distribution: mean {mean}, std-dev {std_dev}")]
    InvalidDistribution { mean: f64, std_dev: f64 },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
