use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("ensemble is empty")]
    EmptyEnsemble,

    #[error("run {run} has {got} records, expected {expected}")]
    LengthMismatch {
        run:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("no finite samples to summarise")]
    EmptySample,

    #[error("invalid histogram: {0}")]
    InvalidHistogram(&'static str),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
