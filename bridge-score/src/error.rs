use bridge_core::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unknown vulnerability: {0:?}")]
    Vulnerability(String),

    /// A recorded result that the double-dummy table cannot reproduce
    #[error("board record mismatch: {0}")]
    RecordMismatch(String),

    #[error("could not build scoring thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
