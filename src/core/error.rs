use thiserror::Error;

use crate::WorkQueue;

/// Malformed input, rejected before any worker is started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("an expected sample count needs a queue that a producer feeds")]
    MissingQueue,

    #[error("nothing to reduce: no samples given")]
    Empty,

    #[error("arity {arity} is not supported, a merge needs at least two items")]
    Arity { arity: usize },

    #[error("worker count {value:?} is not supported")]
    InvalidWorkers { value: String },

    #[error("timeout {value:?} is not a number of milliseconds")]
    InvalidTimeout { value: String },

    #[error("invalid value {value:?} for {key}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("unable to build worker pool: {0}")]
    Pool(String),
}

/// Error returned by a reduction.
#[derive(Debug, Error)]
pub enum ReduceError<T> {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The workers finished but the queue does not hold exactly one item.
    /// The queue is handed back so the caller can inspect or re-drain it.
    #[error("queue holds {len} items after the reduction, expected exactly one")]
    Residual { len: usize, queue: WorkQueue<T> },
}

impl<T> ReduceError<T> {
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns the residual queue of an invariant violation.
    pub fn into_queue(self) -> Option<WorkQueue<T>> {
        match self {
            Self::Residual { queue, .. } => Some(queue),
            Self::Config(_) => None,
        }
    }
}
