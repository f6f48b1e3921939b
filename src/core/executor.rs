use crate::{ReduceError, Run, Shape};

/// Strategy used to drive the workers of a reduction run.
pub trait Executor<T, S>: Sized
where
    T: Send + 'static,
    S: Shape<T> + 'static,
{
    type Result;

    /// Start the workers, wait until they all retired and extract the
    /// result.
    fn exec(self, run: Run<T, S>) -> Self::Result;

    /// Wrap a result that is known before any worker was started.
    fn ready(self, result: Result<T, ReduceError<T>>) -> Self::Result;
}
