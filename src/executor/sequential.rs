use crate::{Executor, ReduceError, Run, Shape};

/// Runs a single worker on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl<T, S> Executor<T, S> for Sequential
where
    T: Send + 'static,
    S: Shape<T> + 'static,
{
    type Result = Result<T, ReduceError<T>>;

    fn exec(self, run: Run<T, S>) -> Self::Result {
        let run = run.into_inline();

        run.work(0);
        run.extract()
    }

    fn ready(self, result: Result<T, ReduceError<T>>) -> Self::Result {
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{Driver, Reduce, SequentialExecutor};

    #[test]
    fn test_ignores_worker_count() {
        let x = Reduce::mary(vec![2u32; 10], 3)
            .workers(8)
            .clamp(false)
            .quiet(true)
            .exec_with(SequentialExecutor)
            .unwrap();

        assert_eq!(20, x);
    }
}
