use std::panic::resume_unwind;
use std::sync::Arc;

use futures::future::{ready, BoxFuture, FutureExt};
use tokio::task::spawn_blocking;

use crate::{Executor, ReduceError, Run, Shape};

/// Runs the worker loops on tokio's blocking pool and resolves to the
/// result published by the worker performing the terminal merge.
///
/// Must be awaited inside a tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokio;

impl<T, S> Executor<T, S> for Tokio
where
    T: Send + 'static,
    S: Shape<T> + 'static,
{
    type Result = BoxFuture<'static, Result<T, ReduceError<T>>>;

    fn exec(self, run: Run<T, S>) -> Self::Result {
        let run = Arc::new(run);

        async move {
            let receiver = run.completion();

            let handles: Vec<_> = (0..run.pool_size())
                .map(|worker| {
                    let run = run.clone();

                    spawn_blocking(move || run.work_reporting(worker))
                })
                .collect();

            for handle in handles {
                if let Err(error) = handle.await {
                    if error.is_panic() {
                        resume_unwind(error.into_panic());
                    }
                }
            }

            run.close();

            match receiver {
                Some(receiver) => match receiver.await {
                    Ok(value) => Ok(value),
                    Err(_) => run.extract(),
                },
                None => run.extract(),
            }
        }
        .boxed()
    }

    fn ready(self, result: Result<T, ReduceError<T>>) -> Self::Result {
        ready(result).boxed()
    }
}

#[cfg(test)]
mod tests {
    use ::std::time::Duration;

    use crate::{Driver, Reduce, Samples, TokioExecutor};

    #[tokio::test]
    async fn test_reduce() {
        let x = Reduce::mary((1..=100u64).collect::<Vec<_>>(), 3)
            .workers(4)
            .timeout(Duration::from_millis(20))
            .quiet(true)
            .exec_with(TokioExecutor)
            .await;

        assert_eq!(5050, x.unwrap());
    }

    #[tokio::test]
    async fn test_inline_and_single() {
        let x = Reduce::binary(vec![3u8])
            .quiet(true)
            .exec_with(TokioExecutor)
            .await;

        assert_eq!(3, x.unwrap());

        let x = Reduce::binary(vec![1u32, 2, 3, 4])
            .workers(0)
            .quiet(true)
            .exec_with(TokioExecutor)
            .await;

        assert_eq!(10, x.unwrap());
    }

    #[tokio::test]
    async fn test_config_error() {
        let x = Reduce::<u8, _>::binary(Samples::expected(3))
            .exec_with(TokioExecutor)
            .await;

        assert!(x.unwrap_err().is_config());
    }
}
