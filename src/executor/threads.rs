use std::thread::{scope, Builder};

use crate::{Executor, ReduceError, Run, Shape};

/// Long-lived worker threads that loop until they retire. The coordinator
/// reads the result from the queue after all of them were joined.
#[derive(Debug, Default, Clone, Copy)]
pub struct Threads;

impl<T, S> Executor<T, S> for Threads
where
    T: Send + 'static,
    S: Shape<T> + 'static,
{
    type Result = Result<T, ReduceError<T>>;

    fn exec(self, run: Run<T, S>) -> Self::Result {
        if run.is_inline() {
            run.work(0);

            return run.extract();
        }

        let run = &run;

        scope(|scope| {
            let mut failed = Vec::new();

            for worker in 0..run.pool_size() {
                let spawned = Builder::new()
                    .name(format!("fanin-{}", worker))
                    .spawn_scoped(scope, move || run.work(worker));

                if let Err(error) = spawned {
                    tracing::warn!(worker, %error, "unable to spawn worker thread");

                    failed.push(worker);
                }
            }

            // Workers that could not be spawned are still counted as active.
            // The caller stands in for the first of them, the rest retire.
            let mut failed = failed.into_iter();
            let stand_in = failed.next();
            for worker in failed {
                run.abandon(worker);
            }
            if let Some(worker) = stand_in {
                run.work(worker);
            }
        });

        run.extract()
    }

    fn ready(self, result: Result<T, ReduceError<T>>) -> Self::Result {
        result
    }
}
