use rayon_core::{Scope, ThreadPoolBuilder};

use crate::{inner::Step, ConfigError, Executor, ReduceError, Run, Shape};

/// Task pool where every task performs a single worker step and re-spawns
/// itself until it retires. The task performing the terminal merge hands
/// the result to the coordinator through a one-shot completion signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rayon;

impl<T, S> Executor<T, S> for Rayon
where
    T: Send + 'static,
    S: Shape<T> + 'static,
{
    type Result = Result<T, ReduceError<T>>;

    fn exec(self, run: Run<T, S>) -> Self::Result {
        let receiver = run.completion();

        if run.is_inline() {
            run.work_reporting(0);

            return run.resolve(receiver);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(run.pool_size())
            .thread_name(|index| format!("fanin-{}", index))
            .build()
            .map_err(|error| ConfigError::Pool(error.to_string()))?;

        let run = &run;

        pool.scope(|scope| {
            for worker in 0..run.pool_size() {
                scope.spawn(move |scope| task(scope, run, worker));
            }
        });

        run.resolve(receiver)
    }

    fn ready(self, result: Result<T, ReduceError<T>>) -> Self::Result {
        result
    }
}

fn task<'scope, T, S>(scope: &Scope<'scope>, run: &'scope Run<T, S>, worker: usize)
where
    T: Send,
    S: Shape<T>,
{
    match run.step(worker) {
        Step::Retired { .. } => return,
        Step::Finished => run.publish(),
        Step::Idle | Step::Merged { .. } => (),
    }

    scope.spawn(move |scope| task(scope, run, worker));
}

#[cfg(test)]
mod tests {
    use ::std::sync::atomic::{AtomicUsize, Ordering};
    use ::std::sync::Arc;
    use ::std::time::Duration;

    use crate::{Driver, RayonExecutor, Reduce};

    #[test]
    fn test_reduce() {
        let merges = Arc::new(AtomicUsize::new(0));
        let counter = merges.clone();

        let x = Reduce::binary((1..=300u64).collect::<Vec<_>>())
            .reducer(move |a: u64, b: u64| {
                counter.fetch_add(1, Ordering::Relaxed);
                a + b
            })
            .workers(6)
            .clamp(false)
            .timeout(Duration::from_millis(20))
            .quiet(true)
            .exec_with(RayonExecutor)
            .unwrap();

        assert_eq!(300 * 301 / 2, x);
        assert_eq!(299, merges.load(Ordering::Relaxed));
    }

    #[test]
    fn test_single_sample_falls_back_to_queue() {
        let x = Reduce::mary(vec![9i32], 4)
            .workers(3)
            .quiet(true)
            .exec_with(RayonExecutor)
            .unwrap();

        assert_eq!(9, x);
    }

    #[test]
    fn test_inline() {
        let x = Reduce::mary(vec![1u32; 17], 4)
            .workers(0)
            .ordered(true)
            .quiet(true)
            .exec_with(RayonExecutor)
            .unwrap();

        assert_eq!(17, x);
    }
}
