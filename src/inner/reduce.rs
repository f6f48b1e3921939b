use std::time::Duration;

use crate::{
    default_reporter,
    inner::run::{Run, RunConfig},
    misc::{available_parallelism, clamp_workers},
    BinaryTree, ConfigError, Driver, Executor, GroupReducer, IntoSamples, MaryTree, Reducer,
    Reporter, Samples, Setup, Shape, Sum, WorkQueue,
};

/// A configured reduction, ready to be executed.
pub struct Reduce<T, S> {
    samples: Samples<T>,
    shape: S,
    queue: Option<WorkQueue<T>>,
    setup: Setup,
    reporter: Option<Box<dyn Reporter>>,
}

impl<T> Reduce<T, BinaryTree<Sum>> {
    /// Reduce `samples` with binary merges, summing by default.
    pub fn binary<X>(samples: X) -> Self
    where
        X: IntoSamples<T>,
    {
        Self::new(samples.into_samples(), BinaryTree::new(Sum))
    }
}

impl<T> Reduce<T, MaryTree<Sum>> {
    /// Reduce `samples` with merges of `arity` items, summing by default.
    pub fn mary<X>(samples: X, arity: usize) -> Self
    where
        X: IntoSamples<T>,
    {
        Self::new(samples.into_samples(), MaryTree::new(arity, Sum))
    }
}

impl<T, R> Reduce<T, BinaryTree<R>> {
    pub fn reducer<O>(self, reducer: O) -> Reduce<T, BinaryTree<O>>
    where
        O: Reducer<T>,
    {
        self.with_shape(BinaryTree::new(reducer))
    }
}

impl<T, R> Reduce<T, MaryTree<R>> {
    pub fn reducer<O>(self, reducer: O) -> Reduce<T, MaryTree<O>>
    where
        O: GroupReducer<T>,
    {
        let arity = self.shape.arity();

        self.with_shape(MaryTree::new(arity, reducer))
    }
}

impl<T, S> Reduce<T, S> {
    fn new(samples: Samples<T>, shape: S) -> Self {
        Self {
            samples,
            shape,
            queue: None,
            setup: Setup::default(),
            reporter: None,
        }
    }

    fn with_shape<O>(self, shape: O) -> Reduce<T, O> {
        Reduce {
            samples: self.samples,
            shape,
            queue: self.queue,
            setup: self.setup,
            reporter: self.reporter,
        }
    }

    /// Serialize acquire, merge and requeue under the run lock.
    pub fn ordered(mut self, ordered: bool) -> Self {
        self.setup.ordered = Some(ordered);

        self
    }

    /// Use an external queue. Needed for [`Samples::Expected`], where a
    /// producer feeds the queue while the reduction runs. Materialized items
    /// are put into this queue before the workers start.
    pub fn queue(mut self, queue: WorkQueue<T>) -> Self {
        self.queue = Some(queue);

        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.setup.timeout = Some(timeout);

        self
    }

    /// Number of workers; `0` runs a single worker inline on the caller.
    pub fn workers(mut self, workers: usize) -> Self {
        self.setup.workers = Some(workers);

        self
    }

    /// Clamp a non-zero worker count to the number of merges and the
    /// available parallelism.
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.setup.clamp = Some(clamp);

        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.setup.quiet = Some(quiet);

        self
    }

    pub fn reporter<P>(mut self, reporter: P) -> Self
    where
        P: Reporter + 'static,
    {
        self.reporter = Some(Box::new(reporter));

        self
    }

    /// Merge `setup` into the current settings; fields set in `setup` win.
    pub fn setup(mut self, setup: Setup) -> Self {
        self.setup = self.setup.merge(setup);

        self
    }
}

impl<T, S> Reduce<T, S>
where
    S: Shape<T>,
{
    fn prepare(self) -> Result<Run<T, S>, ConfigError> {
        self.shape.validate()?;

        if self.samples.is_empty() {
            return Err(ConfigError::Empty);
        }

        let samples = self.samples.len();
        let queue = match (self.samples, self.queue) {
            (Samples::Items(items), queue) => {
                let mut queue = queue.unwrap_or_default();
                queue.extend(items);

                queue
            }
            (Samples::Expected(_), Some(queue)) => queue,
            (Samples::Expected(_), None) => return Err(ConfigError::MissingQueue),
        };

        let threshold = self.shape.threshold(samples);

        let mut workers = self.setup.workers_or_default();
        if workers > 0 && self.setup.clamp_or_default() {
            workers = clamp_workers(workers, threshold, available_parallelism());
        }

        let ordered = self.setup.ordered_or_default();
        let reporter = if self.setup.quiet_or_default() {
            None
        } else {
            Some(self.reporter.unwrap_or_else(default_reporter))
        };

        tracing::debug!(samples, threshold, workers, ordered, "starting reduction");

        Ok(Run::new(
            queue,
            self.shape,
            RunConfig {
                samples,
                threshold,
                workers,
                ordered,
                timeout: self.setup.timeout_or_default(),
                reporter,
            },
        ))
    }
}

impl<T, S> Driver<T> for Reduce<T, S>
where
    T: Send + 'static,
    S: Shape<T> + 'static,
{
    type Shape = S;

    fn exec_with<E>(self, executor: E) -> E::Result
    where
        E: Executor<T, S>,
    {
        match self.prepare() {
            Ok(run) => executor.exec(run),
            Err(error) => executor.ready(Err(error.into())),
        }
    }
}
