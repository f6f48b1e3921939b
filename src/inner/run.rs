use std::time::Duration;

use futures::channel::oneshot::{channel, Receiver, Sender};
use parking_lot::Mutex;

use crate::{Progress, ReduceError, Reporter, Shape, WorkQueue};

/// Counters guarded by the run lock.
#[derive(Debug)]
pub(crate) struct Counters {
    pub active: usize,
    pub completed: usize,
}

/// State shared by all workers of one reduction run.
///
/// Created once per call, shared by reference (or `Arc`) with every worker
/// and dropped after the result has been extracted.
pub struct Run<T, S> {
    pub(crate) queue: WorkQueue<T>,
    pub(crate) counters: Mutex<Counters>,
    pub(crate) shape: S,
    pub(crate) samples: usize,
    pub(crate) threshold: usize,
    pub(crate) workers: usize,
    pub(crate) ordered: bool,
    pub(crate) timeout: Duration,
    pub(crate) reporter: Option<Box<dyn Reporter>>,
    done: Mutex<Option<Sender<T>>>,
    completion: Mutex<Option<Receiver<T>>>,
}

pub(crate) struct RunConfig {
    pub samples: usize,
    pub threshold: usize,
    pub workers: usize,
    pub ordered: bool,
    pub timeout: Duration,
    pub reporter: Option<Box<dyn Reporter>>,
}

impl<T, S> Run<T, S>
where
    S: Shape<T>,
{
    pub(crate) fn new(queue: WorkQueue<T>, shape: S, config: RunConfig) -> Self {
        let (sender, receiver) = channel();
        let active = config.workers.max(1);

        Self {
            queue,
            counters: Mutex::new(Counters {
                active,
                completed: 0,
            }),
            shape,
            samples: config.samples,
            threshold: config.threshold,
            workers: config.workers,
            ordered: config.ordered,
            timeout: config.timeout,
            reporter: config.reporter,
            done: Mutex::new(Some(sender)),
            completion: Mutex::new(Some(receiver)),
        }
    }

    /// Turn the run into one driven by a single worker on the caller.
    pub fn into_inline(mut self) -> Self {
        self.workers = 0;
        self.counters.get_mut().active = 1;

        self
    }

    /// `true` if a single worker runs on the caller instead of a pool.
    pub fn is_inline(&self) -> bool {
        self.workers == 0
    }

    /// Number of workers the executor has to start.
    pub fn pool_size(&self) -> usize {
        self.workers.max(1)
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn queue(&self) -> &WorkQueue<T> {
        &self.queue
    }

    pub fn progress(&self) -> Progress {
        self.snapshot(&self.counters.lock())
    }

    pub(crate) fn snapshot(&self, counters: &Counters) -> Progress {
        Progress {
            samples: self.samples,
            threshold: self.threshold,
            completed: counters.completed,
            active: counters.active,
        }
    }

    /// Hand the terminal value to whoever waits on [`Run::completion`].
    ///
    /// Must only be called by the worker that performed the terminal merge;
    /// it re-reads the single item left in the queue.
    pub fn publish(&self) {
        let sender = match self.done.lock().take() {
            Some(sender) => sender,
            None => return,
        };

        if let Some(value) = self.queue.get(self.timeout) {
            if let Err(value) = sender.send(value) {
                self.queue.put(value);
            }
        }
    }

    /// Take the receiving end of the completion signal. Returns `None` if it
    /// was taken before.
    pub fn completion(&self) -> Option<Receiver<T>> {
        self.completion.lock().take()
    }

    /// Drop the sending end of the completion signal, so a pending receiver
    /// resolves even if no worker published a value.
    pub fn close(&self) {
        self.done.lock().take();
    }

    /// Read the result from the queue once all workers are gone.
    pub fn extract(&self) -> Result<T, ReduceError<T>> {
        if self.queue.len() == 1 {
            if let Some(value) = self.queue.try_get() {
                tracing::debug!(threshold = self.threshold, "reduction finished");

                return Ok(value);
            }
        }

        let len = self.queue.len();

        tracing::warn!(
            len,
            threshold = self.threshold,
            "reduction finished with unexpected queue size"
        );

        if let Some(reporter) = &self.reporter {
            reporter.residual(len);
        }

        Err(ReduceError::Residual {
            len,
            queue: self.queue.clone(),
        })
    }

    /// Wait for the completion signal, falling back to [`Run::extract`] if
    /// no worker published a value. Call after all workers are done.
    pub fn resolve(&self, receiver: Option<Receiver<T>>) -> Result<T, ReduceError<T>> {
        self.close();

        match receiver.map(futures::executor::block_on) {
            Some(Ok(value)) => {
                tracing::debug!(threshold = self.threshold, "reduction finished");

                Ok(value)
            }
            _ => self.extract(),
        }
    }
}
