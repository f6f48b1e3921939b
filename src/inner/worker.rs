use crate::{Decision, Shape};

use super::run::{Counters, Run};

/// Outcome of a single worker step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The worker left the active pool. `remaining` merges were left to
    /// the others.
    Retired { remaining: usize },
    /// A queue draw timed out; everything drawn was put back.
    Idle,
    /// One merge was performed.
    Merged { remaining: usize },
    /// The terminal merge was performed; the queue now holds the result.
    Finished,
}

impl<T, S> Run<T, S>
where
    S: Shape<T>,
{
    /// One guard decision and, unless the worker retires, one
    /// acquire/merge/requeue cycle followed by the bookkeeping.
    pub fn step(&self, worker: usize) -> Step {
        let mut counters = self.counters.lock();

        let count = match self.shape.plan(self.snapshot(&counters)) {
            Decision::Retire => return self.retire(&mut counters, worker),
            Decision::Draw(count) => count,
        };

        if self.ordered {
            if !self.merge(count) {
                return Step::Idle;
            }

            return self.complete(&mut counters, worker);
        }

        drop(counters);

        if !self.merge(count) {
            return Step::Idle;
        }

        let mut counters = self.counters.lock();

        self.complete(&mut counters, worker)
    }

    /// Run steps until the worker retires. The result stays in the queue.
    pub fn work(&self, worker: usize) {
        loop {
            if let Step::Retired { .. } = self.step(worker) {
                break;
            }
        }
    }

    /// Like [`Run::work`], but the worker that performs the terminal merge
    /// publishes the result through the completion signal.
    pub fn work_reporting(&self, worker: usize) {
        loop {
            match self.step(worker) {
                Step::Retired { .. } => break,
                Step::Finished => self.publish(),
                Step::Idle | Step::Merged { .. } => (),
            }
        }
    }

    /// Retire a worker that was never started.
    pub fn abandon(&self, worker: usize) {
        let mut counters = self.counters.lock();

        self.retire(&mut counters, worker);
    }

    fn merge(&self, count: usize) -> bool {
        match self.queue.get_many(count, self.timeout) {
            Some(items) => {
                self.queue.put(self.shape.merge(items));

                true
            }
            None => false,
        }
    }

    fn retire(&self, counters: &mut Counters, worker: usize) -> Step {
        counters.active -= 1;

        let remaining = self.threshold - counters.completed;

        tracing::trace!(worker, remaining, active = counters.active, "worker retired");

        if counters.active == 0 {
            if let Some(reporter) = &self.reporter {
                reporter.finish();
            }
        }

        Step::Retired { remaining }
    }

    fn complete(&self, counters: &mut Counters, worker: usize) -> Step {
        counters.completed += 1;

        if let Some(reporter) = &self.reporter {
            reporter.report(counters.completed, self.threshold, counters.active);
        }

        let remaining = self.threshold - counters.completed;
        if remaining == 0 {
            tracing::trace!(worker, "terminal merge");

            Step::Finished
        } else {
            Step::Merged { remaining }
        }
    }
}
