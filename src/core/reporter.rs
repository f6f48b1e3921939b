use std::io::{stderr, IsTerminal, Write};
use std::sync::Arc;

/// Sink for human readable progress of a reduction.
///
/// All calls are made while the run state lock is held, so implementations
/// see a consistent, totally ordered sequence of updates.
pub trait Reporter: Send + Sync {
    /// Called after every merge.
    fn report(&self, completed: usize, total: usize, active: usize);

    /// Called once the last worker retired.
    fn finish(&self) {}

    /// Called if the queue does not hold exactly one item at the end.
    fn residual(&self, len: usize) {
        let _ = len;
    }
}

impl<R> Reporter for Arc<R>
where
    R: Reporter + ?Sized,
{
    fn report(&self, completed: usize, total: usize, active: usize) {
        (**self).report(completed, total, active)
    }

    fn finish(&self) {
        (**self).finish()
    }

    fn residual(&self, len: usize) {
        (**self).residual(len)
    }
}

impl<R> Reporter for Box<R>
where
    R: Reporter + ?Sized,
{
    fn report(&self, completed: usize, total: usize, active: usize) {
        (**self).report(completed, total, active)
    }

    fn finish(&self) {
        (**self).finish()
    }

    fn residual(&self, len: usize) {
        (**self).residual(len)
    }
}

/// Reporter to use when none was configured.
pub fn default_reporter() -> Box<dyn Reporter> {
    if stderr().is_terminal() {
        Box::new(Console)
    } else {
        Box::new(Silent)
    }
}

/* Silent */

#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&self, _completed: usize, _total: usize, _active: usize) {}
}

/* Console */

/// Renders a single, continuously overwritten status line on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Reporter for Console {
    fn report(&self, completed: usize, total: usize, active: usize) {
        let mut out = stderr().lock();
        let _ = write!(out, "\r{}\t", status_line(completed, total, active));
        let _ = out.flush();
    }

    fn finish(&self) {
        let mut out = stderr().lock();
        let _ = writeln!(out);
    }

    fn residual(&self, len: usize) {
        let mut out = stderr().lock();
        let _ = writeln!(
            out,
            "queue still holds {} items but should hold exactly one",
            len
        );
    }
}

/* Trace */

/// Forwards progress to `tracing` as debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct Trace;

impl Reporter for Trace {
    fn report(&self, completed: usize, total: usize, active: usize) {
        tracing::debug!(completed, total, active, "merge completed");
    }

    fn finish(&self) {
        tracing::debug!("all workers retired");
    }

    fn residual(&self, len: usize) {
        tracing::warn!(len, "unexpected residual queue");
    }
}

pub(crate) fn status_line(completed: usize, total: usize, active: usize) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    format!(
        "{}/{} merges [{:.2}%] with {} workers",
        completed, total, percent, active
    )
}
