use super::ConfigError;

/// Snapshot of the shared counters, taken under the run lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Number of items the run started with.
    pub samples: usize,
    /// Total number of merges needed to reduce the samples to one item.
    pub threshold: usize,
    /// Merges performed so far.
    pub completed: usize,
    /// Workers that have not retired yet, including the asking one.
    pub active: usize,
}

impl Progress {
    #[inline]
    pub fn remaining(&self) -> usize {
        self.threshold - self.completed
    }
}

/// What a worker does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Leave the active pool for good.
    Retire,
    /// Draw that many items and merge them.
    Draw(usize),
}

/// Shape of the reduction tree: how many merges are needed, which worker
/// may take part in them and how a group of items is merged.
pub trait Shape<T>: Send + Sync {
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Number of merges needed to reduce `samples` items to one.
    fn threshold(&self, samples: usize) -> usize;

    fn plan(&self, progress: Progress) -> Decision;

    fn merge(&self, items: Vec<T>) -> T;
}
