use crate::{
    misc::div_ceil, ConfigError, Decision, GroupReducer, Progress, Reducer, Shape,
};

/* BinaryTree */

/// Every merge consumes exactly two items.
#[derive(Debug, Clone)]
pub struct BinaryTree<R> {
    reducer: R,
}

impl<R> BinaryTree<R> {
    pub fn new(reducer: R) -> Self {
        Self { reducer }
    }
}

impl<T, R> Shape<T> for BinaryTree<R>
where
    R: Reducer<T>,
{
    fn threshold(&self, samples: usize) -> usize {
        samples.saturating_sub(1)
    }

    fn plan(&self, progress: Progress) -> Decision {
        // With `remaining` merges left there are `remaining + 1` items in the
        // tree, so no more than half of that many merges can run at once.
        if progress.active > (progress.remaining() + 1) / 2 {
            Decision::Retire
        } else {
            Decision::Draw(2)
        }
    }

    fn merge(&self, items: Vec<T>) -> T {
        let [left, right]: [T; 2] = match items.try_into() {
            Ok(pair) => pair,
            Err(items) => unreachable!("binary merge of {} items", items.len()),
        };

        self.reducer.reduce(left, right)
    }
}

/* MaryTree */

/// Every merge consumes `arity` items, except the last one which takes
/// whatever is left over.
#[derive(Debug, Clone)]
pub struct MaryTree<R> {
    arity: usize,
    reducer: R,
}

impl<R> MaryTree<R> {
    pub fn new(arity: usize, reducer: R) -> Self {
        Self { arity, reducer }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Size of the final group for a run over `samples` items.
    ///
    /// All earlier merges reduce the item count by `arity - 1` each, so the
    /// last one has to consume the remainder plus the item it produces.
    pub fn last_group(&self, samples: usize) -> usize {
        let rest = samples.saturating_sub(1) % (self.arity - 1);

        if rest == 0 {
            self.arity
        } else {
            rest + 1
        }
    }
}

impl<T, R> Shape<T> for MaryTree<R>
where
    R: GroupReducer<T>,
{
    fn validate(&self) -> Result<(), ConfigError> {
        if self.arity < 2 {
            Err(ConfigError::Arity { arity: self.arity })
        } else {
            Ok(())
        }
    }

    fn threshold(&self, samples: usize) -> usize {
        div_ceil(samples.saturating_sub(1), self.arity - 1)
    }

    fn plan(&self, progress: Progress) -> Decision {
        let remaining = progress.remaining();

        // Only ever as many workers as merges that are not the last one, and
        // a single worker for the last merge. Several workers racing for the
        // last group would only time out against each other.
        let proceed = match remaining {
            0 => false,
            1 => progress.active == 1,
            _ => progress.active < remaining,
        };

        if !proceed {
            Decision::Retire
        } else if remaining > 1 {
            Decision::Draw(self.arity)
        } else {
            Decision::Draw(self.last_group(progress.samples))
        }
    }

    fn merge(&self, items: Vec<T>) -> T {
        self.reducer.reduce_group(items)
    }
}
