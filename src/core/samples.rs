/// Input of a reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Samples<T> {
    /// A finite collection; its length fixes the number of items and it
    /// seeds the queue.
    Items(Vec<T>),

    /// Number of items a producer is going to put into an external queue.
    /// The run only terminates once exactly that many items arrived.
    Expected(usize),
}

impl<T> Samples<T> {
    pub fn expected(count: usize) -> Self {
        Self::Expected(count)
    }

    /// Number of items the reduction consumes.
    pub fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Expected(count) => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Conversion into [`Samples`].
pub trait IntoSamples<T> {
    fn into_samples(self) -> Samples<T>;
}

impl<T> IntoSamples<T> for Samples<T> {
    fn into_samples(self) -> Samples<T> {
        self
    }
}
