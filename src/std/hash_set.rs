use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use crate::{IntoSamples, Samples};

impl<T, S> IntoSamples<T> for HashSet<T, S>
where
    S: BuildHasher,
{
    fn into_samples(self) -> Samples<T> {
        Samples::Items(Vec::from_iter(self))
    }
}

impl<T> IntoSamples<T> for BTreeSet<T> {
    fn into_samples(self) -> Samples<T> {
        Samples::Items(Vec::from_iter(self))
    }
}
