use std::collections::BinaryHeap;

use crate::{IntoSamples, Samples};

impl<T> IntoSamples<T> for BinaryHeap<T> {
    fn into_samples(self) -> Samples<T> {
        Samples::Items(self.into_vec())
    }
}
