use std::collections::VecDeque;

use crate::{IntoSamples, Samples};

impl<T> IntoSamples<T> for Vec<T> {
    fn into_samples(self) -> Samples<T> {
        Samples::Items(self)
    }
}

impl<T> IntoSamples<T> for VecDeque<T> {
    fn into_samples(self) -> Samples<T> {
        Samples::Items(self.into())
    }
}

impl<T, const N: usize> IntoSamples<T> for [T; N] {
    fn into_samples(self) -> Samples<T> {
        Samples::Items(Vec::from(self))
    }
}

impl<'a, T> IntoSamples<T> for &'a Vec<T>
where
    T: Clone,
{
    fn into_samples(self) -> Samples<T> {
        Samples::Items(self.clone())
    }
}
