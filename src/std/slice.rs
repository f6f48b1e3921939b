use crate::{IntoSamples, Samples};

impl<'a, T> IntoSamples<T> for &'a [T]
where
    T: Clone,
{
    fn into_samples(self) -> Samples<T> {
        Samples::Items(self.to_vec())
    }
}

impl<'a, T> IntoSamples<T> for &'a mut [T]
where
    T: Clone,
{
    fn into_samples(self) -> Samples<T> {
        Samples::Items(self.to_vec())
    }
}
