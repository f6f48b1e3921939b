use std::ops::{Range, RangeInclusive};

use crate::{IntoSamples, Samples};

macro_rules! range_samples {
    ($($t:ty),*) => {
        $(
            impl IntoSamples<$t> for Range<$t> {
                fn into_samples(self) -> Samples<$t> {
                    Samples::Items(self.collect())
                }
            }

            impl IntoSamples<$t> for RangeInclusive<$t> {
                fn into_samples(self) -> Samples<$t> {
                    Samples::Items(self.collect())
                }
            }
        )*
    };
}

range_samples!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
