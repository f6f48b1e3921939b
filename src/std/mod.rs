mod binary_heap;
mod hash_set;
mod range;
mod slice;
mod vec;

use crate::{BinaryTree, IntoSamples, MaryTree, Reduce, Sum};

/// Start a reduction directly from a collection.
pub trait TreeReduce<T>: IntoSamples<T> + Sized {
    fn tree_reduce(self) -> Reduce<T, BinaryTree<Sum>> {
        Reduce::binary(self)
    }

    fn mary_reduce(self, arity: usize) -> Reduce<T, MaryTree<Sum>> {
        Reduce::mary(self, arity)
    }
}

impl<T, X> TreeReduce<T> for X where X: IntoSamples<T> {}

#[cfg(test)]
mod tests {
    use ::std::collections::{BTreeSet, BinaryHeap, HashSet, VecDeque};
    use ::std::time::Duration;

    use crate::{Driver, IntoSamples, Samples, TreeReduce};

    #[test]
    fn test_collections() {
        assert_eq!(Samples::Items(vec![1, 2, 3]), [1, 2, 3].into_samples());
        assert_eq!(3, VecDeque::from(vec![1, 2, 3]).into_samples().len());
        assert_eq!(4, (0..4u32).into_samples().len());
        assert_eq!(5, (0..=4i64).into_samples().len());
        assert_eq!(2, [7, 7, 8].iter().copied().collect::<HashSet<_>>().into_samples().len());
        assert_eq!(3, BTreeSet::from([1, 2, 3]).into_samples().len());
        assert_eq!(2, BinaryHeap::from(vec![5, 1]).into_samples().len());

        let slice: &[u8] = &[1, 2];
        assert_eq!(Samples::Items(vec![1, 2]), slice.into_samples());
    }

    #[test]
    fn test_tree_reduce() {
        let x = (1..=10u64)
            .tree_reduce()
            .workers(2)
            .timeout(Duration::from_millis(20))
            .quiet(true)
            .exec()
            .unwrap();

        assert_eq!(55, x);

        let x = vec![2u32; 9]
            .mary_reduce(3)
            .reducer(|items: Vec<u32>| -> u32 { items.into_iter().product() })
            .quiet(true)
            .exec()
            .unwrap();

        assert_eq!(512, x);
    }
}
