use std::ops::Add;

/// Binary merge applied by the workers of a binary reduction tree.
///
/// The operation has to be associative. Unless the reduction runs in
/// ordered mode it also has to be commutative, because the order in which
/// workers pick up items depends on scheduling.
pub trait Reducer<T>: Send + Sync {
    /// Merge two items into one.
    fn reduce(&self, left: T, right: T) -> T;
}

/// Group merge applied by the workers of an m-ary reduction tree.
///
/// The group holds `m` items for every merge but the last one, which may
/// consume fewer.
pub trait GroupReducer<T>: Send + Sync {
    fn reduce_group(&self, items: Vec<T>) -> T;
}

impl<T, F> Reducer<T> for F
where
    F: Fn(T, T) -> T + Send + Sync,
{
    #[inline]
    fn reduce(&self, left: T, right: T) -> T {
        self(left, right)
    }
}

impl<T, F> GroupReducer<T> for F
where
    F: Fn(Vec<T>) -> T + Send + Sync,
{
    #[inline]
    fn reduce_group(&self, items: Vec<T>) -> T {
        self(items)
    }
}

/* Sum */

/// The default merge: plain addition.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sum;

impl<T> Reducer<T> for Sum
where
    T: Add<Output = T>,
{
    #[inline]
    fn reduce(&self, left: T, right: T) -> T {
        left + right
    }
}

impl<T> GroupReducer<T> for Sum
where
    T: std::iter::Sum<T>,
{
    #[inline]
    fn reduce_group(&self, items: Vec<T>) -> T {
        items.into_iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(7, Reducer::reduce(&Sum, 3, 4));
        assert_eq!(10, Sum.reduce_group(vec![1, 2, 3, 4]));
        assert_eq!(2.5f64, Reducer::reduce(&Sum, 1.0, 1.5));
    }

    #[test]
    fn test_closures() {
        let concat = |a: String, b: String| a + &b;
        assert_eq!("ab", concat.reduce("a".into(), "b".into()));

        let max = |items: Vec<u32>| items.into_iter().max().unwrap_or_default();
        assert_eq!(9, max.reduce_group(vec![3, 9, 1]));
    }
}
