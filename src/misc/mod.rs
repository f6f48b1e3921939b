use std::cmp::{max, min};

#[inline]
pub fn div_ceil(a: usize, b: usize) -> usize {
    if a == 0 {
        0
    } else {
        (a - 1) / b + 1
    }
}

/// Clamp a requested worker count to `[1, min(threshold, available)]`.
pub fn clamp_workers(requested: usize, threshold: usize, available: usize) -> usize {
    min(available, max(1, min(threshold, requested)))
}

pub fn available_parallelism() -> usize {
    max(1, num_cpus::get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_ceil() {
        assert_eq!(0, div_ceil(0, 3));
        assert_eq!(1, div_ceil(1, 3));
        assert_eq!(1, div_ceil(3, 3));
        assert_eq!(41, div_ceil(122, 3));
    }

    #[test]
    fn test_clamp_workers() {
        assert_eq!(4, clamp_workers(12, 40, 4));
        assert_eq!(3, clamp_workers(12, 3, 8));
        assert_eq!(1, clamp_workers(12, 0, 8));
        assert_eq!(5, clamp_workers(5, 40, 8));
    }
}
