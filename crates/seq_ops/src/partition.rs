/// Moves every element satisfying `pred` before every element that does not
/// and returns the boundary. Relative order inside each group is not kept.
pub fn partition<T, P>(data: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let len = data.len();
    let mut first = 0usize;
    while first < len && pred(&data[first]) {
        first += 1;
    }

    for i in (first + 1)..len {
        if pred(&data[i]) {
            data.swap(i, first);
            first += 1;
        }
    }
    first
}

/// Like [`partition`], but both groups keep their original relative order.
/// Works without extra storage in O(n log n) swaps; `pred` is called once
/// per element.
pub fn stable_partition<T, P>(data: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    stable_partition_recursive(data, &mut pred)
}

fn stable_partition_recursive<T, P>(data: &mut [T], pred: &mut P) -> usize
where
    P: FnMut(&T) -> bool,
{
    match data.len() {
        0 => 0,
        1 => usize::from(pred(&data[0])),
        len => {
            let mid = len / 2;
            let (lo, hi) = data.split_at_mut(mid);
            let left_true = stable_partition_recursive(lo, pred);
            let right_true = stable_partition_recursive(hi, pred);
            data[left_true..(mid + right_true)].rotate_left(mid - left_true);
            left_true + right_true
        }
    }
}

/// Boundary of a slice already partitioned by `pred`, by binary search.
pub fn partition_point<T, P>(data: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut base = 0usize;
    let mut size = data.len();
    while size > 0 {
        let half = size / 2;
        let mid = base + half;
        if pred(&data[mid]) {
            base = mid + 1;
            size -= half + 1;
        } else {
            size = half;
        }
    }
    base
}

pub fn is_partitioned<T, P>(data: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    let mut iter = data.iter();
    for item in iter.by_ref() {
        if !pred(item) {
            break;
        }
    }
    iter.all(|item| !pred(item))
}

/// Appends elements satisfying `pred` to `out_true` and the rest to
/// `out_false`, in source order. Returns how many went to each side.
pub fn partition_copy<T, P>(
    src: &[T],
    out_true: &mut Vec<T>,
    out_false: &mut Vec<T>,
    mut pred: P,
) -> (usize, usize)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let (mut n_true, mut n_false) = (0usize, 0usize);
    for item in src {
        if pred(item) {
            out_true.push(item.clone());
            n_true += 1;
        } else {
            out_false.push(item.clone());
            n_false += 1;
        }
    }
    (n_true, n_false)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn partition_splits_evens_first() {
        let mut numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let boundary = partition(&mut numbers, is_even);
        assert_eq!(boundary, 5);
        assert!(numbers[..boundary].iter().all(is_even));
        assert!(!numbers[boundary..].iter().any(is_even));
        assert!(is_partitioned(&numbers, is_even));
        assert_eq!(partition_point(&numbers, is_even), boundary);
    }

    #[test]
    fn partition_edge_cases() {
        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(partition(&mut empty, is_even), 0);

        let mut all = vec![2, 4, 6];
        assert_eq!(partition(&mut all, is_even), 3);
        assert_eq!(all, vec![2, 4, 6]);

        let mut none = vec![1, 3, 5];
        assert_eq!(partition(&mut none, is_even), 0);
        assert_eq!(partition_point(&none, is_even), 0);
    }

    #[test]
    fn stable_partition_keeps_group_order() {
        let mut numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let boundary = stable_partition(&mut numbers, is_even);
        assert_eq!(boundary, 5);
        assert_eq!(numbers, vec![2, 4, 6, 8, 10, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn stable_partition_calls_pred_once_per_element() {
        let mut data: Vec<i32> = (0..97).collect();
        let mut calls = 0;
        stable_partition(&mut data, |x| {
            calls += 1;
            x % 3 == 0
        });
        assert_eq!(calls, 97);
    }

    #[test]
    fn stable_partition_matches_filter() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[0_usize, 1, 2, 7, 64, 1000] {
            let data: Vec<i32> = (0..size).map(|_| rng.random_range(-50..50)).collect();
            let mut expected: Vec<i32> = data.iter().copied().filter(|x| *x > 0).collect();
            expected.extend(data.iter().copied().filter(|x| *x <= 0));

            let mut actual = data;
            let boundary = stable_partition(&mut actual, |x| *x > 0);
            assert_eq!(actual, expected);
            assert_eq!(boundary, partition_point(&actual, |x| *x > 0));
        }
    }

    #[test]
    fn is_partitioned_detects_interleaving() {
        assert!(is_partitioned::<i32, _>(&[], is_even));
        assert!(is_partitioned(&[2, 4, 1, 3], is_even));
        assert!(!is_partitioned(&[2, 1, 4, 3], is_even));
        assert!(is_partitioned(&[1, 3, 5], is_even));
    }

    #[test]
    fn partition_copy_routes_both_sides() {
        let mut evens = Vec::new();
        let mut odds = vec![99];
        let counts = partition_copy(&[1, 2, 3, 4, 5], &mut evens, &mut odds, is_even);
        assert_eq!(counts, (2, 3));
        assert_eq!(evens, vec![2, 4]);
        assert_eq!(odds, vec![99, 1, 3, 5]);
    }
}
