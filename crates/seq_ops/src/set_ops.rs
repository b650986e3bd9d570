//! Multiset algebra over two inputs sorted under the same comparator.
//!
//! Each operation is a single O(n + m) merge pass that appends to `out`.
//! Multiplicities, for an element occurring `a` times in `first` and `b`
//! times in `second`:
//!
//! | operation                   | result        |
//! |-----------------------------|---------------|
//! | `set_difference`            | `max(a-b, 0)` |
//! | `set_intersection`          | `min(a, b)`   |
//! | `set_union`                 | `max(a, b)`   |
//! | `set_symmetric_difference`  | `\|a - b\|`   |
//! | `merge`                     | `a + b`       |
//!
//! Where both inputs contribute an equivalent element, the copy from `first`
//! is the one written.

pub fn set_difference<T: Ord + Clone>(first: &[T], second: &[T], out: &mut Vec<T>) {
    set_difference_by(first, second, out, |a, b| a < b);
}

pub fn set_difference_by<T, F>(first: &[T], second: &[T], out: &mut Vec<T>, mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (mut i, mut j) = (0usize, 0usize);
    while i < first.len() && j < second.len() {
        if is_less(&first[i], &second[j]) {
            out.push(first[i].clone());
            i += 1;
        } else if is_less(&second[j], &first[i]) {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    out.extend_from_slice(&first[i..]);
}

pub fn set_intersection<T: Ord + Clone>(first: &[T], second: &[T], out: &mut Vec<T>) {
    set_intersection_by(first, second, out, |a, b| a < b);
}

pub fn set_intersection_by<T, F>(first: &[T], second: &[T], out: &mut Vec<T>, mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (mut i, mut j) = (0usize, 0usize);
    while i < first.len() && j < second.len() {
        if is_less(&first[i], &second[j]) {
            i += 1;
        } else if is_less(&second[j], &first[i]) {
            j += 1;
        } else {
            out.push(first[i].clone());
            i += 1;
            j += 1;
        }
    }
}

pub fn set_union<T: Ord + Clone>(first: &[T], second: &[T], out: &mut Vec<T>) {
    set_union_by(first, second, out, |a, b| a < b);
}

pub fn set_union_by<T, F>(first: &[T], second: &[T], out: &mut Vec<T>, mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (mut i, mut j) = (0usize, 0usize);
    while i < first.len() && j < second.len() {
        if is_less(&second[j], &first[i]) {
            out.push(second[j].clone());
            j += 1;
        } else {
            if !is_less(&first[i], &second[j]) {
                j += 1;
            }
            out.push(first[i].clone());
            i += 1;
        }
    }
    out.extend_from_slice(&first[i..]);
    out.extend_from_slice(&second[j..]);
}

pub fn set_symmetric_difference<T: Ord + Clone>(first: &[T], second: &[T], out: &mut Vec<T>) {
    set_symmetric_difference_by(first, second, out, |a, b| a < b);
}

pub fn set_symmetric_difference_by<T, F>(
    first: &[T],
    second: &[T],
    out: &mut Vec<T>,
    mut is_less: F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let (mut i, mut j) = (0usize, 0usize);
    while i < first.len() && j < second.len() {
        if is_less(&first[i], &second[j]) {
            out.push(first[i].clone());
            i += 1;
        } else if is_less(&second[j], &first[i]) {
            out.push(second[j].clone());
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    out.extend_from_slice(&first[i..]);
    out.extend_from_slice(&second[j..]);
}

/// `true` iff every element of `second` (with multiplicity) occurs in `first`.
pub fn includes<T: Ord>(first: &[T], second: &[T]) -> bool {
    includes_by(first, second, |a, b| a < b)
}

pub fn includes_by<T, F>(first: &[T], second: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = 0usize;
    for needle in second {
        while i < first.len() && is_less(&first[i], needle) {
            i += 1;
        }
        if i == first.len() || is_less(needle, &first[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Stable merge of two sorted inputs; on ties elements of `first` come first.
pub fn merge<T: Ord + Clone>(first: &[T], second: &[T], out: &mut Vec<T>) {
    merge_by(first, second, out, |a, b| a < b);
}

pub fn merge_by<T, F>(first: &[T], second: &[T], out: &mut Vec<T>, mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    out.reserve(first.len() + second.len());
    let (mut i, mut j) = (0usize, 0usize);
    while i < first.len() && j < second.len() {
        if is_less(&second[j], &first[i]) {
            out.push(second[j].clone());
            j += 1;
        } else {
            out.push(first[i].clone());
            i += 1;
        }
    }
    out.extend_from_slice(&first[i..]);
    out.extend_from_slice(&second[j..]);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn run<F>(op: F, a: &[i32], b: &[i32]) -> Vec<i32>
    where
        F: Fn(&[i32], &[i32], &mut Vec<i32>),
    {
        let mut out = Vec::new();
        op(a, b, &mut out);
        out
    }

    fn counts(data: &[i32]) -> BTreeMap<i32, usize> {
        let mut map = BTreeMap::new();
        for &x in data {
            *map.entry(x).or_insert(0) += 1;
        }
        map
    }

    fn oracle<F>(a: &[i32], b: &[i32], combine: F) -> Vec<i32>
    where
        F: Fn(usize, usize) -> usize,
    {
        let (ca, cb) = (counts(a), counts(b));
        let mut keys: Vec<i32> = ca.keys().chain(cb.keys()).copied().collect();
        keys.sort_unstable();
        keys.dedup();

        let mut out = Vec::new();
        for k in keys {
            let n = combine(*ca.get(&k).unwrap_or(&0), *cb.get(&k).unwrap_or(&0));
            out.extend(std::iter::repeat_n(k, n));
        }
        out
    }

    #[test]
    fn known_cases() {
        let a = [1, 2, 2, 3, 4, 4, 4];
        let b = [2, 4, 4, 5];
        assert_eq!(run(set_difference, &a, &b), vec![1, 2, 3, 4]);
        assert_eq!(run(set_intersection, &a, &b), vec![2, 4, 4]);
        assert_eq!(run(set_union, &a, &b), vec![1, 2, 2, 3, 4, 4, 4, 5]);
        assert_eq!(run(set_symmetric_difference, &a, &b), vec![1, 2, 3, 4, 5]);
        assert_eq!(run(merge, &a, &b), vec![1, 2, 2, 2, 3, 4, 4, 4, 4, 4, 5]);
        assert!(includes(&a, &[2, 4, 4]));
        assert!(!includes(&a, &[2, 2, 2]));
        assert!(!includes(&a, &[5]));
        assert!(includes(&a, &[]));
    }

    #[test]
    fn empty_inputs() {
        let a = [1, 2, 3];
        assert_eq!(run(set_union, &a, &[]), vec![1, 2, 3]);
        assert_eq!(run(set_union, &[], &a), vec![1, 2, 3]);
        assert_eq!(run(set_intersection, &a, &[]), Vec::<i32>::new());
        assert_eq!(run(set_difference, &[], &a), Vec::<i32>::new());
        assert_eq!(run(set_symmetric_difference, &[], &a), vec![1, 2, 3]);
        assert!(!includes(&[], &a));
    }

    #[test]
    fn appends_to_existing_output() {
        let mut out = vec![0];
        set_union(&[1, 3], &[2], &mut out);
        assert_eq!(out, vec![0, 1, 2, 3]);
    }

    fn random_sorted(rng: &mut StdRng) -> Vec<i32> {
        let len = rng.random_range(0..40);
        let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(0..10)).collect();
        data.sort_unstable();
        data
    }

    #[test]
    fn random_inputs_match_multiset_oracle() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for _ in 0..50 {
            let a = random_sorted(&mut rng);
            let b = random_sorted(&mut rng);

            assert_eq!(
                run(set_difference, &a, &b),
                oracle(&a, &b, |x, y| x.saturating_sub(y))
            );
            assert_eq!(run(set_intersection, &a, &b), oracle(&a, &b, usize::min));
            assert_eq!(run(set_union, &a, &b), oracle(&a, &b, usize::max));
            assert_eq!(
                run(set_symmetric_difference, &a, &b),
                oracle(&a, &b, usize::abs_diff)
            );
            assert_eq!(run(merge, &a, &b), oracle(&a, &b, |x, y| x + y));

            let inter = run(set_intersection, &a, &b);
            assert!(includes(&a, &inter));
            assert!(includes(&b, &inter));
        }
    }

    #[test]
    fn merge_is_stable_across_inputs() {
        let a = [(1, 'a'), (2, 'a'), (2, 'b')];
        let b = [(2, 'x'), (3, 'x')];
        let mut out = Vec::new();
        merge_by(&a, &b, &mut out, |l, r| l.0 < r.0);
        assert_eq!(out, vec![(1, 'a'), (2, 'a'), (2, 'b'), (2, 'x'), (3, 'x')]);
    }

    #[test]
    fn union_prefers_first_on_ties() {
        let a = [(1, 'a'), (1, 'b')];
        let b = [(1, 'x'), (1, 'y'), (1, 'z')];
        let mut out = Vec::new();
        set_union_by(&a, &b, &mut out, |l, r| l.0 < r.0);
        assert_eq!(out, vec![(1, 'a'), (1, 'b'), (1, 'z')]);
    }
}
