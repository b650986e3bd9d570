use std::ops::Range;

use rand::Rng;

pub fn count<T: PartialEq>(data: &[T], value: &T) -> usize {
    count_if(data, |item| item == value)
}

pub fn count_if<T, P>(data: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    data.iter().filter(|item| pred(*item)).count()
}

pub fn all_of<T, P>(data: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    data.iter().all(pred)
}

pub fn any_of<T, P>(data: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    data.iter().any(pred)
}

pub fn none_of<T, P>(data: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !any_of(data, pred)
}

/// Element-wise equality of two sequences of any shape. Sequences of
/// different lengths are never equal.
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    a.into_iter().eq(b)
}

/// `true` iff `a` and `b` hold the same multiset. O(n^2) comparisons in the
/// worst case; only equality is required of `T`.
pub fn is_permutation<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    is_permutation_by(a, b, |x, y| x == y)
}

pub fn is_permutation_by<T, F>(a: &[T], b: &[T], mut eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if a.len() != b.len() {
        return false;
    }

    let common = mismatch_by(a, b, &mut eq).unwrap_or(a.len());
    let (a, b) = (&a[common..], &b[common..]);

    for (i, item) in a.iter().enumerate() {
        // Count each distinct value once, at its first occurrence.
        if a[..i].iter().any(|seen| eq(seen, item)) {
            continue;
        }
        let in_b = b.iter().filter(|other| eq(item, *other)).count();
        if in_b == 0 {
            return false;
        }
        let in_a = 1 + a[i + 1..].iter().filter(|other| eq(item, *other)).count();
        if in_a != in_b {
            return false;
        }
    }
    true
}

/// `true` iff `a` orders strictly before `b`; a proper prefix orders first.
pub fn lexicographical_compare<T: Ord>(a: &[T], b: &[T]) -> bool {
    lexicographical_compare_by(a, b, |x, y| x < y)
}

pub fn lexicographical_compare_by<T, F>(a: &[T], b: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    for (x, y) in a.iter().zip(b) {
        if is_less(x, y) {
            return true;
        }
        if is_less(y, x) {
            return false;
        }
    }
    a.len() < b.len()
}

/// First index where `a` and `b` differ, looking no further than the shorter
/// of the two.
pub fn mismatch<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
    mismatch_by(a, b, |x, y| x == y)
}

pub fn mismatch_by<T, F>(a: &[T], b: &[T], mut eq: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    a.iter().zip(b).position(|(x, y)| !eq(x, y))
}

pub fn find<T: PartialEq>(data: &[T], value: &T) -> Option<usize> {
    find_if(data, |item| item == value)
}

pub fn find_if<T, P>(data: &[T], pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    data.iter().position(pred)
}

pub fn find_if_not<T, P>(data: &[T], mut pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    data.iter().position(|item| !pred(item))
}

/// Index of the first element equal to its successor.
pub fn adjacent_find<T: PartialEq>(data: &[T]) -> Option<usize> {
    adjacent_find_by(data, |a, b| a == b)
}

pub fn adjacent_find_by<T, F>(data: &[T], mut eq: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    data.windows(2).position(|pair| eq(&pair[0], &pair[1]))
}

/// First index whose element is not less than `value`. `data` must be sorted.
pub fn lower_bound<T: Ord>(data: &[T], value: &T) -> usize {
    lower_bound_by(data, value, |a, b| a < b)
}

pub fn lower_bound_by<T, F>(data: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    crate::partition_point(data, |item| is_less(item, value))
}

/// First index whose element is greater than `value`. `data` must be sorted.
pub fn upper_bound<T: Ord>(data: &[T], value: &T) -> usize {
    upper_bound_by(data, value, |a, b| a < b)
}

pub fn upper_bound_by<T, F>(data: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    crate::partition_point(data, |item| !is_less(value, item))
}

/// The run of elements equivalent to `value`, as `lower_bound..upper_bound`.
pub fn equal_range<T: Ord>(data: &[T], value: &T) -> Range<usize> {
    equal_range_by(data, value, |a, b| a < b)
}

pub fn equal_range_by<T, F>(data: &[T], value: &T, mut is_less: F) -> Range<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let lo = lower_bound_by(data, value, &mut is_less);
    let hi = lo + upper_bound_by(&data[lo..], value, &mut is_less);
    lo..hi
}

pub fn binary_search<T: Ord>(data: &[T], value: &T) -> bool {
    binary_search_by(data, value, |a, b| a < b)
}

pub fn binary_search_by<T, F>(data: &[T], value: &T, mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let idx = lower_bound_by(data, value, &mut is_less);
    idx < data.len() && !is_less(value, &data[idx])
}

/// Index of the first smallest element.
pub fn min_element<T: Ord>(data: &[T]) -> Option<usize> {
    min_element_by(data, |a, b| a < b)
}

pub fn min_element_by<T, F>(data: &[T], mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    if data.is_empty() {
        return None;
    }
    let mut best = 0usize;
    for i in 1..data.len() {
        if is_less(&data[i], &data[best]) {
            best = i;
        }
    }
    Some(best)
}

/// Index of the first largest element.
pub fn max_element<T: Ord>(data: &[T]) -> Option<usize> {
    max_element_by(data, |a, b| a < b)
}

pub fn max_element_by<T, F>(data: &[T], mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    if data.is_empty() {
        return None;
    }
    let mut best = 0usize;
    for i in 1..data.len() {
        if is_less(&data[best], &data[i]) {
            best = i;
        }
    }
    Some(best)
}

/// `(first smallest, last largest)` in one pass. Note the asymmetric
/// tie-break: unlike [`max_element`], ties for the maximum resolve to the
/// last occurrence.
pub fn minmax_element<T: Ord>(data: &[T]) -> Option<(usize, usize)> {
    minmax_element_by(data, |a, b| a < b)
}

pub fn minmax_element_by<T, F>(data: &[T], mut is_less: F) -> Option<(usize, usize)>
where
    F: FnMut(&T, &T) -> bool,
{
    if data.is_empty() {
        return None;
    }
    let (mut min, mut max) = (0usize, 0usize);
    for i in 1..data.len() {
        if is_less(&data[i], &data[min]) {
            min = i;
        }
        if !is_less(&data[i], &data[max]) {
            max = i;
        }
    }
    Some((min, max))
}

/// Appends `k` elements of `src` chosen uniformly without replacement, in
/// their source order (selection sampling). All of `src` when `k >= len`.
pub fn sample<T, R>(src: &[T], out: &mut Vec<T>, k: usize, rng: &mut R)
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut needed = k.min(src.len());
    for (i, item) in src.iter().enumerate() {
        if needed == 0 {
            break;
        }
        let remaining = src.len() - i;
        if rng.random_range(0..remaining) < needed {
            out.push(item.clone());
            needed -= 1;
        }
    }
}
