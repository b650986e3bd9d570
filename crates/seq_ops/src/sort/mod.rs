mod common;
mod introsort;
mod merge_sort;
mod select;

/// Unstable sort (introsort). Equal elements may be reordered.
pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a < b);
}

pub fn sort_by<T, F>(data: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    introsort::introsort(data, &mut is_less);
}

/// Stable merge sort using one scratch buffer of `data.len()` clones.
pub fn stable_sort<T: Ord + Clone>(data: &mut [T]) {
    stable_sort_by(data, |a, b| a < b);
}

pub fn stable_sort_by<T, F>(data: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    merge_sort::merge_sort(data, &mut is_less);
}

/// Afterwards `data[..mid]` holds the `mid` smallest elements in ascending
/// order; the order of `data[mid..]` is unspecified.
///
/// Panics if `mid > data.len()`.
pub fn partial_sort<T: Ord>(data: &mut [T], mid: usize) {
    partial_sort_by(data, mid, |a, b| a < b);
}

pub fn partial_sort_by<T, F>(data: &mut [T], mid: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    select::partial_sort(data, mid, &mut is_less);
}

pub fn partial_sort_copy<T: Ord + Clone>(src: &[T], out: &mut [T]) -> usize {
    partial_sort_copy_by(src, out, |a, b| a < b)
}

pub fn partial_sort_copy_by<T, F>(src: &[T], out: &mut [T], mut is_less: F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    select::partial_sort_copy(src, out, &mut is_less)
}

/// Places at `nth` the element a full sort would put there, with nothing
/// greater before it and nothing less after it. No-op if `nth >= data.len()`.
pub fn nth_element<T: Ord>(data: &mut [T], nth: usize) {
    nth_element_by(data, nth, |a, b| a < b);
}

pub fn nth_element_by<T, F>(data: &mut [T], nth: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    introsort::select_nth(data, nth, &mut is_less);
}

/// Merges the sorted runs `data[..mid]` and `data[mid..]` in place. Stable.
pub fn inplace_merge<T: Ord>(data: &mut [T], mid: usize) {
    inplace_merge_by(data, mid, |a, b| a < b);
}

pub fn inplace_merge_by<T, F>(data: &mut [T], mid: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    merge_sort::merge_in_place(data, mid, &mut is_less);
}

pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    is_sorted_by(data, |a, b| a < b)
}

pub fn is_sorted_by<T, F>(data: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_sorted_until_by(data, is_less) == data.len()
}

/// Length of the longest sorted prefix.
pub fn is_sorted_until<T: Ord>(data: &[T]) -> usize {
    is_sorted_until_by(data, |a, b| a < b)
}

pub fn is_sorted_until_by<T, F>(data: &[T], mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..data.len() {
        if is_less(&data[i], &data[i - 1]) {
            return i;
        }
    }
    data.len()
}
