//! Binary max-heap over a slice, implicit layout: the children of `i` are
//! `2i + 1` and `2i + 2`. "Max" is with respect to the comparator, so a
//! reversed comparator yields a min-heap.

pub fn make_heap<T: Ord>(data: &mut [T]) {
    make_heap_by(data, |a, b| a < b);
}

pub fn make_heap_by<T, F>(data: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    build_heap(data, &mut is_less);
}

/// Restores the heap after a new element was placed at the end of `data`.
/// `data[..len - 1]` must already be a heap.
pub fn push_heap<T: Ord>(data: &mut [T]) {
    push_heap_by(data, |a, b| a < b);
}

pub fn push_heap_by<T, F>(data: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    sift_up(data, len - 1, &mut is_less);
}

/// Moves the maximum to the last position and re-heapifies `data[..len - 1]`.
/// The popped element stays in the slice; shrink the owner afterwards.
pub fn pop_heap<T: Ord>(data: &mut [T]) {
    pop_heap_by(data, |a, b| a < b);
}

pub fn pop_heap_by<T, F>(data: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    data.swap(0, len - 1);
    sift_down(data, 0, len - 1, &mut is_less);
}

/// Sorts a heap into ascending order. `data` must be a heap on entry.
pub fn sort_heap<T: Ord>(data: &mut [T]) {
    sort_heap_by(data, |a, b| a < b);
}

pub fn sort_heap_by<T, F>(data: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    drain_heap(data, &mut is_less);
}

pub fn is_heap<T: Ord>(data: &[T]) -> bool {
    is_heap_by(data, |a, b| a < b)
}

pub fn is_heap_by<T, F>(data: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_heap_until_by(data, is_less) == data.len()
}

/// Returns the index of the first element that is greater than its parent,
/// or `data.len()` if the whole slice is a heap.
pub fn is_heap_until<T: Ord>(data: &[T]) -> usize {
    is_heap_until_by(data, |a, b| a < b)
}

pub fn is_heap_until_by<T, F>(data: &[T], mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    for child in 1..data.len() {
        if is_less(&data[(child - 1) / 2], &data[child]) {
            return child;
        }
    }
    data.len()
}

pub(crate) fn heap_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    build_heap(data, is_less);
    drain_heap(data, is_less);
}

fn build_heap<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len, is_less);
        if start == 0 {
            break;
        }
        start -= 1;
    }
}

fn drain_heap<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut end = data.len();
    while end > 1 {
        end -= 1;
        data.swap(0, end);
        sift_down(data, 0, end, is_less);
    }
}

/// Sifts `data[root]` down within the heap `data[..end]`.
#[inline]
pub(crate) fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && is_less(&data[child], &data[child + 1]) {
            swap_idx = child + 1;
        }

        if !is_less(&data[root], &data[swap_idx]) {
            break;
        }

        data.swap(root, swap_idx);
        root = swap_idx;
    }
}

#[inline]
fn sift_up<T, F>(data: &mut [T], mut idx: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while idx > 0 {
        let parent = (idx - 1) / 2;
        if !is_less(&data[parent], &data[idx]) {
            break;
        }
        data.swap(parent, idx);
        idx = parent;
    }
}
