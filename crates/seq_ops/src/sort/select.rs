use crate::heap;

/// Heap-selects the `mid` smallest elements into `data[..mid]` and sorts them.
pub(crate) fn partial_sort<T, F>(data: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(mid <= data.len(), "mid {mid} out of bounds for length {}", data.len());
    if mid == 0 {
        return;
    }

    heap::make_heap_by(&mut data[..mid], &mut *is_less);
    for i in mid..data.len() {
        if is_less(&data[i], &data[0]) {
            data.swap(0, i);
            heap::sift_down(data, 0, mid, is_less);
        }
    }
    heap::sort_heap_by(&mut data[..mid], &mut *is_less);
}

/// Writes the `min(src.len(), out.len())` smallest elements of `src` into the
/// front of `out` in ascending order and returns how many were written.
pub(crate) fn partial_sort_copy<T, F>(src: &[T], out: &mut [T], is_less: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let k = src.len().min(out.len());
    if k == 0 {
        return 0;
    }

    let heap_part = &mut out[..k];
    heap_part.clone_from_slice(&src[..k]);
    heap::make_heap_by(heap_part, &mut *is_less);
    for item in &src[k..] {
        if is_less(item, &heap_part[0]) {
            heap_part[0] = item.clone();
            heap::sift_down(heap_part, 0, k, is_less);
        }
    }
    heap::sort_heap_by(heap_part, &mut *is_less);
    k
}
