use crate::TUNED_PARAMS;

/// Stable insertion sort.
#[inline]
pub(crate) fn insertion_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && is_less(&data[j], &data[j - 1]) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[inline]
pub(crate) fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub(crate) fn introsort_depth_limit(n: usize) -> usize {
    let log = floor_log2(n);
    (log * TUNED_PARAMS.introsort_depth_factor_num) / TUNED_PARAMS.introsort_depth_factor_den
}

#[inline]
fn median3<T, F>(data: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&data[a], &data[b]) {
        if is_less(&data[b], &data[c]) {
            b
        } else if is_less(&data[a], &data[c]) {
            c
        } else {
            a
        }
    } else if is_less(&data[a], &data[c]) {
        a
    } else if is_less(&data[b], &data[c]) {
        c
    } else {
        b
    }
}

/// Index of a pivot candidate: median of three for short slices, Tukey's
/// ninther from `TUNED_PARAMS.ninther_threshold` upwards.
pub(crate) fn choose_pivot<T, F>(data: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    debug_assert!(len >= 3);
    let mid = len / 2;
    let r = len - 1;
    if len < TUNED_PARAMS.ninther_threshold {
        return median3(data, 0, mid, r, is_less);
    }

    let step = len / 8;
    let m1 = median3(data, 0, step, step * 2, is_less);
    let m2 = median3(data, mid - step, mid, mid + step, is_less);
    let m3 = median3(data, r - step * 2, r - step, r, is_less);
    median3(data, m1, m2, m3, is_less)
}

/// Three-way partition around `data[pivot]`.
///
/// Returns `(lt, gt)` such that `data[..lt]` is less than the pivot,
/// `data[lt..gt]` is equivalent to it and `data[gt..]` is greater.
/// `lt < gt` always holds since the pivot itself lands in the middle band.
pub(crate) fn partition_3way<T, F>(
    data: &mut [T],
    pivot: usize,
    is_less: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    data.swap(0, pivot);
    let (head, rest) = data.split_at_mut(1);
    let pivot = &head[0];

    let mut lt = 0usize;
    let mut i = 0usize;
    let mut gt = rest.len();
    while i < gt {
        if is_less(&rest[i], pivot) {
            rest.swap(i, lt);
            lt += 1;
            i += 1;
        } else if is_less(pivot, &rest[i]) {
            gt -= 1;
            rest.swap(i, gt);
        } else {
            i += 1;
        }
    }

    // `rest` is offset by one; park the pivot after the last smaller element.
    data.swap(0, lt);
    (lt, gt + 1)
}
