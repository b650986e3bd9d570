use crate::TUNED_PARAMS;

use super::common;

pub(crate) fn merge_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    if super::is_sorted_until_by(data, &mut *is_less) == len {
        return;
    }
    if len <= TUNED_PARAMS.insertion_threshold {
        common::insertion_sort(data, is_less);
        return;
    }

    let mut buf = data.to_vec();
    merge_sort_recursive(&mut buf, data, 0, len, is_less);
}

/// Sorts `[left, right)` into `dst`, using `src` as scratch. Both buffers
/// hold the same elements over that range on entry.
fn merge_sort_recursive<T, F>(
    src: &mut [T],
    dst: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = right - left;
    if len <= TUNED_PARAMS.insertion_threshold {
        common::insertion_sort(&mut dst[left..right], is_less);
        return;
    }

    let mid = left + (len >> 1);

    merge_sort_recursive(dst, src, left, mid, is_less);
    merge_sort_recursive(dst, src, mid, right, is_less);

    if !is_less(&src[mid], &src[mid - 1]) {
        dst[left..right].clone_from_slice(&src[left..right]);
        return;
    }

    merge_ranges(src, dst, left, mid, right, is_less);
}

/// Merges `src[left..mid]` and `src[mid..right]` into `dst[left..right]`,
/// taking from the left run on ties.
fn merge_ranges<T, F>(
    src: &[T],
    dst: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        if is_less(&src[j], &src[i]) {
            dst[k] = src[j].clone();
            j += 1;
        } else {
            dst[k] = src[i].clone();
            i += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..(k + (mid - i))].clone_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..(k + (right - j))].clone_from_slice(&src[j..right]);
    }
}

/// Stable merge of the sorted runs `data[..mid]` and `data[mid..]` without a
/// buffer: split the longer run at its midpoint, find the matching cut in the
/// other run by binary search, rotate the two inner pieces past each other and
/// recurse on both halves.
pub(crate) fn merge_in_place<T, F>(data: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if mid == 0 || mid >= len {
        return;
    }
    if !is_less(&data[mid], &data[mid - 1]) {
        return;
    }
    if len == 2 {
        data.swap(0, 1);
        return;
    }

    let (cut1, cut2) = if mid >= len - mid {
        let cut1 = mid / 2;
        let key = &data[cut1];
        let offset = data[mid..].partition_point(|x| is_less(x, key));
        (cut1, mid + offset)
    } else {
        let cut2 = mid + (len - mid) / 2;
        let key = &data[cut2];
        let cut1 = data[..mid].partition_point(|x| !is_less(key, x));
        (cut1, cut2)
    };

    data[cut1..cut2].rotate_left(mid - cut1);
    let new_mid = cut1 + (cut2 - mid);

    let (lo, hi) = data.split_at_mut(new_mid);
    merge_in_place(lo, cut1, is_less);
    merge_in_place(hi, cut2 - new_mid, is_less);
}
