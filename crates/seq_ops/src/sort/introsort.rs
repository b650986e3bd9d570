use crate::TUNED_PARAMS;
use crate::heap;

use super::common;

pub(crate) fn introsort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < 2 {
        return;
    }
    let depth_limit = common::introsort_depth_limit(data.len()) + 1;
    introsort_recursive(data, depth_limit, is_less);
}

fn introsort_recursive<T, F>(mut data: &mut [T], mut depth_limit: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while data.len() > TUNED_PARAMS.insertion_threshold {
        if depth_limit == 0 {
            heap::heap_sort(data, is_less);
            return;
        }
        depth_limit -= 1;

        let pivot = common::choose_pivot(data, is_less);
        let (lt, gt) = common::partition_3way(data, pivot, is_less);
        let (left, rest) = data.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);

        if left.len() < right.len() {
            introsort_recursive(left, depth_limit, is_less);
            data = right;
        } else {
            introsort_recursive(right, depth_limit, is_less);
            data = left;
        }
    }

    common::insertion_sort(data, is_less);
}

/// Introselect: narrows to the band containing `nth` until the band is the
/// pivot's equivalence class or short enough to finish by insertion sort.
pub(crate) fn select_nth<T, F>(mut data: &mut [T], mut nth: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if nth >= data.len() {
        return;
    }
    let mut depth_limit = common::introsort_depth_limit(data.len()) + 1;

    while data.len() > TUNED_PARAMS.insertion_threshold {
        if depth_limit == 0 {
            heap::heap_sort(data, is_less);
            return;
        }
        depth_limit -= 1;

        let pivot = common::choose_pivot(data, is_less);
        let (lt, gt) = common::partition_3way(data, pivot, is_less);
        if nth < lt {
            let (left, _) = data.split_at_mut(lt);
            data = left;
        } else if nth >= gt {
            let (_, right) = data.split_at_mut(gt);
            data = right;
            nth -= gt;
        } else {
            return;
        }
    }

    common::insertion_sort(data, is_less);
}
