//! Generic algorithms over in-memory sequences.
//!
//! Every operation borrows a slice (the whole sequence or any sub-range of
//! it) and either reorders it in place, derives a value from it, or writes
//! into a caller-supplied destination.
//!
//! - Comparators are "strictly less" functions `FnMut(&T, &T) -> bool` and
//!   must form a strict weak ordering. Each `*_by` operation has a plain
//!   counterpart using `Ord`.
//! - Operations over sorted input (binary search, set algebra, merges) do not
//!   verify sortedness; unsorted input gives unspecified output.
//! - Positions are indices into the slice passed in. Boundary results are in
//!   `0..=len`; "not found" is `None`.

mod copy;
mod error;
mod heap;
mod mutate;
mod numeric;
mod partition;
mod permute;
mod search;
mod set_ops;
mod sort;

pub use copy::{
    copy, copy_backward, copy_if, move_backward, move_to, remove_copy, remove_copy_if,
    replace_copy, replace_copy_if, reverse_copy, rotate_copy, swap_ranges, transform,
    transform_binary, transform_in_place, unique_copy, unique_copy_by,
};
pub use error::{RangeError, checked_range};
pub use heap::{
    is_heap, is_heap_by, is_heap_until, is_heap_until_by, make_heap, make_heap_by, pop_heap,
    pop_heap_by, push_heap, push_heap_by, sort_heap, sort_heap_by,
};
pub use mutate::{fill, generate, remove, remove_if, replace, replace_if, unique, unique_by};
pub use numeric::{
    accumulate, accumulate_by, adjacent_difference, adjacent_difference_into, inner_product,
    iota, partial_sum, partial_sum_into,
};
pub use partition::{is_partitioned, partition, partition_copy, partition_point, stable_partition};
pub use permute::{
    next_permutation, next_permutation_by, prev_permutation, prev_permutation_by, reverse,
    rotate, shuffle,
};
pub use search::{
    adjacent_find, adjacent_find_by, all_of, any_of, binary_search, binary_search_by, count,
    count_if, equal, equal_range, equal_range_by, find, find_if, find_if_not, is_permutation,
    is_permutation_by, lexicographical_compare, lexicographical_compare_by, lower_bound,
    lower_bound_by, max_element, max_element_by, min_element, min_element_by, minmax_element,
    minmax_element_by, mismatch, mismatch_by, none_of, sample, upper_bound, upper_bound_by,
};
pub use set_ops::{
    includes, includes_by, merge, merge_by, set_difference, set_difference_by, set_intersection,
    set_intersection_by, set_symmetric_difference, set_symmetric_difference_by, set_union,
    set_union_by,
};
pub use sort::{
    inplace_merge, inplace_merge_by, is_sorted, is_sorted_by, is_sorted_until,
    is_sorted_until_by, nth_element, nth_element_by, partial_sort, partial_sort_by,
    partial_sort_copy, partial_sort_copy_by, sort, sort_by, stable_sort, stable_sort_by,
};

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_threshold: usize,
    pub ninther_threshold: usize,
    pub introsort_depth_factor_num: usize,
    pub introsort_depth_factor_den: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 20,
    ninther_threshold: 64,
    introsort_depth_factor_num: 5,
    introsort_depth_factor_den: 2,
};
