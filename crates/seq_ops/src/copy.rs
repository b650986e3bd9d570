//! Copying, moving and transforming between sequences.
//!
//! Positional operations write into `&mut [T]` destinations and return the
//! number of elements written; they panic if the destination is too short.
//! Filtering operations append to a `Vec` and leave the source untouched.

use std::mem;
use std::ops::Range;

use crate::error::{RangeError, checked_range};

pub fn copy<T: Clone>(src: &[T], dst: &mut [T]) -> usize {
    dst[..src.len()].clone_from_slice(src);
    src.len()
}

/// Moves `src` into the front of `dst`, leaving `T::default()` behind.
pub fn move_to<T: Default>(src: &mut [T], dst: &mut [T]) -> usize {
    for (slot, item) in dst[..src.len()].iter_mut().zip(src.iter_mut()) {
        *slot = mem::take(item);
    }
    src.len()
}

/// Exchanges `a` with the front of `b`.
pub fn swap_ranges<T>(a: &mut [T], b: &mut [T]) -> usize {
    a.swap_with_slice(&mut b[..a.len()]);
    a.len()
}

/// Copies `data[src]` so that it ends at `dest_end`, writing back to front,
/// which is correct when the destination overlaps the source from the right.
/// Returns the start of the destination.
pub fn copy_backward<T: Clone>(
    data: &mut [T],
    src: Range<usize>,
    dest_end: usize,
) -> Result<usize, RangeError> {
    let (src, dest) = backward_ranges(data.len(), src, dest_end)?;
    for k in (0..src.len()).rev() {
        data[dest.start + k] = data[src.start + k].clone();
    }
    Ok(dest.start)
}

/// Like [`copy_backward`], but moves; source slots not overwritten by the
/// destination are left as `T::default()`.
pub fn move_backward<T: Default>(
    data: &mut [T],
    src: Range<usize>,
    dest_end: usize,
) -> Result<usize, RangeError> {
    let (src, dest) = backward_ranges(data.len(), src, dest_end)?;
    for k in (0..src.len()).rev() {
        let item = mem::take(&mut data[src.start + k]);
        data[dest.start + k] = item;
    }
    Ok(dest.start)
}

fn backward_ranges(
    len: usize,
    src: Range<usize>,
    dest_end: usize,
) -> Result<(Range<usize>, Range<usize>), RangeError> {
    let src = checked_range(src, len)?;
    let dest_start = dest_end
        .checked_sub(src.len())
        .ok_or(RangeError::DestinationUnderflow {
            end: dest_end,
            count: src.len(),
        })?;
    let dest = checked_range(dest_start..dest_end, len)?;
    Ok((src, dest))
}

/// `out[i] = f(&src[i])`.
pub fn transform<T, U, F>(src: &[T], out: &mut [U], mut f: F) -> usize
where
    F: FnMut(&T) -> U,
{
    for (slot, item) in out[..src.len()].iter_mut().zip(src) {
        *slot = f(item);
    }
    src.len()
}

pub fn transform_in_place<T, F>(data: &mut [T], mut f: F)
where
    F: FnMut(&T) -> T,
{
    for item in data.iter_mut() {
        *item = f(item);
    }
}

/// `out[i] = f(&a[i], &b[i])` for every `i` in `a`; `b` must be at least as
/// long as `a`.
pub fn transform_binary<A, B, U, F>(a: &[A], b: &[B], out: &mut [U], mut f: F) -> usize
where
    F: FnMut(&A, &B) -> U,
{
    let b = &b[..a.len()];
    for ((slot, x), y) in out[..a.len()].iter_mut().zip(a).zip(b) {
        *slot = f(x, y);
    }
    a.len()
}

pub fn copy_if<T, P>(src: &[T], out: &mut Vec<T>, mut pred: P)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    out.extend(src.iter().filter(|item| pred(*item)).cloned());
}

pub fn remove_copy<T: PartialEq + Clone>(src: &[T], out: &mut Vec<T>, value: &T) {
    remove_copy_if(src, out, |item| item == value);
}

pub fn remove_copy_if<T, P>(src: &[T], out: &mut Vec<T>, mut pred: P)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    copy_if(src, out, |item| !pred(item));
}

pub fn replace_copy<T: PartialEq + Clone>(src: &[T], out: &mut Vec<T>, old: &T, new: &T) {
    replace_copy_if(src, out, |item| item == old, new);
}

pub fn replace_copy_if<T, P>(src: &[T], out: &mut Vec<T>, mut pred: P, new: &T)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    out.extend(src.iter().map(|item| if pred(item) { new.clone() } else { item.clone() }));
}

/// Copies `src`, collapsing each run of consecutive equal elements to its
/// first element.
pub fn unique_copy<T: PartialEq + Clone>(src: &[T], out: &mut Vec<T>) {
    unique_copy_by(src, out, |a, b| a == b);
}

pub fn unique_copy_by<T, F>(src: &[T], out: &mut Vec<T>, mut same: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let Some((first, rest)) = src.split_first() else {
        return;
    };
    out.push(first.clone());
    let mut kept = first;
    for item in rest {
        if !same(kept, item) {
            out.push(item.clone());
            kept = item;
        }
    }
}

pub fn reverse_copy<T: Clone>(src: &[T], out: &mut Vec<T>) {
    out.extend(src.iter().rev().cloned());
}

/// Appends `src` rotated so that `src[new_first]` comes first.
pub fn rotate_copy<T: Clone>(src: &[T], new_first: usize, out: &mut Vec<T>) {
    let (head, tail) = src.split_at(new_first);
    out.extend_from_slice(tail);
    out.extend_from_slice(head);
}
