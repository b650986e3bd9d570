//! In-place value mutation and logical removal.
//!
//! `remove`, `remove_if` and `unique` compact the kept elements to the front
//! and return the new logical length. Everything past it is a permutation of
//! the discarded elements; truncate the owning `Vec` to drop them.

pub fn fill<T: Clone>(data: &mut [T], value: T) {
    data.fill(value);
}

/// Assigns successive results of `f` to each position, front to back.
pub fn generate<T, G>(data: &mut [T], mut f: G)
where
    G: FnMut() -> T,
{
    for slot in data.iter_mut() {
        *slot = f();
    }
}

pub fn replace<T: PartialEq + Clone>(data: &mut [T], old: &T, new: &T) {
    replace_if(data, |item| item == old, new);
}

pub fn replace_if<T, P>(data: &mut [T], mut pred: P, new: &T)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    for item in data.iter_mut() {
        if pred(item) {
            item.clone_from(new);
        }
    }
}

pub fn remove<T: PartialEq>(data: &mut [T], value: &T) -> usize {
    remove_if(data, |item| item == value)
}

pub fn remove_if<T, P>(data: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut write = 0usize;
    for read in 0..data.len() {
        if !pred(&data[read]) {
            data.swap(write, read);
            write += 1;
        }
    }
    write
}

/// Collapses runs of consecutive equal elements to their first element.
pub fn unique<T: PartialEq>(data: &mut [T]) -> usize {
    unique_by(data, |a, b| a == b)
}

/// `same(kept, candidate)` is called with the last kept element first.
pub fn unique_by<T, F>(data: &mut [T], mut same: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if data.is_empty() {
        return 0;
    }

    let mut last = 0usize;
    for read in 1..data.len() {
        if !same(&data[last], &data[read]) {
            last += 1;
            data.swap(last, read);
        }
    }
    last + 1
}
