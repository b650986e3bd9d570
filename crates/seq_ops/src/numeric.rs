use std::ops::{Add, AddAssign, Mul, Sub};

use num_traits::One;

/// Fills `data` with `start, start + 1, start + 2, ...`.
pub fn iota<T>(data: &mut [T], start: T)
where
    T: Clone + AddAssign + One,
{
    let mut next = start;
    for slot in data.iter_mut() {
        *slot = next.clone();
        next += T::one();
    }
}

/// Left fold with `+`.
pub fn accumulate<T>(data: &[T], init: T) -> T
where
    T: Clone + Add<Output = T>,
{
    accumulate_by(data, init, |acc, item| acc + item.clone())
}

pub fn accumulate_by<T, A, F>(data: &[T], init: A, combine: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    data.iter().fold(init, combine)
}

/// Replaces every element with the running total up to and including it.
pub fn partial_sum<T>(data: &mut [T])
where
    T: Clone + Add<Output = T>,
{
    for i in 1..data.len() {
        data[i] = data[i - 1].clone() + data[i].clone();
    }
}

/// `out[i] = src[0] + ... + src[i]`.
pub fn partial_sum_into<T>(src: &[T], out: &mut [T]) -> usize
where
    T: Clone + Add<Output = T>,
{
    let out = &mut out[..src.len()];
    let mut running: Option<T> = None;
    for (slot, item) in out.iter_mut().zip(src) {
        let next = match running.take() {
            Some(total) => total + item.clone(),
            None => item.clone(),
        };
        *slot = next.clone();
        running = Some(next);
    }
    src.len()
}

/// `init + a[0] * b[0] + a[1] * b[1] + ...` over the length of `a`.
pub fn inner_product<T>(a: &[T], b: &[T], init: T) -> T
where
    T: Clone + Add<Output = T> + Mul<Output = T>,
{
    let b = &b[..a.len()];
    a.iter()
        .zip(b)
        .fold(init, |acc, (x, y)| acc + x.clone() * y.clone())
}

/// Replaces `data[i]` with `data[i] - data[i - 1]` for `i > 0`, using the
/// original values. `data[0]` is kept.
pub fn adjacent_difference<T>(data: &mut [T])
where
    T: Clone + Sub<Output = T>,
{
    for i in (1..data.len()).rev() {
        data[i] = data[i].clone() - data[i - 1].clone();
    }
}

pub fn adjacent_difference_into<T>(src: &[T], out: &mut [T]) -> usize
where
    T: Clone + Sub<Output = T>,
{
    let out = &mut out[..src.len()];
    if let (Some(slot), Some(first)) = (out.first_mut(), src.first()) {
        *slot = first.clone();
    }
    for (slot, pair) in out.iter_mut().skip(1).zip(src.windows(2)) {
        *slot = pair[1].clone() - pair[0].clone();
    }
    src.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iota_counts_up() {
        let mut data = [0_i64; 5];
        iota(&mut data, -2);
        assert_eq!(data, [-2, -1, 0, 1, 2]);

        let mut floats = [0.0_f64; 3];
        iota(&mut floats, 0.5);
        assert_eq!(floats, [0.5, 1.5, 2.5]);
    }

    #[test]
    fn accumulate_sums_and_folds() {
        let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 5];
        assert_eq!(accumulate(&numbers, 0), 60);
        assert_eq!(accumulate::<i32>(&[], 7), 7);

        let joined = accumulate_by(&["a", "b", "c"], String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "abc");

        let product = accumulate_by(&[1, 2, 3, 4], 1, |acc, x| acc * x);
        assert_eq!(product, 24);
    }

    #[test]
    fn partial_sum_then_adjacent_difference_round_trips() {
        let original = vec![1, 2, 3, 4, 5];
        let mut data = original.clone();
        partial_sum(&mut data);
        assert_eq!(data, vec![1, 3, 6, 10, 15]);
        adjacent_difference(&mut data);
        assert_eq!(data, original);
    }

    #[test]
    fn into_variants_write_positionally() {
        let src = [3, 1, 4, 1, 5];
        let mut sums = [0; 6];
        assert_eq!(partial_sum_into(&src, &mut sums), 5);
        assert_eq!(sums, [3, 4, 8, 9, 14, 0]);

        let mut diffs = [0; 5];
        assert_eq!(adjacent_difference_into(&src, &mut diffs), 5);
        assert_eq!(diffs, [3, -2, 3, -3, 4]);

        let mut none: [i32; 0] = [];
        assert_eq!(partial_sum_into(&[], &mut none), 0);
        assert_eq!(adjacent_difference_into(&[], &mut none), 0);
    }

    #[test]
    fn inner_product_of_self() {
        let data = [1, 3, 6];
        assert_eq!(inner_product(&data, &data, 0), 1 + 9 + 36);
        assert_eq!(inner_product(&[2, 3], &[4, 5, 6], 10), 10 + 8 + 15);
    }
}
