use rand::Rng;

/// Rotates left so `data[new_first]` becomes the first element. Returns the
/// new position of the element that used to be first.
///
/// Panics if `new_first > data.len()`.
pub fn rotate<T>(data: &mut [T], new_first: usize) -> usize {
    data.rotate_left(new_first);
    data.len() - new_first
}

pub fn reverse<T>(data: &mut [T]) {
    data.reverse();
}

/// Fisher-Yates shuffle. The result is reproducible only if `rng` is.
pub fn shuffle<T, R>(data: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..data.len()).rev() {
        let j = rng.random_range(0..=i);
        data.swap(i, j);
    }
}

/// Advances `data` to the next lexicographic permutation. On the last
/// permutation, wraps to the first (ascending) one and returns `false`.
pub fn next_permutation<T: Ord>(data: &mut [T]) -> bool {
    next_permutation_by(data, |a, b| a < b)
}

pub fn next_permutation_by<T, F>(data: &mut [T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `i`.
    let mut i = len - 1;
    while i > 0 && !is_less(&data[i - 1], &data[i]) {
        i -= 1;
    }
    if i == 0 {
        data.reverse();
        return false;
    }

    let mut j = len - 1;
    while !is_less(&data[i - 1], &data[j]) {
        j -= 1;
    }
    data.swap(i - 1, j);
    data[i..].reverse();
    true
}

/// Steps `data` back to the previous lexicographic permutation. On the first
/// permutation, wraps to the last (descending) one and returns `false`.
pub fn prev_permutation<T: Ord>(data: &mut [T]) -> bool {
    prev_permutation_by(data, |a, b| a < b)
}

pub fn prev_permutation_by<T, F>(data: &mut [T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return false;
    }

    let mut i = len - 1;
    while i > 0 && !is_less(&data[i], &data[i - 1]) {
        i -= 1;
    }
    if i == 0 {
        data.reverse();
        return false;
    }

    let mut j = len - 1;
    while !is_less(&data[j], &data[i - 1]) {
        j -= 1;
    }
    data.swap(i - 1, j);
    data[i..].reverse();
    true
}
