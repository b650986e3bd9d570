//! Chains operations on one sequence, checking the state after every step.

use rand::SeedableRng;
use rand::rngs::StdRng;
use seq_ops::*;

fn demo_rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

fn one_to_ten() -> Vec<i32> {
    (1..=10).collect()
}

fn is_subsequence(needle: &[i32], haystack: &[i32]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|x| rest.any(|y| y == x))
}

#[test]
fn heap_sort_partition_permutation_walkthrough() {
    let mut numbers = vec![1, 2, 3, 4, 5, 6, 7, 9, 10];

    make_heap(&mut numbers);
    assert!(is_heap(&numbers));
    assert_eq!(numbers[0], 10);

    numbers.push(8);
    push_heap(&mut numbers);
    assert!(is_heap(&numbers));

    pop_heap(&mut numbers);
    assert_eq!(numbers[9], 10);
    assert!(is_heap(&numbers[..9]));
    assert_eq!(numbers[0], 9);

    shuffle(&mut numbers, &mut demo_rng());
    assert!(is_permutation(&numbers, &one_to_ten()));
    sort(&mut numbers);
    assert_eq!(numbers, one_to_ten());

    shuffle(&mut numbers, &mut demo_rng());
    partial_sort(&mut numbers, 5);
    assert_eq!(&numbers[..5], &[1, 2, 3, 4, 5]);

    shuffle(&mut numbers, &mut demo_rng());
    nth_element(&mut numbers, 5);
    assert_eq!(numbers[5], 6);

    make_heap(&mut numbers);
    sort_heap(&mut numbers);
    assert_eq!(numbers, one_to_ten());

    shuffle(&mut numbers, &mut demo_rng());
    sort(&mut numbers[..5]);
    sort(&mut numbers[5..]);
    assert!(is_sorted(&numbers[..5]) && is_sorted(&numbers[5..]));
    inplace_merge(&mut numbers, 5);
    assert_eq!(numbers, one_to_ten());

    let evens = partition(&mut numbers, |x| x % 2 == 0);
    assert_eq!(evens, 5);
    let mut front = numbers[..evens].to_vec();
    sort(&mut front);
    assert_eq!(front, vec![2, 4, 6, 8, 10]);

    let before = numbers.clone();
    rotate(&mut numbers, 1);
    rotate(&mut numbers, 1);
    assert_eq!(&numbers[..8], &before[2..]);
    assert_eq!(&numbers[8..], &before[..2]);

    shuffle(&mut numbers, &mut demo_rng());
    let shuffled = numbers.clone();
    let advanced = next_permutation(&mut numbers);
    let retreated = prev_permutation(&mut numbers);
    assert_eq!(advanced, retreated);
    assert_eq!(numbers, shuffled);

    reverse(&mut numbers);
    let mut back = shuffled.clone();
    back.reverse();
    assert_eq!(numbers, back);

    assert_eq!(
        is_sorted(&numbers),
        numbers.windows(2).all(|w| w[0] <= w[1])
    );
    sort(&mut numbers);
    assert!(is_sorted(&numbers));

    assert!(!is_heap(&numbers));
    make_heap(&mut numbers);
    assert!(is_heap(&numbers));
}

#[test]
fn stable_sort_versus_sort_on_names() {
    let animals = vec!["mouse", "dog", "cat", "ant", "moth", "elephant"];
    let by_len = |a: &&str, b: &&str| a.len() < b.len();

    let mut unstable = animals.clone();
    sort_by(&mut unstable, by_len);
    assert!(is_sorted_by(&unstable, by_len));
    assert!(is_permutation(&unstable, &animals));

    let mut stable = animals;
    stable_sort_by(&mut stable, by_len);
    assert_eq!(stable, vec!["dog", "cat", "ant", "moth", "mouse", "elephant"]);
}

#[test]
fn numeric_walkthrough() {
    let mut numbers = one_to_ten();
    make_heap(&mut numbers);

    assert_eq!(count(&numbers, &5), 1);
    numbers.push(5);
    assert_eq!(count(&numbers, &5), 2);
    assert_eq!(accumulate(&numbers, 0), 60);

    let raw = numbers.clone();
    partial_sum(&mut numbers);
    assert_eq!(numbers.last(), Some(&60));
    assert!(numbers.windows(2).all(|w| w[0] < w[1]));

    let squares: i32 = numbers.iter().map(|x| x * x).sum();
    assert_eq!(inner_product(&numbers, &numbers, 0), squares);

    adjacent_difference(&mut numbers);
    assert_eq!(numbers, raw);

    let mut picked = Vec::new();
    sample(&numbers, &mut picked, 5, &mut demo_rng());
    assert_eq!(picked.len(), 5);
    assert!(is_subsequence(&picked, &numbers));

    assert!(all_of(&numbers, |x| *x > 0));
    assert!(any_of(&numbers, |x| x % 2 == 0));
    assert!(none_of(&numbers, |x| *x < 0));
}

#[test]
fn remove_erase_and_set_algebra() {
    let mut numbers = vec![1, 5, 2, 5, 3, 5, 4];
    let len = remove(&mut numbers, &5);
    numbers.truncate(len);
    assert_eq!(numbers, vec![1, 2, 3, 4]);

    let mut evens = Vec::new();
    copy_if(&one_to_ten(), &mut evens, |x| x % 2 == 0);

    let mut out = Vec::new();
    set_difference(&numbers, &evens, &mut out);
    assert_eq!(out, vec![1, 3]);

    out.clear();
    set_intersection(&numbers, &evens, &mut out);
    assert_eq!(out, vec![2, 4]);

    out.clear();
    set_union(&numbers, &evens, &mut out);
    assert_eq!(out, vec![1, 2, 3, 4, 6, 8, 10]);

    out.clear();
    set_symmetric_difference(&numbers, &evens, &mut out);
    assert_eq!(out, vec![1, 3, 6, 8, 10]);

    assert!(includes(&one_to_ten(), &numbers));
    assert!(!includes(&evens, &numbers));

    out.clear();
    merge(&numbers, &evens, &mut out);
    assert_eq!(out, vec![1, 2, 2, 3, 4, 4, 6, 8, 10]);
}
