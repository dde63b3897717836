use std::{cell::Cell, io::Write, rc::Rc};

use sequencer::prelude::*;

const NUMBERS: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

fn odd_squares(numbers: &[i64]) -> Sequence<'_, i64> {
    fetch_slice(numbers).choose(|n| n % 2 == 1).transform(|n| n * n)
}

#[test]
fn test_odd_squares_printed_one_per_line() {
    let mut out = Vec::new();
    odd_squares(&NUMBERS)
        .try_perform(|n| writeln!(out, "{n}"))
        .expect("writing to a Vec cannot fail");

    assert_eq!(String::from_utf8(out).unwrap(), "1\n9\n25\n49\n81\n");
}

#[test]
fn test_odd_squares_sum() {
    assert_eq!(odd_squares(&NUMBERS).combine(0, |acc, n| acc + n), 165);
}

#[test]
fn test_filter_map_order_matters() {
    let input = [2, 3];
    let is_even = |n: &i32| n % 2 == 0;
    let square = |n: i32| n * n;

    let filter_then_map: Vec<_> = fetch_slice(&input).choose(is_even).transform(square).collect();
    let map_then_filter: Vec<_> = fetch_slice(&input).transform(square).choose(is_even).collect();
    assert_eq!(filter_then_map, vec![4]);
    assert_eq!(map_then_filter, vec![4]);

    // with a predicate that the transform can flip, the orders disagree
    let is_small = |n: &i32| *n < 5;
    let filter_then_map: Vec<_> = fetch_slice(&input).choose(is_small).transform(square).collect();
    let map_then_filter: Vec<_> = fetch_slice(&input).transform(square).choose(is_small).collect();
    assert_eq!(filter_then_map, vec![4, 9]);
    assert_eq!(map_then_filter, vec![4]);
    assert_ne!(filter_then_map, map_then_filter);
}

#[test]
fn test_limit_after_choose_counts_kept_elements() {
    let kept: Vec<_> = fetch_range(1..)
        .choose(|n: &u64| n % 7 == 0)
        .limit(3)
        .collect();
    assert_eq!(kept, vec![7, 14, 21]);
}

#[test]
fn test_limit_bounds_infinite_capability_source() {
    struct Ones {
        pulls: Rc<Cell<u32>>,
    }

    impl Enumerator<u8> for Ones {
        fn get_current(&mut self) -> Option<u8> {
            self.pulls.set(self.pulls.get() + 1);
            Some(1)
        }
    }

    let pulls = Rc::new(Cell::new(0));
    let mut ones = Ones {
        pulls: Rc::clone(&pulls),
    };

    let total = fetch_enumerator(&mut ones).limit(4).combine(0u32, |acc, n| acc + u32::from(n));
    assert_eq!(total, 4);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_intermediate_temporaries_stay_alive() {
    fn build(values: Vec<i32>) -> Sequence<'static, String> {
        let base = fetch(values);
        let chosen = base.choose(|n| *n > 0);
        chosen.transform(|n| n.to_string())
    }

    let out: Vec<_> = build(vec![-1, 2, -3, 4]).collect();
    assert_eq!(out, vec!["2", "4"]);
}

#[test]
fn test_exhausted_pipeline_performs_nothing_again() {
    let pipeline = odd_squares(&NUMBERS);
    let mut first = Vec::new();
    pipeline.perform(|n| first.push(n));

    let mut calls = 0;
    pipeline.perform(|_| calls += 1);

    assert_eq!(first, vec![1, 9, 25, 49, 81]);
    assert_eq!(calls, 0);
}
