//! Reversed and drain helpers over the different source kinds

use bidi_iter::{drain, reversed, BiIterError, BiIterator, IntoBiIterator, SharedVec};
use test_case::test_case;

#[test_case(vec![1, 2, 3, 4, 5, 6], vec![6, 5, 4, 3, 2, 1] ; "even length")]
#[test_case(vec![1, 2, 3], vec![3, 2, 1] ; "odd length")]
#[test_case(vec![9], vec![9] ; "single element")]
#[test_case(vec![], vec![] ; "empty")]
fn reversed_replays_from_the_back(values: Vec<i32>, expected: Vec<i32>) {
    let iter = values.into_bi_iter().expect("vec has a length");
    let out: Vec<i32> = reversed(iter).collect();
    assert_eq!(out, expected);
}

#[test_case(vec![1, 2, 3, 4, 5, 6], 2, 2 => (vec![1, 2], vec![5, 6], 2) ; "gap in the middle")]
#[test_case(vec![1, 2, 3], 3, 3 => (vec![1, 2, 3], vec![], 0) ; "overlap goes to head")]
#[test_case(vec![1, 2, 3, 4], 1, 5 => (vec![1], vec![2, 3, 4], 0) ; "tail takes the rest")]
#[test_case(vec![1, 2, 3, 4, 5], 2, 3 => (vec![1, 2], vec![3, 4, 5], 0) ; "exact cover")]
#[test_case(vec![1, 2, 3, 4, 5], 0, 0 => (vec![], vec![], 5) ; "nothing requested")]
#[test_case(vec![1, 2, 3, 4, 5], 0, 1 => (vec![], vec![5], 4) ; "last only")]
#[test_case(vec![], 2, 2 => (vec![], vec![], 0) ; "empty source")]
fn drain_splits_boundaries(
    values: Vec<i32>,
    head: usize,
    tail: usize,
) -> (Vec<i32>, Vec<i32>, usize) {
    let iter = values.into_bi_iter().expect("vec has a length");
    drain(iter, head, tail).expect("counts are valid").into_parts()
}

#[test_case(-1, 0, "head_count" ; "negative head")]
#[test_case(0, -3, "tail_count" ; "negative tail")]
#[test_case(-2, -2, "head_count" ; "head checked first")]
fn drain_rejects_negative_counts(head: i64, tail: i64, name: &str) {
    let values = [1, 2, 3];
    let iter = BiIterator::new(&values[..]).expect("slice has a length");
    match drain(iter, head, tail) {
        Err(BiIterError::InvalidArgument { name: actual, .. }) => assert_eq!(actual, name),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn drain_after_partial_consumption() {
    let values: Vec<u32> = (1..=10).collect();
    let mut iter = (&values).into_bi_iter().expect("vec has a length");
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&10));

    let drained = drain(iter, 2, 2).expect("counts are valid");
    assert_eq!(drained.head, vec![&2, &3]);
    assert_eq!(drained.tail, vec![&8, &9]);
    assert_eq!(drained.middle_skipped, 4);
}

#[test]
fn drain_moves_owned_values() {
    let words: Vec<String> = ["alpha", "beta", "gamma", "delta"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let drained = drain(words.into_bi_iter().expect("vec has a length"), 1, 1usize)
        .expect("counts are valid");
    assert_eq!(drained.head, vec!["alpha".to_string()]);
    assert_eq!(drained.tail, vec!["delta".to_string()]);
    assert_eq!(drained.middle_skipped, 2);
}

#[test]
fn reversed_over_shared_source_until_mutation() {
    let shared = SharedVec::new(vec![1, 2, 3, 4]);
    let mut rev = reversed(shared.clone().into_bi_iter().expect("shared has a length"));

    assert_eq!(rev.try_next(), Ok(Some(4)));
    assert_eq!(rev.try_next(), Ok(Some(3)));

    shared.push(5);
    assert_eq!(
        rev.try_next(),
        Err(BiIterError::MutatedSource {
            expected: 4,
            actual: 5
        })
    );
}
