//! Behavior tests for the lazy cursor adapters.

use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;
use strand::{ErrorKind, Row, View, Window, eager};

#[test]
fn map_applies_transform_elementwise() {
    let view = View::from_values(vec![1, 2, 3, 4]);
    assert_eq!(eager::materialize(&view.map(|x| x * 10)), vec![10, 20, 30, 40]);
}

#[test]
fn map_matches_elementwise_application() {
    // Functor law: materializing map(S, f) equals applying f to materialized S.
    let source = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let view = View::from_values(source.clone());
    let mapped = eager::materialize(&view.map(|x| x * x - 1));
    let expected: Vec<i32> = source.into_iter().map(|x| x * x - 1).collect();
    assert_eq!(mapped, expected);
}

#[test]
fn filter_and_reject_partition_the_sequence() {
    let source = vec![1, 2, 3, 4, 5, 6, 7];
    let view = View::from_values(source.clone());
    let kept = eager::materialize(&view.filter(|x| x % 2 == 0));
    let dropped = eager::materialize(&view.reject(|x| x % 2 == 0));
    assert_eq!(kept, vec![2, 4, 6]);
    assert_eq!(dropped, vec![1, 3, 5, 7]);
    // Disjoint, order-preserving partition: merging the two by original
    // position reconstructs the source.
    let mut merged = Vec::new();
    let (mut k, mut d) = (kept.into_iter().peekable(), dropped.into_iter().peekable());
    for value in source {
        if k.peek() == Some(&value) {
            merged.push(k.next().unwrap());
        } else {
            assert_eq!(d.peek(), Some(&value));
            merged.push(d.next().unwrap());
        }
    }
    assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn comprehension_with_no_predicates_is_a_map() {
    let view = View::from_values(vec![1, 2, 3]);
    let comprehended = view.comprehension::<i32>(Rc::new(|x| x + 1), vec![]);
    assert_eq!(eager::materialize(&comprehended), vec![2, 3, 4]);
}

#[test]
fn comprehension_conjunction_short_circuits_per_element() {
    let view = View::from_values(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    let predicates: Vec<strand::PredicateFn<i32>> =
        vec![Rc::new(|x: &i32| x % 2 == 0), Rc::new(|x: &i32| x % 3 == 0)];
    let comprehended = view.comprehension::<i32>(Rc::new(|x| x * 100), predicates);
    assert_eq!(eager::materialize(&comprehended), vec![600, 1200]);
}

#[test]
fn always_false_comprehension_is_exhausted_on_first_check() {
    let view = View::from_values(vec![1, 2, 3]);
    let mut cursor = view.filter(|_| false).cursor();
    assert!(!cursor.has_more());
    assert!(cursor.pull().unwrap_err().is_exhausted());
}

#[test]
fn has_more_is_idempotent() {
    let view = View::from_values(vec![1, 2, 3]);
    let mut cursor = view.filter(|x| x % 2 == 1).cursor();
    for _ in 0..5 {
        assert!(cursor.has_more());
    }
    assert_eq!(cursor.pull().unwrap(), 1);
    for _ in 0..5 {
        assert!(cursor.has_more());
    }
    assert_eq!(cursor.pull().unwrap(), 3);
    assert!(!cursor.has_more());
}

#[test]
fn chain_flattens_skipping_empty_sources() {
    let chained = View::chain_all(vec![
        View::from_values(vec![]),
        View::from_values(vec![1, 2]),
        View::from_values(vec![]),
        View::from_values(vec![3]),
    ]);
    assert_eq!(eager::materialize(&chained), vec![1, 2, 3]);
}

#[test]
fn chain_of_two_views_appends() {
    let left = View::from_values(vec![1, 2]);
    let right = View::from_values(vec![3, 4]);
    assert_eq!(eager::materialize(&left.chain(&right)), vec![1, 2, 3, 4]);
}

#[test]
fn zip_stops_at_the_shorter_source() {
    let numbers = View::from_values(vec![1, 2, 3]);
    let letters = View::from_values(vec!['a', 'b']);
    assert_eq!(eager::materialize(&numbers.zip(&letters)), vec![(1, 'a'), (2, 'b')]);
}

#[test]
fn zip_all_yields_ordered_rows() {
    let zipped = View::zip_all(vec![
        View::from_values(vec![1, 2, 3]),
        View::from_values(vec![10, 20]),
        View::from_values(vec![100, 200, 300]),
    ]);
    assert_eq!(
        eager::materialize(&zipped),
        vec![Row::from_values([1, 10, 100]), Row::from_values([2, 20, 200])]
    );
}

#[test]
fn zip_of_no_sources_is_exhausted() {
    let zipped = View::<i32>::zip_all(vec![]);
    let mut cursor = zipped.cursor();
    assert!(!cursor.has_more());
    assert!(cursor.pull().unwrap_err().is_exhausted());
}

#[test]
fn bounded_cycle_yields_length_times_limit() {
    let view = View::from_values(vec![1, 2, 3]).cycle(Some(2));
    let mut cursor = view.cursor();
    let mut seen = Vec::new();
    while cursor.has_more() {
        seen.push(cursor.pull().unwrap());
    }
    assert_eq!(seen, vec![1, 2, 3, 1, 2, 3]);
    assert!(cursor.pull().unwrap_err().is_exhausted());
}

#[test]
fn zero_cycle_is_exhausted_regardless_of_source() {
    let view = View::from_values(vec![1, 2, 3]).cycle(Some(0));
    let mut cursor = view.cursor();
    assert!(!cursor.has_more());
    assert!(cursor.pull().unwrap_err().is_exhausted());
}

#[test]
fn unbounded_cycle_keeps_producing() {
    let view = View::from_values(vec![1, 2]).cycle(None).take(7);
    assert_eq!(eager::materialize(&view), vec![1, 2, 1, 2, 1, 2, 1]);
}

#[test]
fn cycle_of_empty_source_is_exhausted() {
    let view = View::<i32>::empty().cycle(None);
    let mut cursor = view.cursor();
    assert!(!cursor.has_more());
}

#[test]
fn subsequence_applies_start_stop_step() {
    let view = View::from_values((0..10).collect::<Vec<_>>());
    let window = Window::new(Some(2), Some(9), Some(2)).unwrap();
    assert_eq!(eager::materialize(&view.subsequence(window)), vec![2, 4, 6, 8]);
}

#[test]
fn subsequence_start_past_source_is_empty() {
    let view = View::from_values(vec![1, 2, 3]);
    let window = Window::new(Some(10), None, None).unwrap();
    assert_eq!(eager::materialize(&view.subsequence(window)), Vec::<i32>::new());
}

#[test]
fn subsequence_exhausts_mid_skip() {
    // Step 3 over five elements: emits 0 and 3, then exhausts while skipping.
    let view = View::from_values((0..5).collect::<Vec<_>>());
    let window = Window::new(None, None, Some(3)).unwrap();
    assert_eq!(eager::materialize(&view.subsequence(window)), vec![0, 3]);
}

#[test]
fn each_fires_the_effect_per_element_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let view = View::from_values(vec![1, 2, 3]).each(move |x| sink.borrow_mut().push(*x));
    assert_eq!(eager::materialize(&view), vec![1, 2, 3]);
    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
}

#[test]
fn counting_view_bounded_by_take() {
    let evens = View::counting(0, 2).take(5);
    assert_eq!(eager::materialize(&evens), vec![0, 2, 4, 6, 8]);
}

#[test]
fn counting_zip_is_bounded_by_the_finite_side() {
    let indexed = View::counting(0, 1).zip(&View::from_values(vec!['x', 'y', 'z']));
    assert_eq!(eager::materialize(&indexed), vec![(0, 'x'), (1, 'y'), (2, 'z')]);
}

#[test]
fn pull_past_the_end_reports_exhausted() {
    let view = View::from_values(vec![1]);
    let mut cursor = view.cursor();
    assert_eq!(cursor.pull().unwrap(), 1);
    let err = cursor.pull().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExhaustedSequence);
}
