//! Tests for `remove_last` semantics across the adapter family.
//!
//! Removal is an optional capability: adapters structurally 1:1 with a
//! mutable backing element (mapped, comprehension, subsequence) delegate it
//! upstream; the rest fail with an unsupported-operation error, and misuse
//! of a supporting adapter fails with a precondition violation.

use pretty_assertions::assert_eq;
use strand::{ErrorKind, SharedSource, View, Window};

#[test]
fn shared_source_removal_mutates_the_backing_vector() {
    let source = SharedSource::new(vec![1, 2, 3, 4, 5]);
    let mut cursor = source.view().cursor();
    assert_eq!(cursor.pull().unwrap(), 1);
    assert_eq!(cursor.pull().unwrap(), 2);
    cursor.remove_last().unwrap();
    assert_eq!(source.snapshot(), vec![1, 3, 4, 5]);
    // Traversal continues from the element after the removed one.
    assert_eq!(cursor.pull().unwrap(), 3);
}

#[test]
fn remove_before_any_pull_is_a_precondition_violation() {
    let source = SharedSource::new(vec![1, 2, 3]);
    let mut cursor = source.view().cursor();
    assert_eq!(cursor.remove_last().unwrap_err().kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn double_remove_without_a_pull_is_a_precondition_violation() {
    let source = SharedSource::new(vec![1, 2, 3]);
    let mut cursor = source.view().cursor();
    cursor.pull().unwrap();
    cursor.remove_last().unwrap();
    assert_eq!(cursor.remove_last().unwrap_err().kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn mapped_cursor_delegates_removal_upstream() {
    let source = SharedSource::new(vec![1, 2, 3]);
    let mut cursor = source.view().map(|x| x * 10).cursor();
    assert_eq!(cursor.pull().unwrap(), 10);
    cursor.remove_last().unwrap();
    assert_eq!(source.snapshot(), vec![2, 3]);
}

#[test]
fn filter_removal_strikes_the_accepted_element() {
    let source = SharedSource::new(vec![1, 2, 3, 4, 5]);
    let mut cursor = source.view().filter(|x| x % 2 == 0).cursor();
    assert_eq!(cursor.pull().unwrap(), 2);
    cursor.remove_last().unwrap();
    assert_eq!(source.snapshot(), vec![1, 3, 4, 5]);
    assert_eq!(cursor.pull().unwrap(), 4);
}

#[test]
fn filter_removal_after_lookahead_is_blocked() {
    // A has_more between pull and remove_last runs the lookahead search,
    // advancing the upstream past the delivered element; delegated removal
    // would strike the wrong element, so it is refused.
    let source = SharedSource::new(vec![1, 2, 3, 4, 5]);
    let mut cursor = source.view().filter(|x| x % 2 == 0).cursor();
    assert_eq!(cursor.pull().unwrap(), 2);
    assert!(cursor.has_more());
    assert_eq!(cursor.remove_last().unwrap_err().kind(), ErrorKind::PreconditionViolation);
    assert_eq!(source.snapshot(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn subsequence_removal_delegates_upstream() {
    let source = SharedSource::new(vec![1, 2, 3, 4, 5]);
    let window = Window::new(Some(1), None, None).unwrap();
    let mut cursor = source.view().subsequence(window).cursor();
    assert_eq!(cursor.pull().unwrap(), 2);
    cursor.remove_last().unwrap();
    assert_eq!(source.snapshot(), vec![1, 3, 4, 5]);
}

#[test]
fn subsequence_removal_is_blocked_once_exhausted() {
    let source = SharedSource::new(vec![1, 2, 3]);
    let mut cursor = source.view().take(1).cursor();
    assert_eq!(cursor.pull().unwrap(), 1);
    assert!(!cursor.has_more());
    assert_eq!(cursor.remove_last().unwrap_err().kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn snapshot_source_does_not_support_removal() {
    let view = View::from_values(vec![1, 2, 3]);
    let mut cursor = view.cursor();
    cursor.pull().unwrap();
    assert_eq!(cursor.remove_last().unwrap_err().kind(), ErrorKind::UnsupportedOperation);
}

#[test]
fn cyclic_cursor_does_not_support_removal() {
    let source = SharedSource::new(vec![1, 2, 3]);
    let mut cursor = source.view().cycle(Some(2)).cursor();
    cursor.pull().unwrap();
    assert_eq!(cursor.remove_last().unwrap_err().kind(), ErrorKind::UnsupportedOperation);
}

#[test]
fn zipped_cursor_does_not_support_removal() {
    let source = SharedSource::new(vec![1, 2, 3]);
    let mut cursor = View::zip_all(vec![source.view(), source.view()]).cursor();
    cursor.pull().unwrap();
    assert_eq!(cursor.remove_last().unwrap_err().kind(), ErrorKind::UnsupportedOperation);
}

#[test]
fn tap_cursor_does_not_support_removal() {
    let source = SharedSource::new(vec![1, 2, 3]);
    let mut cursor = source.view().each(|_| {}).cursor();
    cursor.pull().unwrap();
    assert_eq!(cursor.remove_last().unwrap_err().kind(), ErrorKind::UnsupportedOperation);
}
