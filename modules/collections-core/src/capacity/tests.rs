use super::Capacity;

#[test]
fn zero_bound_refuses_the_first_element() {
  assert!(Capacity::limited(0).is_reached_by(0));
}

#[test]
fn limited_bound_is_reached_at_its_value() {
  let capacity = Capacity::limited(3);
  assert!(!capacity.is_reached_by(0));
  assert!(!capacity.is_reached_by(2));
  assert!(capacity.is_reached_by(3));
}

#[test]
fn limitless_bound_is_never_reached() {
  assert!(!Capacity::limitless().is_reached_by(usize::MAX));
  assert_eq!(Capacity::limitless(), Capacity::Limitless);
}
