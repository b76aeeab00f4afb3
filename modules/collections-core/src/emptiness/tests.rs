use super::Emptiness;
use crate::stack::{BoundedArrayStack, DynamicArrayStack};

#[test]
fn probe_reports_invalid_handle_for_absent_container() {
  assert_eq!(Emptiness::probe(None::<&BoundedArrayStack<4>>), Emptiness::InvalidHandle);
}

#[test]
fn probe_delegates_to_present_container() {
  let mut stack = BoundedArrayStack::<4>::new();
  assert_eq!(Emptiness::probe(Some(&stack)), Emptiness::Empty);

  stack.push(1).unwrap();
  assert_eq!(Emptiness::probe(Some(&stack)), Emptiness::NotEmpty);
}

#[test]
fn probe_reports_released_storage_as_invalid() {
  let mut stack = DynamicArrayStack::new(2);
  stack.destroy();
  assert_eq!(Emptiness::probe(Some(&stack)), Emptiness::InvalidHandle);
}

#[test]
fn from_size_maps_counts_onto_valid_states() {
  assert_eq!(Emptiness::from_size(0), Emptiness::Empty);
  assert_eq!(Emptiness::from_size(3), Emptiness::NotEmpty);
}
