use super::{ContainerConfig, DEFAULT_CAPACITY};
use crate::queue::SlotPolicy;

#[test]
fn default_config_uses_default_capacity_and_wrap_policy() {
  let config = ContainerConfig::default();
  assert_eq!(config.capacity(), DEFAULT_CAPACITY);
  assert_eq!(config.slot_policy(), SlotPolicy::Wrap);
}

#[test]
fn slot_policy_builder_keeps_the_capacity() {
  let config = ContainerConfig::new(4).with_slot_policy(SlotPolicy::Linear);
  assert_eq!(config.capacity(), 4);
  assert_eq!(config.slot_policy(), SlotPolicy::Linear);
}

#[test]
fn zero_capacity_is_accepted() {
  assert_eq!(ContainerConfig::new(0).capacity(), 0);
}
