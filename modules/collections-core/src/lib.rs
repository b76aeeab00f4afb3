#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![no_std]

//! Linear containers over inline arrays, heap arrays and node chains.
//!
//! Every variant stores a single scalar [`Element`] type and reports failures as values:
//! [`stack::StackError`] and [`queue::QueueError`] replace sentinel returns, and
//! [`Emptiness`] keeps the tri-state emptiness probe distinct from a released handle.

extern crate alloc;

mod capacity;
mod container_config;
mod element;
mod emptiness;
mod linear_container;
pub mod queue;
pub mod stack;
#[cfg(test)]
mod test_support;

pub use capacity::Capacity;
pub use container_config::{ContainerConfig, DEFAULT_CAPACITY};
pub use element::Element;
pub use emptiness::Emptiness;
pub use linear_container::LinearContainer;
