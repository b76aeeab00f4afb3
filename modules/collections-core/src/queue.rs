//! FIFO containers over inline and heap arrays.

mod bounded_array_queue;
mod dynamic_array_queue;
mod queue_backend;
mod queue_error;
mod queue_indices;
mod slot_policy;

pub use bounded_array_queue::BoundedArrayQueue;
pub use dynamic_array_queue::DynamicArrayQueue;
pub use queue_backend::QueueBackend;
pub use queue_error::QueueError;
pub use slot_policy::SlotPolicy;
