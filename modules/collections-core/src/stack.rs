//! LIFO containers over inline arrays, heap arrays and node chains.

mod bounded_array_stack;
mod dynamic_array_stack;
mod node;
mod node_chain_stack;
mod node_error;
mod stack_backend;
mod stack_error;
mod stack_listing;

pub use bounded_array_stack::BoundedArrayStack;
pub use dynamic_array_stack::DynamicArrayStack;
pub use node::Node;
pub use node_chain_stack::NodeChainStack;
pub use node_error::NodeError;
pub use stack_backend::StackBackend;
pub use stack_error::StackError;
pub use stack_listing::StackListing;
