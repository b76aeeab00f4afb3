#![deny(missing_docs)]

//! Array and node-chain backed stacks and queues.
//!
//! [`core`] holds the `no_std` containers; [`std`] adds stream-based diagnostics.

#[cfg(test)]
mod tests;

pub use linea_collections_core_rs as core;
pub use linea_collections_std_rs as std;

/// Returns the version of this package.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
