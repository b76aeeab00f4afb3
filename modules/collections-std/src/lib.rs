#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]

//! Standard library companions for linea collections.
//!
//! Provides stream-based diagnostics for the `no_std` containers defined in
//! `linea-collections-core-rs`.

mod listing_printer;

pub use listing_printer::ListingPrinter;
