//! Centralized Testing Utilities
//!
//! Minimal NodeId, Request and Response implementations, an 8-bit key for
//! exhaustive checks, and a conformance suite that any [`crate::Key`] or
//! [`crate::RoutingTable`] implementation can be run against.
//! Available with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use dht_core::testing::{check_routing_table, KeyId, key256_with_first_byte};
//! use dht_core::FlatRoutingTable;
//!
//! let nodes: Vec<_> = [0x10u8, 0x20, 0x40, 0x80]
//!     .into_iter()
//!     .map(|b| KeyId::new(key256_with_first_byte(b)))
//!     .collect();
//!
//! check_routing_table(FlatRoutingTable::new, &nodes);
//! ```

mod conformance;
mod fixtures;
mod key8;

pub use conformance::{check_first_write_wins, check_key_laws, check_routing_table};
pub use fixtures::{
    key256_with_first_byte, random_key256, FixtureRequest, FixtureResponse, KeyId, StringId,
    TaggedId,
};
pub use key8::Key8;
