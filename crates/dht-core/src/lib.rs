//! # DHT Key Space & Routing Contract
//!
//! The addressing substrate for Kademlia-style DHTs: a generic metric key
//! space, the XOR-metric [`Key`] specialisation with a 256-bit reference key,
//! and the [`RoutingTable`] contract that every proximity-indexed peer store
//! honours.
//!
//! ## Architecture
//!
//! - **Domain Layer:** metric primitives ([`Point`], [`Distance`]), keys
//!   ([`Key`], [`Key256`]), distance ranking services and the reference
//!   routing tables ([`FlatRoutingTable`], [`BucketRoutingTable`],
//!   [`SharedRoutingTable`]).
//! - **Ports Layer:** the traits collaborators implement or consume
//!   ([`NodeId`], [`Request`], [`Response`], [`RoutingTable`]).
//! - **Testing:** fixtures and a generic conformance suite, behind the
//!   `test-utils` feature.
//!
//! ## Routing table guarantees
//!
//! - `add_node` is first-write-wins: a node whose key is already stored is
//!   rejected and the stored node is kept.
//! - `nearest_nodes` is ordered by non-decreasing XOR distance to the target,
//!   ties broken by ascending key.
//! - `count == 0` and empty tables yield an empty list.
//!
//! ## Example
//!
//! ```rust
//! use dht_core::{FlatRoutingTable, Key, Key256, NodeId, RoutingTable};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Peer(Key256);
//!
//! impl NodeId for Peer {
//!     type Key = Key256;
//!     fn key(&self) -> Key256 {
//!         self.0
//!     }
//! }
//!
//! let mut low = [0u8; 32];
//! low[0] = 0x01;
//! let mut high = [0u8; 32];
//! high[0] = 0x80;
//!
//! let mut table = FlatRoutingTable::new();
//! assert!(table.add_node(Peer(Key256::from_bytes(high))));
//! assert!(table.add_node(Peer(Key256::from_bytes(low))));
//!
//! let nearest = table.nearest_nodes(&Key256::zero(), 1);
//! assert_eq!(nearest, vec![Peer(Key256::from_bytes(low))]);
//! ```

pub mod domain;
pub mod ports;

/// Fixtures and conformance checks.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Domain
pub use domain::{
    find_k_closest, sort_by_distance, BucketRoutingTable, ConfigError, Distance, FlatRoutingTable,
    KBucket, Key, Key256, KeyError, Point, RoutingConfig, RoutingTableStats, SharedRoutingTable,
    KEY256_BYTES,
};

// Ports
pub use ports::{KeyOf, NodeId, Request, Response, RoutingTable};
