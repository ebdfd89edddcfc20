//! # Ports Layer - Contract Boundaries
//!
//! The traits collaborators implement (network layers supply [`NodeId`]s,
//! lookup orchestration supplies [`Request`]s and consumes [`Response`]s) and
//! the [`RoutingTable`] contract every proximity-indexed peer store honours.

pub mod node;
pub mod routing;

pub use node::{KeyOf, NodeId, Request, Response};
pub use routing::RoutingTable;
