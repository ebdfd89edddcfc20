//! The routing table contract.

use super::node::{KeyOf, NodeId};

/// A proximity-indexed store of known nodes.
///
/// Any conforming implementation (flat, bucket-based, tree-based) is
/// interchangeable with any other. The guarantees are:
///
/// - at most one node is stored per distinct key;
/// - `add_node` is first-write-wins;
/// - `nearest_nodes` is ordered by non-decreasing distance to the target,
///   with ties broken by ascending key;
/// - no operation fails on well-formed input.
///
/// # Thread Safety
///
/// Mutators take `&mut self`, so plain implementations rely on the caller
/// for synchronisation. Wrap a table in [`crate::SharedRoutingTable`] to share
/// it across threads.
pub trait RoutingTable {
    type Node: NodeId;

    /// Insert `node` unless a node with the same key is already stored.
    ///
    /// NodeIds are often preimages of their keys, so a node cannot be
    /// rebuilt from its key alone; the table keeps the full NodeId in order
    /// to return it from [`RoutingTable::nearest_nodes`].
    ///
    /// Returns `true` if the node was inserted, `false` if it was rejected
    /// (duplicate key, or an implementation-specific capacity limit). A
    /// rejected insert leaves the table unchanged.
    fn add_node(&mut self, node: Self::Node) -> bool;

    /// Remove the node stored under `node.key()`.
    ///
    /// Returns `true` iff an entry was removed.
    fn remove_node(&mut self, node: &Self::Node) -> bool;

    /// Up to `count` stored nodes, closest to `target` first.
    ///
    /// Returns fewer nodes when the table holds fewer, and an empty list
    /// when the table is empty or `count` is zero.
    fn nearest_nodes(&self, target: &KeyOf<Self::Node>, count: usize) -> Vec<Self::Node>;

    /// The node stored under exactly `key`, if any.
    fn get_node(&self, key: &KeyOf<Self::Node>) -> Option<Self::Node>;
}
