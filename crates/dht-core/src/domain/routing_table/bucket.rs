//! K-Bucket implementation for Kademlia routing.

use crate::domain::key::Key;
use crate::ports::{KeyOf, NodeId};

/// A k-bucket storing nodes that share the same common prefix length with
/// the local key.
///
/// Nodes are kept in insertion order, oldest first. The bucket never evicts:
/// once it holds `k` nodes further inserts are rejected by the owning table.
#[derive(Debug, Clone)]
pub struct KBucket<N> {
    /// Nodes in this bucket (max size = k)
    pub(crate) nodes: Vec<N>,
}

impl<N> KBucket<N> {
    /// Create a new empty k-bucket
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Get the number of nodes in this bucket
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the bucket is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if the bucket is full
    pub fn is_full(&self, k: usize) -> bool {
        self.nodes.len() >= k
    }

    /// Get the oldest node (first inserted)
    pub fn oldest_node(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// Get all nodes in this bucket
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }
}

impl<N> KBucket<N>
where
    N: NodeId,
    N::Key: Key,
{
    /// Add a node to the bucket (assumes not full, key not present)
    pub(crate) fn add_node(&mut self, node: N) {
        self.nodes.push(node);
    }

    /// Remove the node stored under `key`.
    pub(crate) fn remove_node(&mut self, key: &KeyOf<N>) -> Option<N> {
        self.position(key).map(|pos| self.nodes.remove(pos))
    }

    /// Node stored under exactly `key`.
    pub(crate) fn get(&self, key: &KeyOf<N>) -> Option<&N> {
        self.position(key).map(|pos| &self.nodes[pos])
    }

    /// Check if bucket holds a node with `key`
    pub(crate) fn contains(&self, key: &KeyOf<N>) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &KeyOf<N>) -> Option<usize> {
        self.nodes.iter().position(|n| n.key() == *key)
    }
}

impl<N> Default for KBucket<N> {
    fn default() -> Self {
        Self::new()
    }
}
