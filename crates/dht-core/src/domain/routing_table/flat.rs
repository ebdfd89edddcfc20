//! Unbounded routing table ordered by key.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::key::Key;
use crate::domain::services::nearest_of;
use crate::ports::{KeyOf, NodeId, RoutingTable};

/// A routing table holding every node it is given, indexed by key.
///
/// Insert, remove and exact lookup are logarithmic. `nearest_nodes` ranks
/// all entries, which keeps the table a simple reference for conformance
/// testing of more elaborate structures.
#[derive(Debug, Clone)]
pub struct FlatRoutingTable<N: NodeId> {
    entries: BTreeMap<N::Key, N>,
}

impl<N> FlatRoutingTable<N>
where
    N: NodeId,
    N::Key: Key,
{
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored nodes in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.entries.values()
    }
}

impl<N> Default for FlatRoutingTable<N>
where
    N: NodeId,
    N::Key: Key,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> RoutingTable for FlatRoutingTable<N>
where
    N: NodeId,
    N::Key: Key,
{
    type Node = N;

    fn add_node(&mut self, node: N) -> bool {
        match self.entries.entry(node.key()) {
            Entry::Occupied(entry) => {
                trace!(key = ?entry.key(), "Key already present");
                false
            }
            Entry::Vacant(entry) => {
                trace!(key = ?entry.key(), "Node added");
                entry.insert(node);
                true
            }
        }
    }

    fn remove_node(&mut self, node: &N) -> bool {
        let key = node.key();
        let removed = self.entries.remove(&key).is_some();
        if removed {
            trace!(key = ?key, "Node removed");
        }
        removed
    }

    fn nearest_nodes(&self, target: &KeyOf<N>, count: usize) -> Vec<N> {
        nearest_of(self.entries.values(), target, count)
    }

    fn get_node(&self, key: &KeyOf<N>) -> Option<N> {
        self.entries.get(key).cloned()
    }
}
