//! Thread-safe routing table wrapper.

use parking_lot::{RwLock, RwLockReadGuard};

use crate::ports::{KeyOf, RoutingTable};

/// A routing table shared between concurrent lookups.
///
/// Queries take a read lock and may run in parallel; `add_node` and
/// `remove_node` take the write lock. Every operation holds the lock only
/// for its own duration and never blocks on I/O.
#[derive(Debug, Default)]
pub struct SharedRoutingTable<T> {
    inner: RwLock<T>,
}

impl<T: RoutingTable> SharedRoutingTable<T> {
    pub fn new(table: T) -> Self {
        Self {
            inner: RwLock::new(table),
        }
    }

    pub fn add_node(&self, node: T::Node) -> bool {
        self.inner.write().add_node(node)
    }

    pub fn remove_node(&self, node: &T::Node) -> bool {
        self.inner.write().remove_node(node)
    }

    pub fn nearest_nodes(&self, target: &KeyOf<T::Node>, count: usize) -> Vec<T::Node> {
        self.inner.read().nearest_nodes(target, count)
    }

    pub fn get_node(&self, key: &KeyOf<T::Node>) -> Option<T::Node> {
        self.inner.read().get_node(key)
    }

    /// Read access to the wrapped table, e.g. for implementation-specific
    /// queries such as bucket statistics.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read()
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T: RoutingTable> RoutingTable for SharedRoutingTable<T> {
    type Node = T::Node;

    fn add_node(&mut self, node: T::Node) -> bool {
        self.inner.get_mut().add_node(node)
    }

    fn remove_node(&mut self, node: &T::Node) -> bool {
        self.inner.get_mut().remove_node(node)
    }

    fn nearest_nodes(&self, target: &KeyOf<T::Node>, count: usize) -> Vec<T::Node> {
        SharedRoutingTable::nearest_nodes(self, target, count)
    }

    fn get_node(&self, key: &KeyOf<T::Node>) -> Option<T::Node> {
        SharedRoutingTable::get_node(self, key)
    }
}
