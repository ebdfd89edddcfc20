//! Routing table statistics.

/// Snapshot of a bucket routing table's occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingTableStats {
    /// Nodes stored across all buckets
    pub total_nodes: usize,
    /// Buckets holding at least one node
    pub buckets_used: usize,
    /// Buckets at capacity
    pub buckets_full: usize,
    /// Configured bucket capacity (k)
    pub bucket_size: usize,
}
