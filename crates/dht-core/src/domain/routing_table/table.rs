//! Kademlia k-bucket routing table.

use tracing::{debug, trace};

use crate::domain::config::RoutingConfig;
use crate::domain::errors::ConfigError;
use crate::domain::key::Key;
use crate::domain::point::Point;
use crate::domain::services::nearest_of;
use crate::ports::{KeyOf, NodeId, RoutingTable};

use super::bucket::KBucket;
use super::stats::RoutingTableStats;

/// A routing table that groups nodes into k-buckets by their common prefix
/// length with the local key.
///
/// Bucket `i` holds nodes sharing exactly `i` leading bits with the local
/// key, so there are `BIT_LEN` buckets. Buckets are never split and never
/// evict: inserting into a full bucket is rejected, as is inserting the
/// local key itself. Liveness-driven replacement belongs to the caller.
///
/// Bucket indices are taken from the XOR distance to the local key, so an
/// absent [`crate::Key256`] is placed exactly like `Key256::zero()`, both as
/// a node key and as the local key.
#[derive(Debug, Clone)]
pub struct BucketRoutingTable<N: NodeId> {
    /// Our own key (immutable after creation)
    local_key: N::Key,
    /// One k-bucket per possible common prefix length
    buckets: Vec<KBucket<N>>,
    config: RoutingConfig,
}

impl<N> BucketRoutingTable<N>
where
    N: NodeId,
    N::Key: Key,
{
    /// Create an empty routing table around `local_key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(local_key: N::Key, config: RoutingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buckets = (0..<N::Key as Key>::BIT_LEN).map(|_| KBucket::new()).collect();

        Ok(Self {
            local_key,
            buckets,
            config,
        })
    }

    /// Get our local key
    pub fn local_key(&self) -> &N::Key {
        &self.local_key
    }

    /// Get the configuration
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Get total node count across all buckets
    pub fn len(&self) -> usize {
        self.buckets.iter().map(KBucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(KBucket::is_empty)
    }

    /// Index of the bucket `key` belongs to, `None` for the local key.
    pub fn bucket_index(&self, key: &N::Key) -> Option<usize> {
        let distance = self.local_key.distance(key);
        let cpl = <N::Key as Key>::zero().common_prefix_length(&distance);
        (cpl < <N::Key as Key>::BIT_LEN).then_some(cpl)
    }

    /// Get a reference to a bucket by index
    pub fn get_bucket(&self, index: usize) -> Option<&KBucket<N>> {
        self.buckets.get(index)
    }

    /// Number of nodes in bucket `index` (0 for out-of-range indices)
    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, KBucket::len)
    }

    /// Iterate over all stored nodes, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.buckets.iter().flat_map(|b| b.nodes().iter())
    }

    /// Get routing table statistics
    pub fn stats(&self) -> RoutingTableStats {
        RoutingTableStats {
            total_nodes: self.len(),
            buckets_used: self.buckets.iter().filter(|b| !b.is_empty()).count(),
            buckets_full: self
                .buckets
                .iter()
                .filter(|b| b.is_full(self.config.bucket_size))
                .count(),
            bucket_size: self.config.bucket_size,
        }
    }

    fn bucket_for(&self, key: &N::Key) -> Option<&KBucket<N>> {
        self.bucket_index(key).and_then(|idx| self.buckets.get(idx))
    }
}

impl<N> RoutingTable for BucketRoutingTable<N>
where
    N: NodeId,
    N::Key: Key,
{
    type Node = N;

    fn add_node(&mut self, node: N) -> bool {
        let key = node.key();
        let Some(idx) = self.bucket_index(&key) else {
            debug!(key = ?key, "Rejected local key");
            return false;
        };
        let k = self.config.bucket_size;
        let Some(bucket) = self.buckets.get_mut(idx) else {
            return false;
        };

        if bucket.contains(&key) {
            trace!(key = ?key, bucket = idx, "Key already present");
            return false;
        }
        if bucket.is_full(k) {
            debug!(key = ?key, bucket = idx, k, "Bucket full, node rejected");
            return false;
        }

        bucket.add_node(node);
        trace!(key = ?key, bucket = idx, "Node added");
        true
    }

    fn remove_node(&mut self, node: &N) -> bool {
        let key = node.key();
        let Some(idx) = self.bucket_index(&key) else {
            return false;
        };
        let removed = self
            .buckets
            .get_mut(idx)
            .and_then(|bucket| bucket.remove_node(&key))
            .is_some();
        if removed {
            trace!(key = ?key, bucket = idx, "Node removed");
        }
        removed
    }

    fn nearest_nodes(&self, target: &KeyOf<N>, count: usize) -> Vec<N> {
        nearest_of(self.iter(), target, count)
    }

    fn get_node(&self, key: &KeyOf<N>) -> Option<N> {
        self.bucket_for(key).and_then(|b| b.get(key)).cloned()
    }
}
