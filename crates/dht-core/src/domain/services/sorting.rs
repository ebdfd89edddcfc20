//! Node ranking by distance to a target.
//!
//! Ranking order is `(distance to target, key, input position)`, so nodes at
//! equal distance come out in ascending key order, nodes sharing a key keep
//! their input order, and every ranking is deterministic.

use std::cmp::Ordering;

use crate::domain::key::Key;
use crate::domain::point::Point;
use crate::ports::{KeyOf, NodeId};

/// The `count` nodes of `nodes` closest to `target`, closest first.
///
/// Only the selected prefix is fully sorted.
pub fn nearest_of<'a, N, I>(nodes: I, target: &KeyOf<N>, count: usize) -> Vec<N>
where
    N: NodeId + 'a,
    N::Key: Key,
    I: IntoIterator<Item = &'a N>,
{
    if count == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(N::Key, N::Key, usize, &N)> = nodes
        .into_iter()
        .enumerate()
        .map(|(position, node)| {
            let key = node.key();
            (key.distance(target), key, position, node)
        })
        .collect();

    if count < ranked.len() {
        ranked.select_nth_unstable_by(count - 1, by_rank);
        ranked.truncate(count);
    }
    ranked.sort_unstable_by(by_rank);

    ranked.into_iter().map(|(_, _, _, node)| node.clone()).collect()
}

fn by_rank<K: Ord, T>(a: &(K, K, usize, T), b: &(K, K, usize, T)) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| a.2.cmp(&b.2))
}

/// Sort nodes by distance to `target` (closest first).
///
/// Used when merging candidates gathered across lookup rounds.
pub fn sort_by_distance<N>(nodes: &[N], target: &KeyOf<N>) -> Vec<N>
where
    N: NodeId,
    N::Key: Key,
{
    nearest_of(nodes, target, nodes.len())
}

/// Find the k closest nodes to a target from a list
///
/// # Arguments
/// * `nodes` - Candidate nodes
/// * `target` - Key to measure distance from
/// * `k` - Maximum number of nodes to return
///
/// # Returns
/// Up to k nodes sorted by distance (closest first)
pub fn find_k_closest<N>(nodes: &[N], target: &KeyOf<N>, k: usize) -> Vec<N>
where
    N: NodeId,
    N::Key: Key,
{
    nearest_of(nodes, target, k)
}
