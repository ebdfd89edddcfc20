//! Generic conformance checks for keys and routing tables.
//!
//! Every check panics with a descriptive message on the first violated
//! guarantee, so they can be called directly from `#[test]` functions.

use std::cmp::Ordering;

use crate::domain::key::Key;
use crate::domain::point::{Distance, Point};
use crate::domain::services::find_k_closest;
use crate::ports::{KeyOf, NodeId, RoutingTable};

/// Check the XOR-metric, prefix and ordering laws over all pairs and triples
/// drawn from `samples`.
pub fn check_key_laws<K: Key>(samples: &[K]) {
    let zero = K::zero();

    for a in samples {
        assert_eq!(a.distance(a), zero, "d({a:?}, {a:?}) must be zero");
        assert_eq!(a.distance(a).compare(&zero), Ordering::Equal);
        assert_eq!(a.common_prefix_length(a), K::BIT_LEN);
        assert!(a.equal(a));

        for b in samples {
            let ab = a.distance(b);
            assert_eq!(ab, b.distance(a), "distance must be symmetric");
            assert_eq!(a.equal(b), ab == zero, "equal iff distance is zero");
            assert_eq!(a.compare(b), b.compare(a).reverse());

            if a.equal(b) {
                continue;
            }
            let p = a.common_prefix_length(b);
            assert!(p < K::BIT_LEN, "distinct keys share at most BIT_LEN - 1 bits");
            assert_ne!(a.bit(p), b.bit(p), "keys must differ at bit {p}");
            for i in 0..p {
                assert_eq!(a.bit(i), b.bit(i), "keys must agree at bit {i} < {p}");
            }
            let expected = if a.bit(p) == 0 {
                Ordering::Less
            } else {
                Ordering::Greater
            };
            assert_eq!(a.compare(b), expected, "first differing bit decides order");

            for c in samples {
                assert_eq!(
                    ab.distance(&b.distance(c)),
                    a.distance(c),
                    "XOR distances must compose"
                );
                if a <= b && b <= c {
                    assert!(a <= c, "ordering must be transitive");
                }
            }
        }
    }
}

/// Check every routing-table guarantee against tables built by `make_table`.
///
/// `nodes` must have pairwise distinct keys and must all be accepted by a
/// fresh table (for bucket tables: no local key, no overfull bucket).
pub fn check_routing_table<T, F>(mut make_table: F, nodes: &[T::Node])
where
    T: RoutingTable,
    T::Node: PartialEq,
    KeyOf<T::Node>: Key,
    F: FnMut() -> T,
{
    let zero = <KeyOf<T::Node> as Key>::zero();

    // Empty table
    let mut table = make_table();
    assert!(table.nearest_nodes(&zero, 10).is_empty());
    for node in nodes {
        assert!(table.get_node(&node.key()).is_none());
        assert!(!table.remove_node(node), "removing from an empty table");
    }

    // Inserts
    for node in nodes {
        assert!(table.add_node(node.clone()), "fresh key must be accepted");
        assert_eq!(table.get_node(&node.key()).as_ref(), Some(node));
    }
    for node in nodes {
        assert!(!table.add_node(node.clone()), "duplicate key must be rejected");
    }

    // Nearest
    let mut targets: Vec<KeyOf<T::Node>> = nodes.iter().map(|n| n.key()).collect();
    targets.push(zero.clone());
    let counts = [0, 1, nodes.len() / 2, nodes.len(), nodes.len() + 3];
    for target in &targets {
        for &count in &counts {
            let nearest = table.nearest_nodes(target, count);
            assert!(nearest.len() <= count);
            assert_eq!(nearest.len(), count.min(nodes.len()));
            assert_non_decreasing(&nearest, target);
            assert_eq!(
                nearest,
                find_k_closest(nodes, target, count),
                "nearest_nodes must match brute-force ranking"
            );
        }
    }

    // Removal
    for (i, node) in nodes.iter().enumerate() {
        assert!(table.remove_node(node), "stored key must be removable");
        assert!(!table.remove_node(node), "second removal must fail");
        assert!(table.get_node(&node.key()).is_none());
        let remaining = table.nearest_nodes(&zero, usize::MAX);
        assert_eq!(remaining.len(), nodes.len() - i - 1);
    }
    assert!(table.nearest_nodes(&zero, nodes.len()).is_empty());
}

/// Check that re-adding a key keeps the first node stored under it.
///
/// `first` and `second` must share a key but compare unequal.
pub fn check_first_write_wins<T>(table: &mut T, first: T::Node, second: T::Node)
where
    T: RoutingTable,
    T::Node: PartialEq,
    KeyOf<T::Node>: Key,
{
    let key = first.key();
    assert!(key.equal(&second.key()), "nodes must share a key");
    assert!(first != second, "nodes must be distinguishable");

    assert!(table.add_node(first.clone()));
    assert!(!table.add_node(second), "same key must be rejected");
    assert_eq!(table.get_node(&key), Some(first.clone()));
    assert_eq!(table.nearest_nodes(&key, 1), vec![first]);
}

fn assert_non_decreasing<N>(nodes: &[N], target: &KeyOf<N>)
where
    N: NodeId,
    N::Key: Key,
{
    for pair in nodes.windows(2) {
        let d0 = pair[0].key().distance(target);
        let d1 = pair[1].key().distance(target);
        assert!(
            d0.compare(&d1) != Ordering::Greater,
            "nearest_nodes must be ordered by distance"
        );
    }
}
