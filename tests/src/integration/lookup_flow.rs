//! # Lookup Flow Tests
//!
//! An iterative node lookup driven purely through the `Request`, `Response`
//! and `RoutingTable` abstractions over a simulated network.
//!
//! ## Flow Tested:
//!
//! 1. **Seed**: the querying node takes candidates from its own table
//! 2. **Query**: each peer answers a `FixtureRequest` with its closest nodes
//! 3. **Merge**: responses are merged with `find_k_closest` until every
//!    candidate in the shortlist has been queried
//! 4. **Failure**: unreachable peers yield `empty_response()`

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use dht_core::testing::{random_key256, FixtureRequest, FixtureResponse, KeyId};
    use dht_core::{
        find_k_closest, BucketRoutingTable, Key, Key256, KeyOf, NodeId, Request, Response,
        RoutingConfig, RoutingTable, SharedRoutingTable,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type Node = KeyId<Key256>;

    const K: usize = 8;
    const ALPHA: usize = 3;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Every peer owns a k-bucket table populated with every other peer it
    /// has room for.
    struct SimNetwork {
        peers: BTreeMap<Key256, SharedRoutingTable<BucketRoutingTable<Node>>>,
        offline: BTreeSet<Key256>,
        queries: parking_lot::Mutex<usize>,
    }

    impl SimNetwork {
        fn new(seed: u64, size: usize) -> Self {
            let mut rng = StdRng::seed_from_u64(seed);
            let keys: Vec<Key256> = (0..size).map(|_| random_key256(&mut rng)).collect();

            let peers = keys
                .iter()
                .map(|&local| {
                    let table =
                        BucketRoutingTable::new(local, RoutingConfig::default()).unwrap();
                    let table = SharedRoutingTable::new(table);
                    for &other in &keys {
                        table.add_node(KeyId::new(other));
                    }
                    (local, table)
                })
                .collect();

            Self {
                peers,
                offline: BTreeSet::new(),
                queries: parking_lot::Mutex::new(0),
            }
        }

        fn keys(&self) -> Vec<Node> {
            self.peers.keys().map(|&k| KeyId::new(k)).collect()
        }

        fn handle(&self, peer: &Node, request: &FixtureRequest<Node>) -> FixtureResponse<Node> {
            *self.queries.lock() += 1;
            let key = peer.key();
            if self.offline.contains(&key) {
                return request.empty_response();
            }
            match self.peers.get(&key) {
                Some(table) => FixtureResponse::new(table.nearest_nodes(&request.target(), K)),
                None => request.empty_response(),
            }
        }
    }

    /// Iterative lookup: query up to `alpha` unqueried shortlist members per
    /// round until the `k` closest known candidates have all been queried.
    fn iterative_lookup<R, Q>(
        request: &R,
        seeds: Vec<R::Node>,
        k: usize,
        mut query: Q,
    ) -> Vec<R::Node>
    where
        R: Request,
        KeyOf<R::Node>: Key,
        Q: FnMut(&R::Node, &R) -> R::Response,
    {
        let target = request.target();
        let mut known: Vec<R::Node> = Vec::new();
        let mut queried: Vec<KeyOf<R::Node>> = Vec::new();

        merge(&mut known, seeds);
        loop {
            let shortlist = find_k_closest(&known, &target, k);
            let pending: Vec<R::Node> = shortlist
                .into_iter()
                .filter(|n| !queried.contains(&n.key()))
                .take(ALPHA)
                .collect();
            if pending.is_empty() {
                break;
            }

            for peer in pending {
                queried.push(peer.key());
                let response = query(&peer, request);
                merge(&mut known, response.closer_nodes().to_vec());
            }
        }

        find_k_closest(&known, &target, k)
    }

    fn merge<N>(known: &mut Vec<N>, nodes: Vec<N>)
    where
        N: NodeId,
        N::Key: Key,
    {
        for node in nodes {
            let key = node.key();
            if !known.iter().any(|n| n.key() == key) {
                known.push(node);
            }
        }
    }

    // =============================================================================
    // LOOKUP FLOW
    // =============================================================================

    #[test]
    fn test_lookup_converges_to_true_closest_nodes() {
        let network = SimNetwork::new(1, 48);
        let all = network.keys();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..5 {
            let target = KeyId::new(random_key256(&mut rng));
            let request = FixtureRequest::new(target);
            let origin = &all[0];
            let seeds = network.peers[&origin.key()].nearest_nodes(&request.target(), K);

            let found =
                iterative_lookup(&request, seeds, K, |peer, req| network.handle(peer, req));

            assert_eq!(found, find_k_closest(&all, &request.target(), K));
        }
    }

    #[test]
    fn test_lookup_for_existing_node_finds_it_first() {
        let network = SimNetwork::new(5, 48);
        let all = network.keys();
        let wanted = all[17];
        let request = FixtureRequest::new(wanted);
        let seeds = network.peers[&all[3].key()].nearest_nodes(&request.target(), K);

        let found = iterative_lookup(&request, seeds, K, |peer, req| network.handle(peer, req));

        assert_eq!(found.first(), Some(&wanted));
    }

    #[test]
    fn test_lookup_survives_unreachable_peers() {
        let mut network = SimNetwork::new(9, 64);
        let all = network.keys();
        for node in all.iter().skip(1).step_by(4) {
            network.offline.insert(node.key());
        }

        let mut rng = StdRng::seed_from_u64(10);
        let request = FixtureRequest::new(KeyId::new(random_key256(&mut rng)));
        let seeds = network.peers[&all[0].key()].nearest_nodes(&request.target(), K);

        let found = iterative_lookup(&request, seeds, K, |peer, req| network.handle(peer, req));

        assert_eq!(found.len(), K);
        assert_eq!(found, find_k_closest(&found, &request.target(), K));
        assert!(*network.queries.lock() >= K);
    }

    #[test]
    fn test_lookup_with_no_seeds_returns_nothing() {
        let network = SimNetwork::new(4, 16);
        let request = FixtureRequest::new(network.keys()[0]);

        let found =
            iterative_lookup(&request, Vec::new(), K, |peer, req| network.handle(peer, req));

        assert!(found.is_empty());
        assert_eq!(*network.queries.lock(), 0);
    }

    #[test]
    fn test_lookup_in_single_peer_network() {
        let network = SimNetwork::new(8, 1);
        let only = network.keys()[0];
        let request = FixtureRequest::new(only);

        // A bucket table never stores its own key, so the peer knows nobody.
        let found =
            iterative_lookup(&request, vec![only], K, |peer, req| network.handle(peer, req));

        assert_eq!(found, vec![only]);
        assert!(network.handle(&only, &request).closer_nodes().is_empty());
    }

    #[test]
    fn test_concurrent_lookups_share_tables() {
        let network = SimNetwork::new(12, 40);
        let all = network.keys();

        std::thread::scope(|s| {
            for i in 0..4 {
                let network = &network;
                let all = &all;
                s.spawn(move || {
                    let target = all[i * 7];
                    let request = FixtureRequest::new(target);
                    let seeds = network.peers[&all[i].key()].nearest_nodes(&request.target(), K);
                    let found =
                        iterative_lookup(&request, seeds, K, |peer, req| network.handle(peer, req));
                    assert_eq!(found.first(), Some(&target));
                });
            }
        });
    }
}
