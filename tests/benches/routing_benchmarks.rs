//! # DHT Routing Benchmarks
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --package dht-tests --bench routing_benchmarks
//! cargo bench --package dht-tests --bench routing_benchmarks -- dht/keyspace/nearest_nodes
//! ```

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_keyspace(c: &mut Criterion) {
    dht_tests::benchmarks::keyspace::register_benchmarks(c);
}

criterion_group!(benches, bench_keyspace);
criterion_main!(benches);
