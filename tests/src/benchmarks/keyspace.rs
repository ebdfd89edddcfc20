//! # Key Space Benchmarks
//!
//! - XOR distance and common prefix length on 256-bit keys
//! - `nearest_nodes` on flat and k-bucket tables at realistic sizes
//! - Candidate merging with `find_k_closest`
//!
//! Adversarial case: every node clustered around the lookup target, so the
//! top candidates differ only in their low bits.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use dht_core::testing::{random_key256, KeyId};
use dht_core::{
    find_k_closest, BucketRoutingTable, FlatRoutingTable, Key, Key256, Point, RoutingConfig,
    RoutingTable,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const SEED: u64 = 0x0D47;

fn random_nodes(rng: &mut StdRng, count: usize) -> Vec<KeyId<Key256>> {
    (0..count).map(|_| KeyId::new(random_key256(rng))).collect()
}

/// Nodes sharing the first 24 bytes with `target`.
fn clustered_nodes(rng: &mut StdRng, target: &Key256, count: usize) -> Vec<KeyId<Key256>> {
    let prefix = target.marshal_binary();
    (0..count)
        .map(|_| {
            let mut bytes = prefix;
            rng.fill(&mut bytes[24..]);
            KeyId::new(Key256::from_bytes(bytes))
        })
        .collect()
}

pub fn bench_key_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("dht/keyspace/key_ops");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = StdRng::seed_from_u64(SEED);
    let a = random_key256(&mut rng);
    let b = random_key256(&mut rng);

    group.bench_function("xor_distance_256bit", |bench| {
        bench.iter(|| black_box(a.distance(black_box(&b))))
    });

    group.bench_function("common_prefix_length_random", |bench| {
        bench.iter(|| black_box(a.common_prefix_length(black_box(&b))))
    });

    group.bench_function("common_prefix_length_self", |bench| {
        bench.iter(|| black_box(a.common_prefix_length(black_box(&a))))
    });

    group.bench_function("compare_distances", |bench| {
        let d1 = a.distance(&Key256::zero());
        let d2 = b.distance(&Key256::zero());
        bench.iter(|| black_box(black_box(&d1).cmp(black_box(&d2))))
    });

    group.finish();
}

pub fn bench_nearest_nodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("dht/keyspace/nearest_nodes");
    group.measurement_time(Duration::from_secs(10));

    for size in [100usize, 1_000, 5_000] {
        let mut rng = StdRng::seed_from_u64(SEED);
        let target = random_key256(&mut rng);

        let mut flat = FlatRoutingTable::new();
        for node in random_nodes(&mut rng, size) {
            flat.add_node(node);
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("flat_k20", size), &flat, |bench, table| {
            bench.iter(|| black_box(table.nearest_nodes(&target, 20)))
        });
    }

    let mut rng = StdRng::seed_from_u64(SEED);
    let local = random_key256(&mut rng);
    let mut buckets = BucketRoutingTable::new(local, RoutingConfig::default())
        .expect("default config is valid");
    for node in random_nodes(&mut rng, 5_000) {
        buckets.add_node(node);
    }
    let target = random_key256(&mut rng);
    group.bench_function("bucket_k20_full_table", |bench| {
        bench.iter(|| black_box(buckets.nearest_nodes(&target, 20)))
    });

    let target = random_key256(&mut rng);
    let mut clustered = FlatRoutingTable::new();
    for node in clustered_nodes(&mut rng, &target, 1_000) {
        clustered.add_node(node);
    }
    group.bench_function("flat_k20_clustered_adversarial", |bench| {
        bench.iter(|| black_box(clustered.nearest_nodes(&target, 20)))
    });

    group.finish();
}

pub fn bench_candidate_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("dht/keyspace/candidate_merge");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = StdRng::seed_from_u64(SEED);
    let target = random_key256(&mut rng);

    // Three query rounds of 20 responses with 20 nodes each.
    for rounds in [1usize, 3] {
        let candidates = random_nodes(&mut rng, rounds * 20 * 20);
        group.throughput(Throughput::Elements(candidates.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("find_k_closest_20", candidates.len()),
            &candidates,
            |bench, nodes| bench.iter(|| black_box(find_k_closest(nodes, &target, 20))),
        );
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_key_operations(c);
    bench_nearest_nodes(c);
    bench_candidate_merge(c);
}
