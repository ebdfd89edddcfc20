//! # Integration Tests
//!
//! Routing tables and key types exercised only through the public API of
//! `dht-core`, with logging installed through `dht-telemetry`.

pub mod lookup_flow;
