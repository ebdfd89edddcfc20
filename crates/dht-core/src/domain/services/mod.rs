//! Domain Services - Pure functions for key-space operations
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic (same inputs → same outputs).

mod sorting;

pub use sorting::{find_k_closest, nearest_of, sort_by_distance};
