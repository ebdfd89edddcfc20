//! Reference Routing Table Implementations
//!
//! Three interchangeable implementations of the [`crate::RoutingTable`]
//! contract:
//!
//! - [`FlatRoutingTable`]: unbounded, ordered by key
//! - [`BucketRoutingTable`]: Kademlia k-buckets around a local key
//! - [`SharedRoutingTable`]: reader/writer lock around either of the above

// Semantic submodules
mod bucket;
mod flat;
mod shared;
mod stats;
mod table;

// Re-export public API
pub use bucket::KBucket;
pub use flat::FlatRoutingTable;
pub use shared::SharedRoutingTable;
pub use stats::RoutingTableStats;
pub use table::BucketRoutingTable;
