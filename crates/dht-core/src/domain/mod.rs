//! Domain Layer - Pure key-space logic with no I/O
//!
//! This module contains:
//! - Metric primitives (Point, Distance)
//! - Kademlia keys and the 256-bit reference key
//! - Distance ranking services
//! - Reference routing tables (flat, k-bucket, shared)

pub mod config;
pub mod errors;
pub mod key;
pub mod point;
pub mod routing_table;
pub mod services;

pub use config::*;
pub use errors::*;
pub use key::*;
pub use point::*;
pub use routing_table::*;
pub use services::*;
