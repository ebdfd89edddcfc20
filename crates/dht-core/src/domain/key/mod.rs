//! Kademlia keys.
//!
//! A Kademlia key is a fixed-length bit string. Different deployments use
//! different widths (the Kademlia paper uses 160 bits, IPFS uses 256), so the
//! XOR metric and its bit-level operations are expressed once in [`Key`] and
//! implemented per width.
//!
//! A key is not necessarily a node's identity: a node's key may be derived
//! from its logical identifier, e.g. by hashing. See [`crate::NodeId`].

mod key256;

pub use key256::{Key256, KEY256_BYTES};

use super::point::{Distance, Point};

/// Panic message for out-of-range [`Key::bit`] indices.
pub(crate) const BIT_PANIC_MSG: &str = "bit index out of range";

/// A fixed-width key under the XOR metric.
///
/// The distance between two keys is their bitwise XOR, itself a key of the
/// same type, and keys compare as unsigned big-endian integers.
///
/// # Invariants
///
/// - `k.distance(&k) == K::zero()`
/// - `k.common_prefix_length(&k) == K::BIT_LEN`
/// - if `a` and `b` first differ at bit `p`, then
///   `a.common_prefix_length(&b) == p` and the key holding 0 at `p` is the
///   smaller one
pub trait Key: Point<Distance = Self> + Distance {
    /// Width of the key in bits.
    const BIT_LEN: usize;

    /// The all-zero key.
    fn zero() -> Self;

    /// Width of the key in bits.
    fn bit_len(&self) -> usize {
        Self::BIT_LEN
    }

    /// Value of the `i`'th bit, counted from the most significant bit.
    ///
    /// Equivalent to `(key >> (BIT_LEN - i - 1)) & 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= BIT_LEN`. An out-of-range index is a caller bug.
    fn bit(&self, i: usize) -> u8;

    /// Number of leading bits shared with `other`.
    ///
    /// Equal to `BIT_LEN` for identical keys.
    fn common_prefix_length(&self, other: &Self) -> usize;
}
