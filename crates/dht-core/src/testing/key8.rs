//! An 8-bit key, small enough to check the metric laws exhaustively.

use crate::domain::key::{Key, BIT_PANIC_MSG};
use crate::domain::point::{Distance, Point};

/// An 8-bit Kademlia key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key8(pub u8);

impl Point for Key8 {
    type Distance = Key8;

    fn distance(&self, other: &Self) -> Key8 {
        Key8(self.0 ^ other.0)
    }

    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Distance for Key8 {}

impl Key for Key8 {
    const BIT_LEN: usize = 8;

    fn zero() -> Self {
        Key8(0)
    }

    fn bit(&self, i: usize) -> u8 {
        assert!(i < Self::BIT_LEN, "{}", BIT_PANIC_MSG);
        (self.0 >> (7 - i)) & 1
    }

    fn common_prefix_length(&self, other: &Self) -> usize {
        (self.0 ^ other.0).leading_zeros() as usize
    }
}
