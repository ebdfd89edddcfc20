//! 256-bit Kademlia key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{Key, BIT_PANIC_MSG};
use crate::domain::errors::KeyError;
use crate::domain::point::{Distance, Point};

/// Byte length of a [`Key256`].
pub const KEY256_BYTES: usize = 32;

/// A 256-bit Kademlia key stored big-endian, most significant byte first.
///
/// `Key256::default()` holds no data. An absent key behaves exactly like the
/// all-zero key for distance, comparison, equality and hashing, while
/// [`Key256::hex_string`] renders it as an empty string. The common prefix
/// length between an absent key and any other key is 256.
///
/// Keys are `Copy`; every copy owns its bytes.
#[derive(Clone, Copy, Default)]
pub struct Key256 {
    bytes: Option<[u8; KEY256_BYTES]>,
}

impl Key256 {
    /// Build a key from exactly 32 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidDataLength`] for any other length.
    pub fn new(data: &[u8]) -> Result<Self, KeyError> {
        let bytes =
            <[u8; KEY256_BYTES]>::try_from(data).map_err(|_| KeyError::InvalidDataLength {
                expected: KEY256_BYTES,
                actual: data.len(),
            })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Build a key from a fixed-size array.
    pub const fn from_bytes(bytes: [u8; KEY256_BYTES]) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// Whether this key carries no data.
    pub fn is_absent(&self) -> bool {
        self.bytes.is_none()
    }

    /// Raw bytes, or `None` for an absent key.
    pub fn as_bytes(&self) -> Option<&[u8; KEY256_BYTES]> {
        self.bytes.as_ref()
    }

    /// Lowercase hex of the 32 bytes; empty for an absent key.
    pub fn hex_string(&self) -> String {
        self.bytes.map(hex::encode).unwrap_or_default()
    }

    /// Fixed 32-byte big-endian encoding. An absent key encodes as zeros.
    pub fn marshal_binary(&self) -> [u8; KEY256_BYTES] {
        self.value()
    }

    /// Decode the encoding produced by [`Key256::marshal_binary`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidDataLength`] unless `data` is 32 bytes long.
    pub fn unmarshal_binary(data: &[u8]) -> Result<Self, KeyError> {
        Self::new(data)
    }

    #[inline]
    fn value(&self) -> [u8; KEY256_BYTES] {
        self.bytes.unwrap_or([0u8; KEY256_BYTES])
    }
}

impl Point for Key256 {
    type Distance = Key256;

    fn distance(&self, other: &Self) -> Key256 {
        let xored = match (self.bytes.as_ref(), other.bytes.as_ref()) {
            (Some(a), Some(b)) => {
                let mut out = [0u8; KEY256_BYTES];
                for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
                    *o = x ^ y;
                }
                out
            }
            // XOR with a logical zero
            (Some(a), None) | (None, Some(a)) => *a,
            (None, None) => [0u8; KEY256_BYTES],
        };
        Key256::from_bytes(xored)
    }

    fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Distance for Key256 {}

impl Key for Key256 {
    const BIT_LEN: usize = KEY256_BYTES * 8;

    fn zero() -> Self {
        Self::from_bytes([0u8; KEY256_BYTES])
    }

    fn bit(&self, i: usize) -> u8 {
        assert!(i < Self::BIT_LEN, "{}", BIT_PANIC_MSG);
        match &self.bytes {
            Some(b) => (b[i / 8] >> (7 - i % 8)) & 1,
            None => 0,
        }
    }

    fn common_prefix_length(&self, other: &Self) -> usize {
        let (Some(a), Some(b)) = (&self.bytes, &other.bytes) else {
            return Self::BIT_LEN;
        };
        a.iter()
            .zip(b.iter())
            .enumerate()
            .find_map(|(i, (x, y))| {
                let diff = x ^ y;
                (diff != 0).then(|| i * 8 + diff.leading_zeros() as usize)
            })
            .unwrap_or(Self::BIT_LEN)
    }
}

impl PartialEq for Key256 {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Key256 {}

impl PartialOrd for Key256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

// Must agree with Eq: an absent key hashes like the zero key.
impl Hash for Key256 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl fmt::Debug for Key256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bytes {
            Some(_) => write!(f, "Key256({})", self.hex_string()),
            None => write!(f, "Key256(<absent>)"),
        }
    }
}

impl fmt::Display for Key256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string())
    }
}

impl FromStr for Key256 {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = hex::decode(s)?;
        Self::new(&data)
    }
}

impl From<[u8; KEY256_BYTES]> for Key256 {
    fn from(bytes: [u8; KEY256_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for Key256 {
    type Error = KeyError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}
