//! Minimal NodeId, Request and Response implementations.

use std::fmt;

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::key::{Key, Key256, KEY256_BYTES};
use crate::ports::{KeyOf, NodeId, Request, Response};

/// A NodeId that is its own Kademlia key.
///
/// The key is supplied directly rather than derived from a preimage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId<K>(K);

impl<K: Key> KeyId<K> {
    pub fn new(key: K) -> Self {
        Self(key)
    }
}

impl<K: Key> NodeId for KeyId<K> {
    type Key = K;

    fn key(&self) -> K {
        self.0.clone()
    }
}

/// A NodeId whose 256-bit key is the SHA-256 of a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringId(String);

impl StringId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl NodeId for StringId {
    type Key = Key256;

    fn key(&self) -> Key256 {
        let digest: [u8; KEY256_BYTES] = Sha256::digest(self.0.as_bytes()).into();
        Key256::from_bytes(digest)
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A NodeId carrying a tag, so that distinct nodes can share one key.
///
/// Used to observe which of two same-key nodes a routing table kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaggedId<K> {
    pub key: K,
    pub tag: u32,
}

impl<K: Key> TaggedId<K> {
    pub fn new(key: K, tag: u32) -> Self {
        Self { key, tag }
    }
}

impl<K: Key> NodeId for TaggedId<K> {
    type Key = K;

    fn key(&self) -> K {
        self.key.clone()
    }
}

/// Response carrying a list of closer nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureResponse<N> {
    nodes: Vec<N>,
}

impl<N> FixtureResponse<N> {
    pub fn new(nodes: Vec<N>) -> Self {
        Self { nodes }
    }
}

impl<N: NodeId> Response for FixtureResponse<N> {
    type Node = N;

    fn closer_nodes(&self) -> &[N] {
        &self.nodes
    }
}

/// Request for the key of a target node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRequest<N> {
    target: N,
}

impl<N: NodeId> FixtureRequest<N> {
    pub fn new(target: N) -> Self {
        Self { target }
    }
}

impl<N: NodeId> Request for FixtureRequest<N> {
    type Node = N;
    type Response = FixtureResponse<N>;

    fn target(&self) -> KeyOf<N> {
        self.target.key()
    }

    fn empty_response(&self) -> FixtureResponse<N> {
        FixtureResponse::new(Vec::new())
    }
}

/// A key whose first byte is `first` and all other bytes are zero.
pub fn key256_with_first_byte(first: u8) -> Key256 {
    let mut bytes = [0u8; KEY256_BYTES];
    bytes[0] = first;
    Key256::from_bytes(bytes)
}

/// A uniformly random 256-bit key.
pub fn random_key256<R: RngCore + ?Sized>(rng: &mut R) -> Key256 {
    let mut bytes = [0u8; KEY256_BYTES];
    rng.fill_bytes(&mut bytes);
    Key256::from_bytes(bytes)
}
