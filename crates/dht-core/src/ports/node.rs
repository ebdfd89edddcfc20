//! Node identifiers and the lookup request/response shapes.

use std::fmt::Debug;

use crate::domain::point::Point;

/// A logical node identifier.
///
/// A NodeId is not necessarily a key. Implementations often treat the NodeId
/// as a preimage and derive the key by hashing it; others use the key itself
/// as the identifier. Several NodeIds may map onto the same key.
pub trait NodeId: Clone + Debug {
    /// The point type distances are computed in.
    type Key: Point;

    /// The key this node is located at.
    ///
    /// Must be pure: the same NodeId always yields the same key.
    fn key(&self) -> Self::Key;
}

/// Shorthand for the key type of a [`NodeId`].
pub type KeyOf<N> = <N as NodeId>::Key;

/// A lookup answer: nodes the responder believes are closer to the target.
pub trait Response {
    type Node: NodeId;

    /// Closer nodes, in no mandated order.
    fn closer_nodes(&self) -> &[Self::Node];
}

/// A lookup request for a target key.
pub trait Request {
    type Node: NodeId;

    /// The response type this request is answered with.
    type Response: Response<Node = Self::Node>;

    /// The key being searched for.
    fn target(&self) -> KeyOf<Self::Node>;

    /// An empty response of the right type, used to decode replies without
    /// knowing the concrete response implementation.
    fn empty_response(&self) -> Self::Response;
}
