/*!
# Node Representation

Nodes are dense `u32` indices in `0..n`. Route networks stay well below `2^32`
airports, so `u32` halves the footprint of `usize`-based tables and lets the
algorithms index straight into `Vec`s without any abstraction on top.

External string codes (e.g. IATA airport codes) are translated into these
indices by the [`network`](crate::network) layer.
*/

use std::num::NonZero;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// `Option<Node>` pads to eight bytes which hurts when we keep one entry per
/// node (predecessor tables, position tables). `OptionalNode` reserves
/// [`INVALID_NODE`] as the niche so that `Option<OptionalNode>` stays at four
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNode(NonZero<Node>);

impl OptionalNode {
    /// Returns `Some(OptionalNode)` if `n != INVALID_NODE` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ INVALID_NODE) {
            Some(inner) => Some(OptionalNode(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ INVALID_NODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_roundtrip() {
        assert!(OptionalNode::new(INVALID_NODE).is_none());
        for n in [0, 1, 42, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn optional_node_is_niched() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }
}
