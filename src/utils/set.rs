/*!
# Generalized Sets

Abstraction over set data structures, allowing algorithms to choose the most
efficient implementation based on context:

- Sparse sets -> `FxHashSet`
- Dense node sets -> [`NodeSet`]

Traversals take their visitation state through the [`Set`] trait, so the same
BFS works with either backing store.
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use itertools::Itertools;
use num::ToPrimitive;

use crate::node::*;

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Constructor trait for sets that are sized for nodes `0..n`
pub trait FromCapacity: Sized {
    /// Creates an empty set able to hold the nodes `0..n`
    fn with_node_capacity(n: NumNodes) -> Self;
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<S> FromCapacity for HashSet<Node, S>
where
    S: BuildHasher + Default,
{
    fn with_node_capacity(n: NumNodes) -> Self {
        HashSet::with_capacity_and_hasher(n as usize, S::default())
    }
}

/// A dense set of nodes `0..n` supporting constant-time insertion, removal,
/// membership tests and iteration in insertion order.
///
/// Internally keeps the members in a vector plus a per-node position table,
/// removal swaps with the last member.
pub struct NodeSet {
    data: Vec<Node>,
    positions: Vec<Option<OptionalNode>>,
}

impl NodeSet {
    /// Creates an empty node-set of size `n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            data: Vec::new(),
            positions: vec![None; n as usize],
        }
    }

    /// Creates a full node-set of size `n`.
    /// Elements are stored in increasing order.
    pub fn new_with_all(n: NumNodes) -> Self {
        Self {
            data: (0..n).collect_vec(),
            positions: (0..n).map(OptionalNode::new).collect_vec(),
        }
    }

    /// Returns an iterator over all elements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.data.iter().copied()
    }
}

impl FromCapacity for NodeSet {
    fn with_node_capacity(n: NumNodes) -> Self {
        Self::new(n)
    }
}

impl Set<Node> for NodeSet {
    fn insert(&mut self, value: Node) -> bool {
        let index = value.to_usize().unwrap();
        if self.positions[index].is_some() {
            return true;
        }

        self.positions[index] = OptionalNode::new(self.data.len() as Node);
        self.data.push(value);

        false
    }

    fn remove(&mut self, value: &Node) -> bool {
        let index = value.to_usize().unwrap();
        let pos = match self.positions[index] {
            Some(pos) => pos.get() as usize,
            None => return false,
        };

        self.data.swap_remove(pos);
        if pos < self.data.len() {
            self.positions[self.data[pos] as usize] = self.positions[index];
        }

        self.positions[index] = None;

        true
    }

    fn contains(&self, value: &Node) -> bool {
        self.positions[*value as usize].is_some()
    }

    fn clear(&mut self) {
        self.data.clear();
        self.positions.iter_mut().for_each(|p| *p = None);
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
