//! Odd-vertex pairing types.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Two odd-degree vertices joined by a shortest connecting path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    /// Vertex the search started from.
    pub first: NodeId,
    /// Nearest remaining odd vertex found by the search.
    pub second: NodeId,
    /// Connecting path, `first` to `second` inclusive.
    pub path: Vec<NodeId>,
    /// Path length in meters.
    pub length: f64,
}

impl MatchedPair {
    /// Iterates over the consecutive vertex pairs of the connecting path.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

/// A set of disjoint vertex pairs.
///
/// # Examples
///
/// ```
/// use u_postman::models::{MatchedPair, Matching};
///
/// let mut m = Matching::new();
/// m.push(MatchedPair { first: 1, second: 5, path: vec![1, 5], length: 50.0 });
/// assert_eq!(m.len(), 1);
/// assert!(m.covers(5));
/// assert!(!m.covers(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matching {
    pairs: Vec<MatchedPair>,
}

impl Matching {
    /// Creates an empty matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair.
    pub fn push(&mut self, pair: MatchedPair) {
        self.pairs.push(pair);
    }

    /// Returns the pairs in the order they were formed.
    pub fn pairs(&self) -> &[MatchedPair] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns `true` if `node` is an endpoint of some pair.
    pub fn covers(&self, node: NodeId) -> bool {
        self.pairs.iter().any(|p| p.first == node || p.second == node)
    }

    /// All matched endpoints, in pair order.
    pub fn endpoints(&self) -> Vec<NodeId> {
        self.pairs.iter().flat_map(|p| [p.first, p.second]).collect()
    }

    /// Sum of connecting path lengths in meters.
    pub fn total_length(&self) -> f64 {
        self.pairs.iter().map(|p| p.length).sum()
    }
}
