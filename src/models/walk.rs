//! Walk and traversal types.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Whether a traversal performs the service or only repositions the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalKind {
    /// The street segment is serviced (plowed, inspected, ...).
    Service,
    /// Deadheading: travel without service to reach the next segment.
    Deadhead,
}

/// A single directed traversal of a street segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traversal {
    /// Vertex the traversal starts at.
    pub source: NodeId,
    /// Vertex the traversal ends at.
    pub target: NodeId,
    /// Length of the traversed segment in meters.
    pub length: f64,
    /// Service or deadhead.
    pub kind: TraversalKind,
}

impl Traversal {
    /// Creates a servicing traversal.
    pub fn service(source: NodeId, target: NodeId, length: f64) -> Self {
        Self {
            source,
            target,
            length,
            kind: TraversalKind::Service,
        }
    }

    /// Creates a deadhead traversal.
    pub fn deadhead(source: NodeId, target: NodeId, length: f64) -> Self {
        Self {
            source,
            target,
            length,
            kind: TraversalKind::Deadhead,
        }
    }

    /// Returns `true` for a deadhead traversal.
    pub fn is_deadhead(&self) -> bool {
        self.kind == TraversalKind::Deadhead
    }
}

/// An ordered sequence of traversals.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Traversal, Walk};
///
/// let mut walk = Walk::new();
/// walk.push(Traversal::service(1, 2, 100.0));
/// walk.push(Traversal::deadhead(2, 1, 100.0));
/// assert_eq!(walk.len(), 2);
/// assert_eq!(walk.deadhead_count(), 1);
/// assert_eq!(walk.vertices(), vec![1, 2, 1]);
/// assert!(walk.is_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    traversals: Vec<Traversal>,
}

impl Walk {
    /// Creates an empty walk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a traversal.
    pub fn push(&mut self, traversal: Traversal) {
        self.traversals.push(traversal);
    }

    /// Returns the traversals in order.
    pub fn traversals(&self) -> &[Traversal] {
        &self.traversals
    }

    /// Number of traversals.
    pub fn len(&self) -> usize {
        self.traversals.len()
    }

    /// Returns `true` if the walk has no traversals.
    pub fn is_empty(&self) -> bool {
        self.traversals.is_empty()
    }

    /// The `(source, target)` pairs in walk order.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.traversals.iter().map(|t| (t.source, t.target))
    }

    /// Total traversed length in meters, deadheads included.
    pub fn total_length(&self) -> f64 {
        self.traversals.iter().map(|t| t.length).sum()
    }

    /// Number of servicing traversals.
    pub fn service_count(&self) -> usize {
        self.traversals.iter().filter(|t| !t.is_deadhead()).count()
    }

    /// Number of deadhead traversals.
    pub fn deadhead_count(&self) -> usize {
        self.traversals.iter().filter(|t| t.is_deadhead()).count()
    }

    /// Vertex sequence of the walk: every traversal's source plus the final
    /// target. Empty for an empty walk.
    pub fn vertices(&self) -> Vec<NodeId> {
        let mut vertices: Vec<NodeId> = self.traversals.iter().map(|t| t.source).collect();
        if let Some(last) = self.traversals.last() {
            vertices.push(last.target);
        }
        vertices
    }

    /// Returns `true` if each traversal starts where the previous one ended.
    pub fn is_continuous(&self) -> bool {
        self.traversals
            .windows(2)
            .all(|pair| pair[0].target == pair[1].source)
    }

    /// Returns `true` if the walk is continuous and ends where it started.
    pub fn is_closed(&self) -> bool {
        match (self.traversals.first(), self.traversals.last()) {
            (Some(first), Some(last)) => self.is_continuous() && first.source == last.target,
            _ => true,
        }
    }
}

impl Extend<Traversal> for Walk {
    fn extend<I: IntoIterator<Item = Traversal>>(&mut self, iter: I) {
        self.traversals.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_empty() {
        let w = Walk::new();
        assert!(w.is_empty());
        assert!(w.vertices().is_empty());
        assert_eq!(w.total_length(), 0.0);
        assert!(w.is_closed());
    }

    #[test]
    fn test_walk_counts() {
        let mut w = Walk::new();
        w.push(Traversal::service(1, 2, 10.0));
        w.extend(vec![
            Traversal::deadhead(2, 3, 5.0),
            Traversal::service(3, 4, 7.5),
        ]);
        assert_eq!(w.len(), 3);
        assert_eq!(w.service_count(), 2);
        assert_eq!(w.deadhead_count(), 1);
        assert!((w.total_length() - 22.5).abs() < 1e-10);
        assert_eq!(w.arcs().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 4)]);
        assert!(w.is_continuous());
        assert!(!w.is_closed());
    }

    #[test]
    fn test_walk_broken() {
        let mut w = Walk::new();
        w.push(Traversal::service(1, 2, 10.0));
        w.push(Traversal::service(3, 1, 10.0));
        assert!(!w.is_continuous());
        assert!(!w.is_closed());
    }
}
