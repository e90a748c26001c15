//! Graph augmentation along matched paths.
//!
//! Every edge on a matched pair's connecting path is duplicated once. Each
//! interior path vertex gains two edge ends (parity unchanged) while the two
//! endpoints gain one each, turning both odd endpoints even.
//!
//! When several parallel edges join a hop, the copy is taken from the
//! shortest one (lowest edge ID on ties), keeping its attributes.

use tracing::debug;

use crate::error::SolveError;
use crate::models::{Matching, RoadGraph};

/// Result of [`augment`].
#[derive(Debug, Clone)]
pub struct Augmentation {
    /// The augmented graph.
    pub graph: RoadGraph,
    /// Number of duplicated edges.
    pub edges_added: usize,
    /// Total length of the duplicated edges in meters.
    pub added_length: f64,
}

/// Returns a copy of `graph` with every matched path's edges duplicated.
///
/// # Errors
///
/// [`SolveError::MissingEdge`] if a path hop has no edge in `graph`.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph};
/// use u_postman::postman::{augment, match_odd_vertices, MatchOrder};
///
/// let g = RoadGraph::from_edges(false, vec![
///     Edge::new(1, 2, 10.0),
///     Edge::new(2, 3, 10.0),
/// ]);
/// let matching = match_odd_vertices(&g, &g.odd_vertices(), MatchOrder::Ascending).unwrap();
/// let result = augment(&g, &matching).unwrap();
/// assert_eq!(result.edges_added, 2);
/// assert!(result.graph.odd_vertices().is_empty());
/// ```
pub fn augment(graph: &RoadGraph, matching: &Matching) -> Result<Augmentation, SolveError> {
    let mut augmented = graph.clone();
    let mut edges_added = 0;
    let mut added_length = 0.0;

    for pair in matching.pairs() {
        for (from, to) in pair.hops() {
            let edge = graph
                .cheapest_edge(from, to)
                .ok_or(SolveError::MissingEdge { from, to })?;
            added_length += edge.length;
            augmented.add_edge(edge.clone());
            edges_added += 1;
        }
    }

    debug!(edges_added, added_length, "graph augmented");
    Ok(Augmentation {
        graph: augmented,
        edges_added,
        added_length,
    })
}
