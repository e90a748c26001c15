//! Greedy odd-vertex matching.
//!
//! # Algorithm
//!
//! Keep a set of odd-degree vertices still awaiting a partner. While at least
//! two remain, take the next vertex `u` in processing order, run a Dijkstra
//! search from `u` that stops at the first settled vertex still in the set,
//! and pair the two along the shortest path found.
//!
//! This is a heuristic: the result depends on the processing order and is
//! not a minimum-weight perfect matching. Searches are strictly sequential
//! because each one depends on the pairs formed before it.
//!
//! # Complexity
//!
//! O(k · E log V) for k = (odd vertex count) / 2 bounded searches.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SolveError;
use crate::models::{MatchedPair, Matching, NodeId, RoadGraph};
use crate::paths::nearest_in;

/// Order in which odd vertices start their partner search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOrder {
    /// Ascending vertex ID.
    #[default]
    Ascending,
    /// A seeded random permutation; the same seed gives the same matching.
    Shuffled {
        /// RNG seed.
        seed: u64,
    },
}

impl MatchOrder {
    fn arrange(self, vertices: &BTreeSet<NodeId>) -> Vec<NodeId> {
        let mut order: Vec<NodeId> = vertices.iter().copied().collect();
        if let MatchOrder::Shuffled { seed } = self {
            let mut rng = StdRng::seed_from_u64(seed);
            order.shuffle(&mut rng);
        }
        order
    }
}

/// Pairs the given odd-degree vertices along shortest paths in `graph`.
///
/// # Errors
///
/// [`SolveError::UnreachableOddVertex`] if a search exhausts its frontier
/// without reaching any unpaired odd vertex.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph};
/// use u_postman::postman::{match_odd_vertices, MatchOrder};
///
/// let g = RoadGraph::from_edges(false, vec![
///     Edge::new(1, 2, 10.0),
///     Edge::new(2, 3, 10.0),
///     Edge::new(2, 4, 10.0),
///     Edge::new(4, 5, 10.0),
/// ]);
/// let odd = g.odd_vertices(); // 1, 2, 3, 5
/// let matching = match_odd_vertices(&g, &odd, MatchOrder::Ascending).unwrap();
/// assert_eq!(matching.len(), 2);
/// assert_eq!(matching.pairs()[0].path, vec![1, 2]);
/// ```
pub fn match_odd_vertices(
    graph: &RoadGraph,
    odd_vertices: &[NodeId],
    order: MatchOrder,
) -> Result<Matching, SolveError> {
    let mut remaining: BTreeSet<NodeId> = odd_vertices.iter().copied().collect();
    let mut matching = Matching::new();

    for vertex in order.arrange(&remaining) {
        if remaining.len() < 2 {
            break;
        }
        if !remaining.remove(&vertex) {
            continue;
        }

        let path = nearest_in(graph, vertex, &remaining)
            .ok_or(SolveError::UnreachableOddVertex { vertex })?;
        let partner = path
            .target()
            .ok_or(SolveError::UnreachableOddVertex { vertex })?;
        remaining.remove(&partner);

        matching.push(MatchedPair {
            first: vertex,
            second: partner,
            path: path.nodes,
            length: path.length,
        });
    }

    debug!(
        odd_vertices = odd_vertices.len(),
        pairs = matching.len(),
        path_length = matching.total_length(),
        "pairing complete"
    );
    Ok(matching)
}
