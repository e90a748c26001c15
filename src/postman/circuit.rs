//! Walk construction from the augmented graph.
//!
//! Undirected mode takes the Eulerian circuit of the augmented multigraph as
//! the walk. Directed mode takes an Eulerian path of the augmented
//! (undirected) multigraph and reconciles it against the original one-way
//! street network:
//!
//! - a step `src → dest` that exists in the original graph is serviced;
//! - otherwise the shortest directed path `src ⇝ dest` is spliced in as
//!   deadhead traversals. If the reverse arc `dest → src` has not been
//!   visited yet it is serviced right away (or, with no such street, reached
//!   by a deadhead detour) and the same detour is driven again, so the
//!   vehicle is back at `dest` for the next step.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::SolveError;
use crate::models::{NodeId, RoadGraph, Traversal, Walk};
use crate::paths::shortest_path;

use super::euler::{eulerian_circuit, eulerian_path};

/// How the walk is derived from the augmented graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalMode {
    /// Streets may be covered in either direction (aerial survey).
    #[default]
    Undirected,
    /// Streets must be serviced in their legal direction (snow plowing).
    Directed,
}

/// Builds the walk covering every edge of `augmented`.
///
/// `original` is the cleaned graph before the undirected view was taken;
/// it is only consulted in [`TraversalMode::Directed`].
///
/// # Errors
///
/// [`SolveError::NotEulerian`] if `augmented` fails the Eulerian
/// precondition, [`SolveError::NoDirectedPath`] if reconciliation cannot
/// reach a step's target in `original`.
pub fn build_walk(
    original: &RoadGraph,
    augmented: &RoadGraph,
    mode: TraversalMode,
) -> Result<Walk, SolveError> {
    match mode {
        TraversalMode::Undirected => eulerian_circuit(augmented),
        TraversalMode::Directed => {
            let path = eulerian_path(augmented)?;
            reconcile(original, &path)
        }
    }
}

/// Replays `path` on the direction-sensitive `original` graph, inserting
/// deadhead detours wherever a step runs against a one-way street.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph, Traversal, Walk};
/// use u_postman::postman::reconcile;
///
/// // One-way loop 1 → 2 → 3 → 1
/// let original = RoadGraph::from_edges(true, vec![
///     Edge::new(1, 2, 10.0),
///     Edge::new(2, 3, 10.0),
///     Edge::new(3, 1, 10.0),
/// ]);
/// let mut path = Walk::new();
/// path.push(Traversal::service(1, 2, 10.0));
/// path.push(Traversal::service(2, 1, 10.0)); // against the flow
///
/// let walk = reconcile(&original, &path).unwrap();
/// assert_eq!(walk.arcs().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 1)]);
/// assert_eq!(walk.deadhead_count(), 2);
/// ```
pub fn reconcile(original: &RoadGraph, path: &Walk) -> Result<Walk, SolveError> {
    let mut walk = Walk::new();
    let mut visited: HashSet<(NodeId, NodeId)> = HashSet::new();

    for step in path.traversals() {
        let (src, dest) = (step.source, step.target);

        if let Some(edge) = original.cheapest_edge(src, dest) {
            walk.push(Traversal::service(src, dest, edge.length));
            visited.insert((src, dest));
            continue;
        }

        let detour = deadhead_path(original, src, dest)?;
        trace!(src, dest, hops = detour.len(), "deadhead detour");
        visited.extend(detour.iter().map(|t| (t.source, t.target)));
        walk.extend(detour.iter().cloned());

        if visited.insert((dest, src)) {
            match original.cheapest_edge(dest, src) {
                Some(edge) => walk.push(Traversal::service(dest, src, edge.length)),
                None => {
                    let back = deadhead_path(original, dest, src)?;
                    visited.extend(back.iter().map(|t| (t.source, t.target)));
                    walk.extend(back);
                }
            }
            walk.extend(detour);
        }
    }

    Ok(walk)
}

fn deadhead_path(
    graph: &RoadGraph,
    from: NodeId,
    to: NodeId,
) -> Result<Vec<Traversal>, SolveError> {
    let path = shortest_path(graph, from, to).ok_or(SolveError::NoDirectedPath { from, to })?;
    path.hops()
        .map(|(a, b)| {
            graph
                .cheapest_edge(a, b)
                .map(|edge| Traversal::deadhead(a, b, edge.length))
                .ok_or(SolveError::NoDirectedPath { from: a, to: b })
        })
        .collect()
}
