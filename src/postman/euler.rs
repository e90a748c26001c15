//! Eulerian circuits and paths (Hierholzer).
//!
//! # Algorithm
//!
//! Hierholzer's algorithm over edge IDs: follow unused edges from the start
//! vertex, pushing vertices on a stack; when a vertex has no unused edge
//! left, pop it onto the output. Reversing the output gives a trail that
//! uses every edge exactly once. Parallel edges and self-loops are distinct
//! edges and are each used once.
//!
//! Preconditions are checked up front: every vertex even (undirected) or
//! balanced (directed) for a circuit; at most one pair of unbalanced
//! vertices for a path; and in both cases all edges in one component.
//!
//! # Complexity
//!
//! O(V + E).

use std::collections::HashMap;

use crate::error::SolveError;
use crate::models::{EdgeId, NodeId, RoadGraph, Traversal, Walk};

/// Eulerian circuit starting and ending at the smallest non-isolated vertex.
///
/// Every traversal is a service traversal. A graph without edges yields an
/// empty walk.
///
/// # Errors
///
/// [`SolveError::NotEulerian`] if a vertex is odd (undirected) or
/// unbalanced (directed), or the edges span more than one component.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph};
/// use u_postman::postman::eulerian_circuit;
///
/// let g = RoadGraph::from_edges(false, vec![
///     Edge::new(1, 2, 1.0),
///     Edge::new(2, 3, 1.0),
///     Edge::new(3, 1, 1.0),
/// ]);
/// let walk = eulerian_circuit(&g).unwrap();
/// assert_eq!(walk.vertices(), vec![1, 2, 3, 1]);
/// ```
pub fn eulerian_circuit(graph: &RoadGraph) -> Result<Walk, SolveError> {
    let unbalanced = unbalanced_vertices(graph);
    if let Some(&(node, _)) = unbalanced.first() {
        let reason = if graph.is_directed() {
            format!("vertex {node} has in-degree != out-degree")
        } else {
            format!("vertex {node} has odd degree")
        };
        return Err(SolveError::NotEulerian { reason });
    }

    match first_with_edges(graph) {
        Some(start) => hierholzer(graph, start),
        None => Ok(Walk::new()),
    }
}

/// Eulerian path: a circuit when every vertex is even/balanced, otherwise an
/// open trail between the two unbalanced vertices.
///
/// An undirected path starts at the smaller odd vertex; a directed one at
/// the vertex with one surplus outgoing edge.
///
/// # Errors
///
/// [`SolveError::NotEulerian`] if more than two vertices are unbalanced, the
/// imbalance is not ±1, or the edges span more than one component.
pub fn eulerian_path(graph: &RoadGraph) -> Result<Walk, SolveError> {
    let unbalanced = unbalanced_vertices(graph);
    let start = match unbalanced.as_slice() {
        [] => match first_with_edges(graph) {
            Some(start) => start,
            None => return Ok(Walk::new()),
        },
        [(a, _), (b, _)] if !graph.is_directed() => (*a).min(*b),
        [(a, 1), (_, -1)] => *a,
        [(_, -1), (b, 1)] => *b,
        _ => {
            return Err(SolveError::NotEulerian {
                reason: format!(
                    "{} vertices are unbalanced, an Eulerian path allows at most 2",
                    unbalanced.len()
                ),
            })
        }
    };
    hierholzer(graph, start)
}

/// Vertices violating the circuit condition, with their imbalance:
/// out-degree minus in-degree (directed) or the degree itself (undirected).
fn unbalanced_vertices(graph: &RoadGraph) -> Vec<(NodeId, i64)> {
    graph
        .nodes()
        .filter_map(|node| {
            if graph.is_directed() {
                let diff = graph.out_degree(node) as i64 - graph.in_degree(node) as i64;
                (diff != 0).then_some((node, diff))
            } else {
                let degree = graph.degree(node) as i64;
                (degree % 2 != 0).then_some((node, degree))
            }
        })
        .collect()
}

fn first_with_edges(graph: &RoadGraph) -> Option<NodeId> {
    graph.nodes().find(|&node| !graph.out_edges(node).is_empty())
}

fn hierholzer(graph: &RoadGraph, start: NodeId) -> Result<Walk, SolveError> {
    let mut used = vec![false; graph.edge_count()];
    let mut cursor: HashMap<NodeId, usize> = HashMap::new();
    let mut stack: Vec<(NodeId, Option<EdgeId>)> = vec![(start, None)];
    let mut trail: Vec<(NodeId, Option<EdgeId>)> = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&(node, _)) = stack.last() {
        let incident = graph.out_edges(node);
        let slot = cursor.entry(node).or_insert(0);
        while *slot < incident.len() && used[incident[*slot]] {
            *slot += 1;
        }

        if let Some(&edge) = incident.get(*slot) {
            used[edge] = true;
            *slot += 1;
            stack.push((graph.traverse(edge, node), Some(edge)));
        } else if let Some(frame) = stack.pop() {
            trail.push(frame);
        }
    }
    trail.reverse();

    let mut walk = Walk::new();
    for pair in trail.windows(2) {
        let (from, _) = pair[0];
        let (to, via) = pair[1];
        if let Some(length) = via.and_then(|id| graph.edge(id)).map(|e| e.length) {
            walk.push(Traversal::service(from, to, length));
        }
    }

    if walk.len() != graph.edge_count() {
        return Err(SolveError::NotEulerian {
            reason: format!(
                "edges span more than one component ({} of {} reachable from {start})",
                walk.len(),
                graph.edge_count()
            ),
        });
    }
    Ok(walk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    fn bowtie() -> RoadGraph {
        // Two triangles sharing vertex 3
        RoadGraph::from_edges(
            false,
            vec![
                Edge::new(1, 2, 1.0),
                Edge::new(2, 3, 1.0),
                Edge::new(3, 1, 1.0),
                Edge::new(3, 4, 1.0),
                Edge::new(4, 5, 1.0),
                Edge::new(5, 3, 1.0),
            ],
        )
    }

    #[test]
    fn test_circuit_bowtie() {
        let g = bowtie();
        let walk = eulerian_circuit(&g).expect("all even");
        assert_eq!(walk.len(), 6);
        assert!(walk.is_closed());
        assert_eq!(walk.vertices().first(), Some(&1));
    }

    #[test]
    fn test_circuit_with_parallel_edges_and_loop() {
        let g = RoadGraph::from_edges(
            false,
            vec![Edge::new(1, 2, 5.0), Edge::new(2, 1, 7.0), Edge::new(2, 2, 3.0)],
        );
        let walk = eulerian_circuit(&g).expect("all even");
        assert_eq!(walk.len(), 3);
        assert!(walk.is_closed());
        assert!((walk.total_length() - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_circuit_rejects_odd_vertex() {
        let g = RoadGraph::from_edges(false, vec![Edge::new(1, 2, 1.0)]);
        assert!(matches!(
            eulerian_circuit(&g),
            Err(SolveError::NotEulerian { .. })
        ));
    }

    #[test]
    fn test_circuit_rejects_disconnected_edges() {
        let g = RoadGraph::from_edges(
            false,
            vec![
                Edge::new(1, 2, 1.0),
                Edge::new(2, 1, 1.0),
                Edge::new(5, 6, 1.0),
                Edge::new(6, 5, 1.0),
            ],
        );
        let err = eulerian_circuit(&g).expect_err("two components");
        assert!(err.to_string().contains("more than one component"));
    }

    #[test]
    fn test_circuit_empty_graph() {
        let mut g = RoadGraph::new(false);
        g.add_node(3);
        assert!(eulerian_circuit(&g).expect("trivially Eulerian").is_empty());
    }

    #[test]
    fn test_directed_circuit() {
        let g = RoadGraph::from_edges(
            true,
            vec![Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0), Edge::new(3, 1, 1.0)],
        );
        let walk = eulerian_circuit(&g).expect("balanced");
        assert_eq!(walk.arcs().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn test_path_between_odd_vertices() {
        // 1-2-3 plus triangle 3-4-5
        let g = RoadGraph::from_edges(
            false,
            vec![
                Edge::new(3, 4, 1.0),
                Edge::new(4, 5, 1.0),
                Edge::new(5, 3, 1.0),
                Edge::new(1, 2, 1.0),
                Edge::new(2, 3, 1.0),
            ],
        );
        let walk = eulerian_path(&g).expect("two odd vertices");
        assert_eq!(walk.len(), 5);
        assert!(walk.is_continuous());
        let vertices = walk.vertices();
        assert_eq!(vertices.first(), Some(&1));
        assert_eq!(vertices.last(), Some(&3));
    }

    #[test]
    fn test_path_on_even_graph_is_circuit() {
        let walk = eulerian_path(&bowtie()).expect("all even");
        assert!(walk.is_closed());
        assert_eq!(walk.len(), 6);
    }

    #[test]
    fn test_directed_path() {
        let g = RoadGraph::from_edges(true, vec![Edge::new(2, 3, 1.0), Edge::new(1, 2, 1.0)]);
        let walk = eulerian_path(&g).expect("one surplus pair");
        assert_eq!(walk.arcs().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_path_rejects_four_odd_vertices() {
        let g = RoadGraph::from_edges(false, vec![Edge::new(1, 2, 1.0), Edge::new(3, 4, 1.0)]);
        assert!(matches!(
            eulerian_path(&g),
            Err(SolveError::NotEulerian { .. })
        ));
    }
}
