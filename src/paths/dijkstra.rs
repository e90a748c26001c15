//! Length-weighted Dijkstra search over a road graph.
//!
//! # Algorithm
//!
//! Standard label-setting search with a binary heap. Each vertex is settled
//! once; parallel edges are all relaxed, so the effective weight between two
//! neighbors is the minimum `length` among their parallel edges. The search
//! stops as soon as a goal vertex other than the source is settled.
//!
//! Heap entries are ordered by distance, then by vertex ID, so equal-length
//! alternatives always resolve the same way.
//!
//! # Complexity
//!
//! O(E log V) per search in the worst case; bounded searches usually stop
//! much earlier.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap, HashMap, HashSet};

use crate::models::{NodeId, RoadGraph};

/// A shortest path between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Vertices from source to target inclusive.
    pub nodes: Vec<NodeId>,
    /// Total length in meters.
    pub length: f64,
}

impl ShortestPath {
    /// Last vertex of the path.
    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Consecutive vertex pairs along the path.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    node: NodeId,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Shortest path from `source` to `target`, following edge direction in
/// directed graphs.
///
/// Returns `None` if `target` is unreachable. A path from a vertex to itself
/// is the single-vertex path of length 0.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph};
/// use u_postman::paths::shortest_path;
///
/// let g = RoadGraph::from_edges(true, vec![
///     Edge::new(1, 2, 10.0),
///     Edge::new(2, 3, 10.0),
///     Edge::new(1, 3, 50.0),
/// ]);
/// let path = shortest_path(&g, 1, 3).unwrap();
/// assert_eq!(path.nodes, vec![1, 2, 3]);
/// assert!(shortest_path(&g, 3, 1).is_none());
/// ```
pub fn shortest_path(graph: &RoadGraph, source: NodeId, target: NodeId) -> Option<ShortestPath> {
    if source == target {
        return Some(ShortestPath {
            nodes: vec![source],
            length: 0.0,
        });
    }
    search(graph, source, |node| node == target)
}

/// Nearest vertex of `targets` other than `source`, with the path to it.
///
/// Returns `None` once the reachable part of the graph is exhausted without
/// settling any target.
pub fn nearest_in(
    graph: &RoadGraph,
    source: NodeId,
    targets: &BTreeSet<NodeId>,
) -> Option<ShortestPath> {
    search(graph, source, |node| targets.contains(&node))
}

fn search<F>(graph: &RoadGraph, source: NodeId, is_goal: F) -> Option<ShortestPath>
where
    F: Fn(NodeId) -> bool,
{
    let mut distances: HashMap<NodeId, f64> = HashMap::new();
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();
    let mut heap = BinaryHeap::new();

    distances.insert(source, 0.0);
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if !settled.insert(node) {
            continue;
        }

        if node != source && is_goal(node) {
            return Some(ShortestPath {
                nodes: reconstruct(&previous, node),
                length: cost,
            });
        }

        for (neighbor, edge) in graph.neighbors(node) {
            if settled.contains(&neighbor) {
                continue;
            }
            let candidate = cost + edge.length;
            let improves = distances
                .get(&neighbor)
                .map_or(true, |&known| candidate < known);
            if improves {
                distances.insert(neighbor, candidate);
                previous.insert(neighbor, node);
                heap.push(State {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    None
}

fn reconstruct(previous: &HashMap<NodeId, NodeId>, target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&prev) = previous.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
