//! Road network multigraph.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Vertex identifier (street intersections use OSM-style integer IDs).
pub type NodeId = u64;

/// Index of an edge within its graph's edge list.
pub type EdgeId = usize;

/// A street segment between two vertices.
///
/// Parallel edges between the same pair of vertices are allowed; they are
/// told apart only by their attributes.
///
/// # Examples
///
/// ```
/// use u_postman::models::Edge;
///
/// let e = Edge::new(1, 2, 120.0).with_attribute("name", "Rue Laurier");
/// assert_eq!(e.other(1), 2);
/// assert_eq!(e.attributes["name"], "Rue Laurier");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Tail vertex (start of the segment for directed graphs).
    pub source: NodeId,
    /// Head vertex.
    pub target: NodeId,
    /// Segment length in meters.
    pub length: f64,
    /// Free-form descriptive attributes (street name, highway class, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Edge {
    /// Creates an edge without attributes.
    pub fn new(source: NodeId, target: NodeId, length: f64) -> Self {
        Self {
            source,
            target,
            length,
            attributes: BTreeMap::new(),
        }
    }

    /// Adds a descriptive attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the endpoint opposite to `node`.
    ///
    /// For a self-loop this is `node` itself.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    /// Returns `true` if this is a self-loop.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A road network multigraph, directed or undirected.
///
/// Vertices are kept in ascending order so that every traversal of the
/// graph is deterministic. For undirected graphs each edge is listed in the
/// incidence of both endpoints (twice for a self-loop, which therefore adds
/// 2 to the degree). For directed graphs outgoing and incoming incidence
/// are kept separately and the degree is their sum.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph};
///
/// let g = RoadGraph::from_edges(false, vec![
///     Edge::new(1, 2, 100.0),
///     Edge::new(2, 3, 100.0),
/// ]);
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.degree(2), 2);
/// assert_eq!(g.odd_vertices(), vec![1, 3]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "GraphData", into = "GraphData")]
pub struct RoadGraph {
    directed: bool,
    nodes: BTreeSet<NodeId>,
    edges: Vec<Edge>,
    outgoing: BTreeMap<NodeId, Vec<EdgeId>>,
    incoming: BTreeMap<NodeId, Vec<EdgeId>>,
}

impl RoadGraph {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Builds a graph from an edge list; endpoints are added as vertices.
    pub fn from_edges(directed: bool, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new(directed);
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Adds a vertex (no-op if it already exists).
    pub fn add_node(&mut self, node: NodeId) {
        self.nodes.insert(node);
    }

    /// Adds an edge, inserting missing endpoints, and returns its ID.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.edges.len();
        self.nodes.insert(edge.source);
        self.nodes.insert(edge.target);
        self.outgoing.entry(edge.source).or_default().push(id);
        if self.directed {
            self.incoming.entry(edge.target).or_default().push(id);
        } else {
            self.outgoing.entry(edge.target).or_default().push(id);
        }
        self.edges.push(edge);
        id
    }

    /// Returns `true` for a directed graph.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Vertices in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns `true` if `node` is a vertex of this graph.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// All edges, indexed by [`EdgeId`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge with the given ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Edges that can be traversed starting at `node`: outgoing edges for
    /// directed graphs, all incident edges otherwise.
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        self.outgoing.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertex reached by traversing edge `id` from `from`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn traverse(&self, id: EdgeId, from: NodeId) -> NodeId {
        let edge = &self.edges[id];
        if self.directed {
            edge.target
        } else {
            edge.other(from)
        }
    }

    /// Number of incident edge ends.
    pub fn degree(&self, node: NodeId) -> usize {
        if self.directed {
            self.out_degree(node) + self.in_degree(node)
        } else {
            self.out_edges(node).len()
        }
    }

    /// Out-degree (equal to the degree for undirected graphs).
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_edges(node).len()
    }

    /// In-degree (equal to the degree for undirected graphs).
    pub fn in_degree(&self, node: NodeId) -> usize {
        if self.directed {
            self.incoming.get(&node).map_or(0, Vec::len)
        } else {
            self.out_edges(node).len()
        }
    }

    /// Vertices with odd degree, ascending.
    pub fn odd_vertices(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|&node| self.degree(node) % 2 == 1)
            .collect()
    }

    /// Neighbors reachable in one step, paired with the connecting edge.
    ///
    /// Parallel edges yield the same neighbor once per edge.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.out_edges(node)
            .iter()
            .map(move |&id| (self.traverse(id, node), &self.edges[id]))
    }

    /// Edges that lead from `from` to `to` (either orientation when undirected).
    pub fn edges_between(
        &self,
        from: NodeId,
        to: NodeId,
    ) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.out_edges(from)
            .iter()
            .filter(move |&&id| self.traverse(id, from) == to)
            .map(move |&id| (id, &self.edges[id]))
    }

    /// Returns `true` if an edge leads from `from` to `to`.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges_between(from, to).next().is_some()
    }

    /// Shortest of the parallel edges from `from` to `to`; the lowest edge ID
    /// wins among equal lengths.
    pub fn cheapest_edge(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.edges_between(from, to)
            .min_by(|a, b| a.1.length.partial_cmp(&b.1.length).unwrap_or(Ordering::Equal))
            .map(|(_, edge)| edge)
    }

    /// Sum of all edge lengths in meters.
    pub fn total_length(&self) -> f64 {
        self.edges.iter().map(|e| e.length).sum()
    }

    /// Returns a new graph restricted to the vertices accepted by `keep`,
    /// dropping every edge with a removed endpoint.
    pub fn retain_nodes(&self, mut keep: impl FnMut(NodeId) -> bool) -> Self {
        let kept: BTreeSet<NodeId> = self.nodes().filter(|&n| keep(n)).collect();
        let mut graph = Self::new(self.directed);
        for &node in &kept {
            graph.add_node(node);
        }
        for edge in &self.edges {
            if kept.contains(&edge.source) && kept.contains(&edge.target) {
                graph.add_edge(edge.clone());
            }
        }
        graph
    }

    /// Returns an undirected copy of this graph.
    ///
    /// A directed edge `u→v` and a reciprocal `v→u` collapse into a single
    /// undirected edge (the k-th `u→v` pairs with the k-th `v→u`), so a
    /// two-way street is one segment to cover. Unpaired one-way edges and
    /// self-loops are kept one for one. Undirected graphs are cloned.
    pub fn to_undirected(&self) -> Self {
        if !self.directed {
            return self.clone();
        }

        let mut graph = Self::new(false);
        for node in self.nodes() {
            graph.add_node(node);
        }

        let mut unpaired: BTreeMap<(NodeId, NodeId), usize> = BTreeMap::new();
        for edge in &self.edges {
            if !edge.is_loop() {
                if let Some(count) = unpaired.get_mut(&(edge.target, edge.source)) {
                    if *count > 0 {
                        *count -= 1;
                        continue;
                    }
                }
                *unpaired.entry((edge.source, edge.target)).or_insert(0) += 1;
            }
            graph.add_edge(edge.clone());
        }
        graph
    }
}

/// Serialized form: the incidence lists are rebuilt on load.
#[derive(Serialize, Deserialize)]
struct GraphData {
    directed: bool,
    #[serde(default)]
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl From<GraphData> for RoadGraph {
    fn from(data: GraphData) -> Self {
        let mut graph = RoadGraph::new(data.directed);
        for node in data.nodes {
            graph.add_node(node);
        }
        for edge in data.edges {
            graph.add_edge(edge);
        }
        graph
    }
}

impl From<RoadGraph> for GraphData {
    fn from(graph: RoadGraph) -> Self {
        GraphData {
            directed: graph.directed,
            nodes: graph.nodes.into_iter().collect(),
            edges: graph.edges,
        }
    }
}
