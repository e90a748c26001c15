//! Chinese Postman solve pipeline.
//!
//! Cleaning → undirected view → odd-vertex matching → augmentation → walk.
//! Each stage produces a new graph; the cleaned graph is kept untouched as
//! the direction-sensitive reference for reconciliation.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SolveError;
use crate::models::{Matching, RoadGraph, Walk};

use super::augment::augment;
use super::circuit::{build_walk, TraversalMode};
use super::cleaner::clean_graph;
use super::matcher::{match_odd_vertices, MatchOrder};

/// Solver settings.
///
/// # Examples
///
/// ```
/// use u_postman::postman::{MatchOrder, SolverConfig, TraversalMode};
///
/// let config = SolverConfig::default()
///     .with_mode(TraversalMode::Directed)
///     .with_match_order(MatchOrder::Shuffled { seed: 42 });
/// assert_eq!(config.mode(), TraversalMode::Directed);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    mode: TraversalMode,
    #[serde(default)]
    match_order: MatchOrder,
}

impl SolverConfig {
    /// Sets the traversal mode.
    pub fn with_mode(mut self, mode: TraversalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the odd-vertex processing order.
    pub fn with_match_order(mut self, order: MatchOrder) -> Self {
        self.match_order = order;
        self
    }

    /// Traversal mode.
    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    /// Odd-vertex processing order.
    pub fn match_order(&self) -> MatchOrder {
        self.match_order
    }
}

/// Counters collected while solving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveDiagnostics {
    /// Vertices in the input graph.
    pub input_nodes: usize,
    /// Edges in the input graph.
    pub input_edges: usize,
    /// Isolated vertices removed by cleaning.
    pub isolated_removed: usize,
    /// Vertices dropped with minor strongly connected components.
    pub component_nodes_removed: usize,
    /// Vertices after cleaning.
    pub cleaned_nodes: usize,
    /// Edges after cleaning.
    pub cleaned_edges: usize,
    /// Edges in the undirected working graph.
    pub undirected_edges: usize,
    /// Odd-degree vertices before augmentation.
    pub odd_vertices: usize,
    /// Pairs formed by the matcher.
    pub pairs: usize,
    /// Edges duplicated by augmentation.
    pub edges_added: usize,
    /// Odd-degree vertices after augmentation (0 on success).
    pub odd_vertices_remaining: usize,
    /// Deadhead traversals in the final walk.
    pub deadheads: usize,
}

/// Output of [`ChinesePostman::solve`].
#[derive(Debug, Clone)]
pub struct PostmanSolution {
    augmented: RoadGraph,
    matching: Matching,
    walk: Walk,
    duration: Duration,
    diagnostics: SolveDiagnostics,
}

impl PostmanSolution {
    /// The augmented (all-even) undirected multigraph.
    pub fn augmented(&self) -> &RoadGraph {
        &self.augmented
    }

    /// Odd-vertex pairs used for augmentation.
    pub fn matching(&self) -> &Matching {
        &self.matching
    }

    /// The ordered walk.
    pub fn walk(&self) -> &Walk {
        &self.walk
    }

    /// Route length in meters: the total length of the augmented graph.
    /// This is the figure fleet sizing is based on.
    pub fn route_length(&self) -> f64 {
        self.augmented.total_length()
    }

    /// Length actually driven along the walk, deadheads included.
    pub fn walk_length(&self) -> f64 {
        self.walk.total_length()
    }

    /// Wall-clock time spent solving.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Stage counters.
    pub fn diagnostics(&self) -> &SolveDiagnostics {
        &self.diagnostics
    }
}

/// Chinese Postman heuristic solver.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph};
/// use u_postman::postman::{ChinesePostman, SolverConfig};
///
/// let g = RoadGraph::from_edges(false, vec![
///     Edge::new(1, 2, 100.0),
///     Edge::new(2, 3, 100.0),
///     Edge::new(3, 4, 100.0),
///     Edge::new(4, 1, 100.0),
///     Edge::new(1, 5, 50.0),
/// ]);
/// let solution = ChinesePostman::new(SolverConfig::default()).solve(&g).unwrap();
/// assert_eq!(solution.walk().len(), 6);
/// assert!(solution.walk().is_closed());
/// assert!((solution.route_length() - 500.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChinesePostman {
    config: SolverConfig,
}

impl ChinesePostman {
    /// Creates a solver with the given settings.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solver settings.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes a walk covering every edge of the cleaned `graph`.
    ///
    /// # Errors
    ///
    /// Any [`SolveError`] raised by matching, augmentation or walk
    /// construction; the solve stops at the first one.
    pub fn solve(&self, graph: &RoadGraph) -> Result<PostmanSolution, SolveError> {
        let started = Instant::now();
        let mut diagnostics = SolveDiagnostics {
            input_nodes: graph.node_count(),
            input_edges: graph.edge_count(),
            ..SolveDiagnostics::default()
        };

        let (original, cleaning) = clean_graph(graph);
        diagnostics.isolated_removed = cleaning.isolated_removed;
        diagnostics.component_nodes_removed = cleaning.component_nodes_removed;
        diagnostics.cleaned_nodes = original.node_count();
        diagnostics.cleaned_edges = original.edge_count();

        let working = original.to_undirected();
        diagnostics.undirected_edges = working.edge_count();
        debug!(
            nodes = working.node_count(),
            edges = working.edge_count(),
            "undirected working graph"
        );

        let odd = working.odd_vertices();
        diagnostics.odd_vertices = odd.len();
        let matching = match_odd_vertices(&working, &odd, self.config.match_order)?;
        diagnostics.pairs = matching.len();

        let augmentation = augment(&working, &matching)?;
        diagnostics.edges_added = augmentation.edges_added;
        diagnostics.odd_vertices_remaining = augmentation.graph.odd_vertices().len();

        let walk = build_walk(&original, &augmentation.graph, self.config.mode)?;
        diagnostics.deadheads = walk.deadhead_count();

        let duration = started.elapsed();
        info!(
            mode = ?self.config.mode,
            traversals = walk.len(),
            deadheads = diagnostics.deadheads,
            route_length = augmentation.graph.total_length(),
            elapsed_ms = duration.as_millis() as u64,
            "postman walk computed"
        );

        Ok(PostmanSolution {
            augmented: augmentation.graph,
            matching,
            walk,
            duration,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, TraversalKind};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    /// Every augmented edge is driven at least once, in either orientation.
    fn uncovered_edges(solution: &PostmanSolution) -> Vec<(u64, u64)> {
        let driven: BTreeSet<(u64, u64)> = solution.walk().arcs().collect();
        solution
            .augmented()
            .edges()
            .iter()
            .map(|e| (e.source, e.target))
            .filter(|&(a, b)| !driven.contains(&(a, b)) && !driven.contains(&(b, a)))
            .collect()
    }

    fn square_with_tail() -> RoadGraph {
        RoadGraph::from_edges(
            false,
            vec![
                Edge::new(1, 2, 100.0),
                Edge::new(2, 3, 100.0),
                Edge::new(3, 4, 100.0),
                Edge::new(4, 1, 100.0),
                Edge::new(1, 5, 50.0),
            ],
        )
    }

    #[test]
    fn test_square_with_pendant_edge() {
        let g = square_with_tail();
        let solution = ChinesePostman::default().solve(&g).expect("solvable");

        let pairs = solution.matching().pairs();
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].first, pairs[0].second), (1, 5));
        assert_eq!(pairs[0].path, vec![1, 5]);

        // 5 original edges + the duplicated pendant
        assert_eq!(solution.augmented().edge_count(), 6);
        assert!(solution.augmented().odd_vertices().is_empty());

        let walk = solution.walk();
        assert_eq!(walk.len(), 6);
        assert!(walk.is_closed());
        assert_eq!(walk.deadhead_count(), 0);
        let distinct: BTreeSet<(u64, u64)> = walk
            .arcs()
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        assert_eq!(distinct.len(), 5);
        assert_eq!(walk.arcs().filter(|&(a, b)| a.min(b) == 1 && a.max(b) == 5).count(), 2);

        assert!((solution.route_length() - 500.0).abs() < 1e-10);
        assert!((solution.walk_length() - 500.0).abs() < 1e-10);

        let d = solution.diagnostics();
        assert_eq!(d.odd_vertices, 2);
        assert_eq!(d.pairs, 1);
        assert_eq!(d.edges_added, 1);
        assert_eq!(d.odd_vertices_remaining, 0);
    }

    #[test]
    fn test_solve_already_eulerian() {
        let g = RoadGraph::from_edges(
            false,
            vec![Edge::new(1, 2, 5.0), Edge::new(2, 3, 5.0), Edge::new(3, 1, 5.0)],
        );
        let solution = ChinesePostman::default().solve(&g).expect("solvable");
        assert!(solution.matching().is_empty());
        assert_eq!(solution.diagnostics().edges_added, 0);
        assert_eq!(solution.walk().len(), 3);
    }

    #[test]
    fn test_solve_drops_minor_component() {
        let mut g = square_with_tail();
        g.add_edge(Edge::new(20, 21, 10.0));
        g.add_node(99);
        let solution = ChinesePostman::default().solve(&g).expect("solvable");
        let d = solution.diagnostics();
        assert_eq!(d.input_nodes, 8);
        assert_eq!(d.isolated_removed, 1);
        assert_eq!(d.component_nodes_removed, 2);
        assert_eq!(d.cleaned_nodes, 5);
        assert_eq!(d.cleaned_edges, 5);
        assert_eq!(solution.walk().len(), 6);
    }

    #[test]
    fn test_solve_directed_street_network() {
        // Two-way block 1-2-3-4 with a one-way shortcut 1 → 3
        let g = RoadGraph::from_edges(
            true,
            vec![
                Edge::new(1, 2, 100.0),
                Edge::new(2, 1, 100.0),
                Edge::new(2, 3, 100.0),
                Edge::new(3, 2, 100.0),
                Edge::new(3, 4, 100.0),
                Edge::new(4, 3, 100.0),
                Edge::new(4, 1, 100.0),
                Edge::new(1, 4, 100.0),
                Edge::new(1, 3, 140.0),
            ],
        );
        let config = SolverConfig::default().with_mode(TraversalMode::Directed);
        let solution = ChinesePostman::new(config).solve(&g).expect("solvable");

        let d = solution.diagnostics();
        // Reciprocal pairs collapse: 4 block edges + the shortcut
        assert_eq!(d.undirected_edges, 5);
        assert_eq!(d.odd_vertices, 2);
        assert_eq!(d.odd_vertices_remaining, 0);

        let walk = solution.walk();
        assert!(walk.is_continuous());
        assert!(walk.len() >= solution.augmented().edge_count());
        for (a, b) in walk.arcs() {
            assert!(g.has_edge(a, b), "{a} -> {b} is not a legal move");
        }
        assert!(walk
            .traversals()
            .iter()
            .any(|t| (t.source, t.target) == (1, 3) && t.kind == TraversalKind::Service));
        assert_eq!(d.deadheads, walk.deadhead_count());
        assert!(uncovered_edges(&solution).is_empty());
    }

    #[test]
    fn test_solve_empty_graph() {
        let solution = ChinesePostman::default()
            .solve(&RoadGraph::new(false))
            .expect("nothing to cover");
        assert!(solution.walk().is_empty());
        assert_eq!(solution.route_length(), 0.0);
    }

    #[test]
    fn test_shuffled_order_still_covers_every_edge() {
        let mut g = square_with_tail();
        g.add_edge(Edge::new(3, 6, 30.0));
        g.add_edge(Edge::new(2, 7, 70.0));
        let config = SolverConfig::default().with_match_order(MatchOrder::Shuffled { seed: 3 });
        let solution = ChinesePostman::new(config).solve(&g).expect("solvable");
        // 1, 2, 3 gain a third edge; 5, 6, 7 are dead ends
        assert_eq!(solution.diagnostics().odd_vertices, 6);
        assert_eq!(solution.matching().len(), 3);
        assert_eq!(solution.walk().len(), solution.augmented().edge_count());
        assert!(solution.walk().is_closed());
        assert!(solution.route_length() >= g.total_length());
    }

    fn one_way_network() -> impl Strategy<Value = RoadGraph> {
        (3u64..10).prop_flat_map(|n| {
            let ring = prop::collection::vec(1u32..200, n as usize);
            let extra = prop::collection::vec((0..n, 0..n, 1u32..200, any::<bool>()), 0..12);
            (ring, extra).prop_map(move |(ring, extra)| {
                // One-way ring 0 → 1 → … → n-1 → 0 keeps it strongly connected
                let mut g = RoadGraph::new(true);
                for (i, len) in ring.into_iter().enumerate() {
                    let i = i as u64;
                    g.add_edge(Edge::new(i, (i + 1) % n, f64::from(len)));
                }
                for (u, v, len, two_way) in extra {
                    g.add_edge(Edge::new(u, v, f64::from(len)));
                    if two_way {
                        g.add_edge(Edge::new(v, u, f64::from(len)));
                    }
                }
                g
            })
        })
    }

    proptest! {
        #[test]
        fn prop_directed_walk_covers_every_augmented_edge(g in one_way_network()) {
            let config = SolverConfig::default().with_mode(TraversalMode::Directed);
            let solution = ChinesePostman::new(config).solve(&g).unwrap();
            let walk = solution.walk();

            prop_assert!(walk.is_continuous());
            prop_assert!(walk.len() >= solution.augmented().edge_count());
            for (a, b) in walk.arcs() {
                prop_assert!(g.has_edge(a, b), "{} -> {} is not a legal move", a, b);
            }
            prop_assert_eq!(uncovered_edges(&solution), Vec::<(u64, u64)>::new());
        }
    }
}
