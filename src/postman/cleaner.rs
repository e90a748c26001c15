//! Graph cleaning before Eulerian analysis.
//!
//! Eulerian traversals need a single connected component. Isolated vertices
//! are removed and, when the graph splits into several strongly connected
//! components, only the largest one (by vertex count) is kept. Dropping the
//! minor components gives up completeness for solvability.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{NodeId, RoadGraph};
use crate::paths::{largest_component, strongly_connected};

/// What [`clean_graph`] removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningReport {
    /// Vertices removed because they had no incident edge.
    pub isolated_removed: usize,
    /// Strongly connected components found after removing isolated vertices.
    pub components: usize,
    /// Vertices removed with the minor components.
    pub component_nodes_removed: usize,
}

/// Returns a copy of `graph` without isolated vertices, restricted to its
/// largest strongly connected component.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph};
/// use u_postman::postman::clean_graph;
///
/// let mut g = RoadGraph::from_edges(false, vec![
///     Edge::new(1, 2, 10.0),
///     Edge::new(2, 3, 10.0),
///     Edge::new(8, 9, 10.0),
/// ]);
/// g.add_node(42);
/// let (cleaned, report) = clean_graph(&g);
/// assert_eq!(cleaned.nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(report.isolated_removed, 1);
/// assert_eq!(report.component_nodes_removed, 2);
/// ```
pub fn clean_graph(graph: &RoadGraph) -> (RoadGraph, CleaningReport) {
    let mut report = CleaningReport::default();
    if graph.is_empty() {
        return (graph.clone(), report);
    }

    let connected = graph.retain_nodes(|node| graph.degree(node) > 0);
    report.isolated_removed = graph.node_count() - connected.node_count();

    let components = strongly_connected(&connected);
    report.components = components.len();
    if components.len() <= 1 {
        debug!(
            isolated_removed = report.isolated_removed,
            "graph is a single component"
        );
        return (connected, report);
    }

    let keep: BTreeSet<NodeId> = largest_component(&components)
        .map(|c| c.iter().copied().collect())
        .unwrap_or_default();
    let cleaned = connected.retain_nodes(|node| keep.contains(&node));
    report.component_nodes_removed = connected.node_count() - cleaned.node_count();

    debug!(
        isolated_removed = report.isolated_removed,
        components = report.components,
        removed = report.component_nodes_removed,
        "kept largest strongly connected component"
    );
    (cleaned, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    #[test]
    fn test_clean_empty() {
        let (cleaned, report) = clean_graph(&RoadGraph::new(true));
        assert!(cleaned.is_empty());
        assert_eq!(report, CleaningReport::default());
    }

    #[test]
    fn test_clean_single_component_keeps_everything() {
        let g = RoadGraph::from_edges(
            true,
            vec![Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0), Edge::new(3, 1, 1.0)],
        );
        let (cleaned, report) = clean_graph(&g);
        assert_eq!(cleaned.node_count(), 3);
        assert_eq!(cleaned.edge_count(), 3);
        assert_eq!(report.components, 1);
        assert_eq!(report.component_nodes_removed, 0);
    }

    #[test]
    fn test_clean_directed_drops_one_way_tail() {
        // Cycle 1→2→3→1 with a dead-end spur 3→4
        let mut g = RoadGraph::from_edges(
            true,
            vec![
                Edge::new(1, 2, 1.0),
                Edge::new(2, 3, 1.0),
                Edge::new(3, 1, 1.0),
                Edge::new(3, 4, 1.0),
            ],
        );
        g.add_node(5);
        let (cleaned, report) = clean_graph(&g);
        assert_eq!(cleaned.nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(cleaned.edge_count(), 3);
        assert_eq!(report.isolated_removed, 1);
        assert_eq!(report.components, 2);
        assert_eq!(report.component_nodes_removed, 1);
        assert!(cleaned.is_directed());
    }
}
