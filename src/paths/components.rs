//! Strongly connected components (iterative Tarjan).
//!
//! Undirected edges are traversable both ways, so on an undirected graph the
//! result is the set of connected components.

use std::collections::HashMap;

use crate::models::{NodeId, RoadGraph};

const UNVISITED: usize = usize::MAX;

/// Partitions the vertices into strongly connected components.
///
/// Components are listed in completion order; each one is sorted by
/// vertex ID. Isolated vertices form singleton components.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, RoadGraph};
/// use u_postman::paths::strongly_connected;
///
/// let g = RoadGraph::from_edges(true, vec![
///     Edge::new(1, 2, 1.0),
///     Edge::new(2, 1, 1.0),
///     Edge::new(2, 3, 1.0),
/// ]);
/// let mut sccs = strongly_connected(&g);
/// sccs.sort();
/// assert_eq!(sccs, vec![vec![1, 2], vec![3]]);
/// ```
pub fn strongly_connected(graph: &RoadGraph) -> Vec<Vec<NodeId>> {
    let ids: Vec<NodeId> = graph.nodes().collect();
    let position: HashMap<NodeId, usize> = ids.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    let n = ids.len();

    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut components = Vec::new();
    let mut next_index = 0;

    for root in 0..n {
        if index[root] != UNVISITED {
            continue;
        }

        // (vertex, next incidence slot to examine)
        let mut frames: Vec<(usize, usize)> = vec![(root, 0)];
        index[root] = next_index;
        lowlink[root] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack[root] = true;

        while let Some(&(v, slot)) = frames.last() {
            let incident = graph.out_edges(ids[v]);
            if slot < incident.len() {
                if let Some(frame) = frames.last_mut() {
                    frame.1 += 1;
                }
                let w = position[&graph.traverse(incident[slot], ids[v])];
                if index[w] == UNVISITED {
                    index[w] = next_index;
                    lowlink[w] = next_index;
                    next_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    frames.push((w, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                lowlink[parent] = lowlink[parent].min(lowlink[v]);
            }

            if lowlink[v] == index[v] {
                let mut component = Vec::new();
                while let Some(w) = stack.pop() {
                    on_stack[w] = false;
                    component.push(ids[w]);
                    if w == v {
                        break;
                    }
                }
                component.sort_unstable();
                components.push(component);
            }
        }
    }

    components
}

/// The component with the most vertices; the first one found wins ties.
pub fn largest_component(components: &[Vec<NodeId>]) -> Option<&[NodeId]> {
    let mut best: Option<&Vec<NodeId>> = None;
    for component in components {
        if best.map_or(true, |b| component.len() > b.len()) {
            best = Some(component);
        }
    }
    best.map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    fn sorted(mut sccs: Vec<Vec<NodeId>>) -> Vec<Vec<NodeId>> {
        sccs.sort();
        sccs
    }

    #[test]
    fn test_directed_cycle_is_one_component() {
        let g = RoadGraph::from_edges(
            true,
            vec![Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0), Edge::new(3, 1, 1.0)],
        );
        assert_eq!(strongly_connected(&g), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_directed_chain_splits() {
        let g = RoadGraph::from_edges(true, vec![Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0)]);
        assert_eq!(
            sorted(strongly_connected(&g)),
            vec![vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn test_two_cycles_joined_one_way() {
        // {1,2} → {3,4}
        let g = RoadGraph::from_edges(
            true,
            vec![
                Edge::new(1, 2, 1.0),
                Edge::new(2, 1, 1.0),
                Edge::new(2, 3, 1.0),
                Edge::new(3, 4, 1.0),
                Edge::new(4, 3, 1.0),
            ],
        );
        assert_eq!(
            sorted(strongly_connected(&g)),
            vec![vec![1, 2], vec![3, 4]]
        );
    }

    #[test]
    fn test_undirected_connected_components() {
        let mut g = RoadGraph::from_edges(
            false,
            vec![Edge::new(1, 2, 1.0), Edge::new(3, 2, 1.0), Edge::new(7, 8, 1.0)],
        );
        g.add_node(10);
        assert_eq!(
            sorted(strongly_connected(&g)),
            vec![vec![1, 2, 3], vec![7, 8], vec![10]]
        );
    }

    #[test]
    fn test_largest_component_first_wins_ties() {
        let comps = vec![vec![5], vec![1, 2], vec![3, 4]];
        assert_eq!(largest_component(&comps), Some(&[1, 2][..]));
        assert_eq!(largest_component(&[]), None);
    }
}
