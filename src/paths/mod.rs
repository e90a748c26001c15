//! Graph search primitives.
//!
//! - [`shortest_path`] / [`nearest_in`] — Length-weighted Dijkstra, O(E log V)
//! - [`strongly_connected`] — Tarjan's strongly connected components, O(V + E)

mod components;
mod dijkstra;

pub use components::{largest_component, strongly_connected};
pub use dijkstra::{nearest_in, shortest_path, ShortestPath};
