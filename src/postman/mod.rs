//! Chinese Postman (route inspection) heuristic.
//!
//! - [`clean_graph`] — Drop isolated vertices and minor components
//! - [`match_odd_vertices`] — Greedy nearest-odd-vertex pairing, O(k · E log V)
//! - [`augment`] — Duplicate matched paths so every vertex is even
//! - [`eulerian_circuit`] / [`eulerian_path`] — Hierholzer, O(V + E)
//! - [`build_walk`] / [`reconcile`] — Walk construction, with one-way
//!   reconciliation for directed street networks
//! - [`ChinesePostman`] — The whole pipeline

mod augment;
mod circuit;
mod cleaner;
mod euler;
mod matcher;
mod solver;

pub use augment::{augment, Augmentation};
pub use circuit::{build_walk, reconcile, TraversalMode};
pub use cleaner::{clean_graph, CleaningReport};
pub use euler::{eulerian_circuit, eulerian_path};
pub use matcher::{match_odd_vertices, MatchOrder};
pub use solver::{ChinesePostman, PostmanSolution, SolveDiagnostics, SolverConfig};
