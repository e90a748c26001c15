//! # u-postman
//!
//! Arc routing for road networks: a Chinese Postman heuristic that covers
//! every street at least once, plus fleet sizing for the resulting route.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (RoadGraph, Walk, Matching, VehicleType, DeploymentPlan)
//! - [`paths`] — Shortest paths and strongly connected components
//! - [`postman`] — Graph cleaning, odd-vertex matching, augmentation, Euler walks
//! - [`fleet`] — Minimum-cost vehicle deployment and drone estimates
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_postman::fleet::FleetOptimizer;
//! use u_postman::models::{Edge, RoadGraph};
//! use u_postman::postman::{ChinesePostman, SolverConfig};
//!
//! let graph = RoadGraph::from_edges(false, vec![
//!     Edge::new(1, 2, 100.0),
//!     Edge::new(2, 3, 100.0),
//!     Edge::new(3, 1, 100.0),
//!     Edge::new(3, 4, 100.0),
//! ]);
//! let solution = ChinesePostman::new(SolverConfig::default()).solve(&graph).unwrap();
//! assert!(solution.walk().is_closed());
//!
//! let plan = FleetOptimizer::default()
//!     .optimize(solution.route_length(), 8.0)
//!     .unwrap();
//! assert!(plan.hours <= 8.0);
//! ```

pub mod error;
pub mod fleet;
pub mod models;
pub mod paths;
pub mod postman;
