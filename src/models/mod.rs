//! Domain model types for arc routing.
//!
//! Provides the road network multigraph, the odd-vertex matching, the walk
//! produced by the postman solver, and the vehicle and deployment types
//! used for fleet sizing.

mod graph;
mod matching;
mod plan;
mod vehicle;
mod walk;

pub use graph::{Edge, EdgeId, NodeId, RoadGraph};
pub use matching::{MatchedPair, Matching};
pub use plan::{format_hours, DeploymentPlan};
pub use vehicle::{VehicleType, REGULAR_HOURS};
pub use walk::{Traversal, TraversalKind, Walk};
