//! Error types for route solving and fleet sizing.
//!
//! Every failure is fatal to the request that produced it and is returned
//! to the caller; nothing is skipped or defaulted.

use thiserror::Error;

use crate::models::NodeId;

/// Failures of the postman solve pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// No odd-degree vertex still awaiting a partner is reachable from
    /// `vertex` (the graph slice is disconnected).
    #[error("no remaining odd-degree vertex is reachable from vertex {vertex}")]
    UnreachableOddVertex {
        /// Vertex whose search exhausted its frontier.
        vertex: NodeId,
    },

    /// The graph handed to the Eulerian traversal violates its degree,
    /// balance or connectivity precondition.
    #[error("graph is not Eulerian: {reason}")]
    NotEulerian {
        /// Which precondition failed.
        reason: String,
    },

    /// A matched path crosses a vertex pair with no edge to duplicate.
    #[error("no edge between {from} and {to} to duplicate")]
    MissingEdge {
        /// Start of the hop.
        from: NodeId,
        /// End of the hop.
        to: NodeId,
    },

    /// Directed reconciliation found no path in the original graph.
    #[error("no directed path from {from} to {to}")]
    NoDirectedPath {
        /// Start of the missing connection.
        from: NodeId,
        /// End of the missing connection.
        to: NodeId,
    },
}

/// Failures of fleet sizing and cost estimation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FleetError {
    /// No vehicle combination in the search space finishes within the budget.
    #[error("cannot complete route in {max_hours} hours with the available fleet")]
    Infeasible {
        /// Requested time budget in hours.
        max_hours: f64,
    },

    /// Negative, NaN or infinite input.
    #[error("invalid fleet input: {0}")]
    InvalidInput(String),
}
