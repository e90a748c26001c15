//! Fleet sizing for a computed route.
//!
//! - [`FleetOptimizer`] — Cheapest mix of two ground vehicle types within a
//!   time budget, exhaustive O(n₁ · n₂)
//! - [`DroneCostModel`] — Day-billed drone flight estimate

mod drone;
mod optimizer;

pub use drone::{DroneCostModel, DroneEstimate};
pub use optimizer::FleetOptimizer;
