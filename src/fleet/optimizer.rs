//! Minimum-cost fleet deployment.
//!
//! # Algorithm
//!
//! Exhaustive search over the counts of two vehicle types (Type I in
//! `0..=max_type_i`, Type II in `0..=max_type_ii`, the empty fleet skipped).
//! For each combination:
//!
//! ```text
//! speed = n1·v1 + n2·v2                        (km/h)
//! time  = route_km / speed                     (skip if speed = 0 or time > budget)
//! cost  = n1·F1 + n2·F2
//!       + route_km · (n1·k1 + n2·k2)
//!       + Σ nᵢ · (min(8, time)·rᵢ + max(0, time − 8)·oᵢ)
//! ```
//!
//! The cheapest feasible combination wins; the first one found in
//! enumeration order breaks ties.
//!
//! # Complexity
//!
//! O(max_type_i · max_type_ii).

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::FleetError;
use crate::models::{DeploymentPlan, VehicleType};

/// Exhaustive two-type fleet optimizer.
///
/// # Examples
///
/// ```
/// use u_postman::fleet::FleetOptimizer;
///
/// let optimizer = FleetOptimizer::default();
/// // 100 km of streets, 10 hours available
/// let plan = optimizer.optimize(100_000.0, 10.0).unwrap();
/// assert_eq!((plan.type_i, plan.type_ii), (1, 0));
/// assert!((plan.hours - 10.0).abs() < 1e-10);
/// assert!((plan.cost - 621.4).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetOptimizer {
    type_i: VehicleType,
    type_ii: VehicleType,
    max_type_i: usize,
    max_type_ii: usize,
}

impl Default for FleetOptimizer {
    fn default() -> Self {
        Self::new(VehicleType::type_i(), VehicleType::type_ii())
    }
}

impl FleetOptimizer {
    /// Creates an optimizer for the two vehicle types, with up to 9 Type I
    /// and 4 Type II vehicles.
    pub fn new(type_i: VehicleType, type_ii: VehicleType) -> Self {
        Self {
            type_i,
            type_ii,
            max_type_i: 9,
            max_type_ii: 4,
        }
    }

    /// Sets the largest count of each type to consider (inclusive).
    pub fn with_max_counts(mut self, max_type_i: usize, max_type_ii: usize) -> Self {
        self.max_type_i = max_type_i;
        self.max_type_ii = max_type_ii;
        self
    }

    /// The first vehicle type.
    pub fn type_i(&self) -> &VehicleType {
        &self.type_i
    }

    /// The second vehicle type.
    pub fn type_ii(&self) -> &VehicleType {
        &self.type_ii
    }

    /// Inclusive upper bounds on the counts of each type.
    pub fn max_counts(&self) -> (usize, usize) {
        (self.max_type_i, self.max_type_ii)
    }

    /// Hours needed by the given fleet to drive `route_km`, or `None` for an
    /// empty (zero-speed) fleet.
    pub fn completion_time(&self, route_km: f64, type_i: usize, type_ii: usize) -> Option<f64> {
        let speed = type_i as f64 * self.type_i.speed() + type_ii as f64 * self.type_ii.speed();
        (speed > 0.0).then(|| route_km / speed)
    }

    /// Total cost of deploying the given fleet on `route_km` for `hours`.
    pub fn cost(&self, route_km: f64, type_i: usize, type_ii: usize, hours: f64) -> f64 {
        let mut cost = 0.0;
        for (count, vehicle) in [(type_i, &self.type_i), (type_ii, &self.type_ii)] {
            if count == 0 {
                continue;
            }
            let n = count as f64;
            cost += n * vehicle.fixed_cost();
            cost += n * route_km * vehicle.cost_per_km();
            cost += n * vehicle.labor_cost(hours);
        }
        cost
    }

    /// Every combination that finishes within `max_hours`, in enumeration
    /// order (Type I count outer, Type II count inner).
    ///
    /// # Errors
    ///
    /// [`FleetError::InvalidInput`] for a negative or non-finite length or
    /// budget.
    pub fn feasible_plans(
        &self,
        route_length_m: f64,
        max_hours: f64,
    ) -> Result<Vec<DeploymentPlan>, FleetError> {
        validate(route_length_m, max_hours)?;
        let route_km = route_length_m / 1000.0;

        let mut plans = Vec::new();
        for type_i in 0..=self.max_type_i {
            for type_ii in 0..=self.max_type_ii {
                let Some(hours) = self.completion_time(route_km, type_i, type_ii) else {
                    continue;
                };
                if hours > max_hours {
                    continue;
                }
                plans.push(DeploymentPlan {
                    type_i,
                    type_ii,
                    hours,
                    cost: self.cost(route_km, type_i, type_ii, hours),
                });
            }
        }
        Ok(plans)
    }

    /// Cheapest fleet that drives `route_length_m` meters within `max_hours`.
    ///
    /// # Errors
    ///
    /// [`FleetError::Infeasible`] naming `max_hours` if no combination is
    /// fast enough; [`FleetError::InvalidInput`] for bad arguments.
    pub fn optimize(
        &self,
        route_length_m: f64,
        max_hours: f64,
    ) -> Result<DeploymentPlan, FleetError> {
        let plans = self.feasible_plans(route_length_m, max_hours)?;
        debug!(feasible = plans.len(), max_hours, "fleet combinations evaluated");

        let mut best: Option<DeploymentPlan> = None;
        for plan in plans {
            if best.as_ref().map_or(true, |b| plan.cost < b.cost) {
                best = Some(plan);
            }
        }

        let plan = best.ok_or(FleetError::Infeasible { max_hours })?;
        info!(
            type_i = plan.type_i,
            type_ii = plan.type_ii,
            time = %plan.formatted_time(),
            cost = plan.cost,
            "optimal deployment"
        );
        Ok(plan)
    }
}

fn validate(route_length_m: f64, max_hours: f64) -> Result<(), FleetError> {
    if !route_length_m.is_finite() || route_length_m < 0.0 {
        return Err(FleetError::InvalidInput(format!(
            "route length must be a non-negative number of meters, got {route_length_m}"
        )));
    }
    if !max_hours.is_finite() || max_hours < 0.0 {
        return Err(FleetError::InvalidInput(format!(
            "time budget must be a non-negative number of hours, got {max_hours}"
        )));
    }
    Ok(())
}
