//! Cost of flying a route with a single survey drone.
//!
//! Drones are billed per started day of operation plus a small per-km
//! charge; there is no labor split.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FleetError;

/// Breakdown of a drone flight over a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneEstimate {
    /// Route length in kilometers.
    pub distance_km: f64,
    /// Flight time in hours.
    pub flight_hours: f64,
    /// Billed days, `ceil(flight_hours / 24)`.
    pub days: u64,
    /// Billed days times the daily cost.
    pub day_cost: f64,
    /// Distance charge.
    pub distance_cost: f64,
    /// Day cost plus distance cost.
    pub total: f64,
}

/// Drone pricing and speed.
///
/// # Examples
///
/// ```
/// use u_postman::fleet::DroneCostModel;
///
/// // 3000 km at 60 km/h = 50 h, billed as 3 days
/// let estimate = DroneCostModel::default().estimate(3_000_000.0).unwrap();
/// assert_eq!(estimate.days, 3);
/// assert!((estimate.total - 330.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneCostModel {
    daily_cost: f64,
    cost_per_km: f64,
    speed_kmh: f64,
}

impl Default for DroneCostModel {
    fn default() -> Self {
        Self {
            daily_cost: 100.0,
            cost_per_km: 0.01,
            speed_kmh: 60.0,
        }
    }
}

impl DroneCostModel {
    /// Sets the cost per started day of operation.
    pub fn with_daily_cost(mut self, daily_cost: f64) -> Self {
        self.daily_cost = daily_cost;
        self
    }

    /// Sets the cost per kilometer flown.
    pub fn with_cost_per_km(mut self, cost_per_km: f64) -> Self {
        self.cost_per_km = cost_per_km;
        self
    }

    /// Sets the cruise speed in km/h.
    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Cost per started day.
    pub fn daily_cost(&self) -> f64 {
        self.daily_cost
    }

    /// Cost per kilometer.
    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    /// Cruise speed in km/h.
    pub fn speed(&self) -> f64 {
        self.speed_kmh
    }

    /// Prices a flight of `length_m` meters.
    ///
    /// # Errors
    ///
    /// [`FleetError::InvalidInput`] for a negative or non-finite length, or a
    /// non-positive speed.
    pub fn estimate(&self, length_m: f64) -> Result<DroneEstimate, FleetError> {
        if !length_m.is_finite() || length_m < 0.0 {
            return Err(FleetError::InvalidInput(format!(
                "route length must be a non-negative number of meters, got {length_m}"
            )));
        }
        if !(self.speed_kmh > 0.0) {
            return Err(FleetError::InvalidInput(format!(
                "drone speed must be positive, got {}",
                self.speed_kmh
            )));
        }

        let distance_km = length_m / 1000.0;
        let flight_hours = distance_km / self.speed_kmh;
        let days = (flight_hours / 24.0).ceil() as u64;
        let day_cost = days as f64 * self.daily_cost;
        let distance_cost = distance_km * self.cost_per_km;

        debug!(distance_km, flight_hours, days, "drone flight estimated");
        Ok(DroneEstimate {
            distance_km,
            flight_hours,
            days,
            day_cost,
            distance_cost,
            total: day_cost + distance_cost,
        })
    }
}
