//! Vehicle type with deployment and operating cost parameters.

use serde::{Deserialize, Serialize};

/// Hours paid at the regular rate before overtime applies.
pub const REGULAR_HOURS: f64 = 8.0;

/// A class of service vehicle that can be deployed on a route.
///
/// # Examples
///
/// ```
/// use u_postman::models::VehicleType;
///
/// let v = VehicleType::new("sweeper")
///     .with_fixed_cost(300.0)
///     .with_cost_per_km(0.9)
///     .with_speed(12.0)
///     .with_hourly_rates(1.0, 1.5);
/// assert_eq!(v.name(), "sweeper");
/// // 8 regular hours + 2 overtime hours
/// assert!((v.labor_cost(10.0) - 11.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    name: String,
    fixed_cost: f64,
    cost_per_km: f64,
    speed: f64,
    hourly_rates: [f64; 2],
}

impl VehicleType {
    /// Creates a vehicle type with the given name.
    ///
    /// Default: no fixed cost, no distance cost, speed 1 km/h, no labor cost.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_cost: 0.0,
            cost_per_km: 0.0,
            speed: 1.0,
            hourly_rates: [0.0, 0.0],
        }
    }

    /// Type I snowplow: 500 fixed, 1.1 per km, 10 km/h, 1.1 / 1.3 per hour.
    pub fn type_i() -> Self {
        Self::new("Type I")
            .with_fixed_cost(500.0)
            .with_cost_per_km(1.1)
            .with_speed(10.0)
            .with_hourly_rates(1.1, 1.3)
    }

    /// Type II snowplow: 800 fixed, 1.3 per km, 20 km/h, 1.3 / 1.5 per hour.
    pub fn type_ii() -> Self {
        Self::new("Type II")
            .with_fixed_cost(800.0)
            .with_cost_per_km(1.3)
            .with_speed(20.0)
            .with_hourly_rates(1.3, 1.5)
    }

    /// Sets the one-off cost of deploying a vehicle.
    pub fn with_fixed_cost(mut self, cost: f64) -> Self {
        self.fixed_cost = cost;
        self
    }

    /// Sets the cost per kilometer of route.
    pub fn with_cost_per_km(mut self, cost: f64) -> Self {
        self.cost_per_km = cost;
        self
    }

    /// Sets the travel speed in km/h.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the hourly labor rates for the first [`REGULAR_HOURS`] and beyond.
    pub fn with_hourly_rates(mut self, regular: f64, overtime: f64) -> Self {
        self.hourly_rates = [regular, overtime];
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed deployment cost per vehicle.
    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    /// Cost per kilometer of route.
    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    /// Travel speed in km/h.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// `[regular, overtime]` hourly rates.
    pub fn hourly_rates(&self) -> [f64; 2] {
        self.hourly_rates
    }

    /// Labor cost of one vehicle working for `hours`.
    pub fn labor_cost(&self, hours: f64) -> f64 {
        let regular = hours.min(REGULAR_HOURS);
        let overtime = (hours - REGULAR_HOURS).max(0.0);
        regular * self.hourly_rates[0] + overtime * self.hourly_rates[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = VehicleType::new("plow");
        assert_eq!(v.name(), "plow");
        assert_eq!(v.fixed_cost(), 0.0);
        assert_eq!(v.cost_per_km(), 0.0);
        assert_eq!(v.speed(), 1.0);
        assert_eq!(v.hourly_rates(), [0.0, 0.0]);
    }

    #[test]
    fn test_presets() {
        let a = VehicleType::type_i();
        assert_eq!(a.fixed_cost(), 500.0);
        assert_eq!(a.cost_per_km(), 1.1);
        assert_eq!(a.speed(), 10.0);
        assert_eq!(a.hourly_rates(), [1.1, 1.3]);

        let b = VehicleType::type_ii();
        assert_eq!(b.fixed_cost(), 800.0);
        assert_eq!(b.speed(), 20.0);
        assert_eq!(b.hourly_rates(), [1.3, 1.5]);
    }

    #[test]
    fn test_labor_cost_tiers() {
        let v = VehicleType::type_i();
        assert!((v.labor_cost(5.0) - 5.5).abs() < 1e-10);
        assert!((v.labor_cost(8.0) - 8.8).abs() < 1e-10);
        // 8 * 1.1 + 2 * 1.3
        assert!((v.labor_cost(10.0) - 11.4).abs() < 1e-10);
        assert_eq!(v.labor_cost(0.0), 0.0);
    }
}
