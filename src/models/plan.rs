//! Fleet deployment plan.

use serde::{Deserialize, Serialize};

/// Number of vehicles of each type sent on a route, with the resulting
/// completion time and total cost.
///
/// # Examples
///
/// ```
/// use u_postman::models::DeploymentPlan;
///
/// let plan = DeploymentPlan { type_i: 2, type_ii: 1, hours: 1.75, cost: 2400.0 };
/// assert_eq!(plan.vehicle_count(), 3);
/// assert_eq!(plan.formatted_time(), "01:45");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    /// Type I vehicles deployed.
    pub type_i: usize,
    /// Type II vehicles deployed.
    pub type_ii: usize,
    /// Completion time in hours.
    pub hours: f64,
    /// Total cost.
    pub cost: f64,
}

impl DeploymentPlan {
    /// Total number of vehicles deployed.
    pub fn vehicle_count(&self) -> usize {
        self.type_i + self.type_ii
    }

    /// Completion time as `hh:mm`.
    pub fn formatted_time(&self) -> String {
        format_hours(self.hours)
    }
}

/// Formats a duration in hours as `hh:mm` (minutes rounded, carried into
/// the hour).
pub fn format_hours(hours: f64) -> String {
    let total = (hours * 60.0).round().max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "02:00");
        assert_eq!(format_hours(0.5), "00:30");
        assert_eq!(format_hours(12.25), "12:15");
    }

    #[test]
    fn test_format_hours_carries_rounded_minute() {
        assert_eq!(format_hours(1.9999), "02:00");
        assert_eq!(format_hours(0.9999), "01:00");
        assert_eq!(format_hours(0.0), "00:00");
    }

    #[test]
    fn test_vehicle_count() {
        let plan = DeploymentPlan {
            type_i: 0,
            type_ii: 4,
            hours: 3.0,
            cost: 0.0,
        };
        assert_eq!(plan.vehicle_count(), 4);
    }
}
