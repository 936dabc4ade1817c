//! Tunable parameters for fuel-stop planning.

use serde::Serialize;

/// Error returned when a planner parameter is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid planner config: {field} {reason} (got {value})")]
pub struct InvalidConfig {
    field: &'static str,
    reason: &'static str,
    value: f64,
}

/// How segment fuel is priced into the trip total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostPolicy {
    /// Segment `i` is priced at stop `i`. The leg into the destination has
    /// no paired stop and is left out of the total.
    #[default]
    PairedByIndex,

    /// As `PairedByIndex`, but the leg into the destination is priced at
    /// the last stop's price.
    FinalLegAtLastStop,
}

/// Highway-access incentive applied when comparing station prices.
#[derive(Debug, Clone, PartialEq)]
pub struct HighwayDiscount {
    /// Dollars per gallon subtracted from highway-accessible stations.
    pub amount: f64,
    /// Address substring marking highway access.
    pub marker: String,
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Vehicle fuel efficiency (miles per gallon).
    pub fuel_efficiency_mpg: f64,

    /// Distance the vehicle can cover on a full tank (miles).
    /// Routes no longer than this need no stops.
    pub vehicle_range_miles: f64,

    /// Spacing between refuelling checkpoints (miles).
    pub waypoint_interval_miles: f64,

    /// Stations further than this from a checkpoint are ignored (miles).
    pub search_radius_miles: f64,

    /// Extra distance charged to every segment for leaving the route (miles).
    pub detour_allowance_miles: f64,

    /// Price reduction for highway-accessible stations.
    pub highway_discount: HighwayDiscount,

    /// How segments are priced into the total.
    pub cost_policy: CostPolicy,
}

impl PlannerConfig {
    /// Check every numeric parameter is finite and in range.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        positive("fuel_efficiency_mpg", self.fuel_efficiency_mpg)?;
        positive("waypoint_interval_miles", self.waypoint_interval_miles)?;
        non_negative("vehicle_range_miles", self.vehicle_range_miles)?;
        non_negative("search_radius_miles", self.search_radius_miles)?;
        non_negative("detour_allowance_miles", self.detour_allowance_miles)?;
        non_negative("highway_discount", self.highway_discount.amount)?;
        Ok(())
    }

    /// Set the fuel efficiency.
    pub fn with_fuel_efficiency(mut self, mpg: f64) -> Self {
        self.fuel_efficiency_mpg = mpg;
        self
    }

    /// Set the vehicle range.
    pub fn with_vehicle_range(mut self, miles: f64) -> Self {
        self.vehicle_range_miles = miles;
        self
    }

    /// Set the waypoint interval.
    pub fn with_waypoint_interval(mut self, miles: f64) -> Self {
        self.waypoint_interval_miles = miles;
        self
    }

    /// Set the station search radius.
    pub fn with_search_radius(mut self, miles: f64) -> Self {
        self.search_radius_miles = miles;
        self
    }

    /// Set the detour allowance.
    pub fn with_detour_allowance(mut self, miles: f64) -> Self {
        self.detour_allowance_miles = miles;
        self
    }

    /// Set the highway discount amount.
    pub fn with_highway_discount(mut self, dollars: f64) -> Self {
        self.highway_discount.amount = dollars;
        self
    }

    /// Set the address marker used to detect highway access.
    pub fn with_highway_marker(mut self, marker: impl Into<String>) -> Self {
        self.highway_discount.marker = marker.into();
        self
    }

    /// Set the cost policy.
    pub fn with_cost_policy(mut self, policy: CostPolicy) -> Self {
        self.cost_policy = policy;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fuel_efficiency_mpg: 10.0,
            vehicle_range_miles: 500.0,
            waypoint_interval_miles: 450.0,
            search_radius_miles: 20.0,
            detour_allowance_miles: 10.0,
            highway_discount: HighwayDiscount {
                amount: 0.05,
                marker: "I-".to_string(),
            },
            cost_policy: CostPolicy::PairedByIndex,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), InvalidConfig> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidConfig {
            field,
            reason: "must be finite and greater than zero",
            value,
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InvalidConfig> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidConfig {
            field,
            reason: "must be finite and non-negative",
            value,
        })
    }
}
