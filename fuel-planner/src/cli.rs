//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::OptimizeError;
use crate::planner::{CostPolicy, InvalidConfig, OptimalRoute, PlannerConfig};
use crate::routing::{RoutingConfig, RoutingError};

/// Plan the cheapest fuel stops for a drive between two US places.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Starting place, e.g. "Oklahoma City"
    pub origin: String,

    /// Destination place, e.g. "Amarillo"
    pub destination: String,

    /// Station price dataset (JSON array)
    #[arg(
        long,
        env = "GAS_STATIONS_PATH",
        default_value = "data/gas_stations.json"
    )]
    pub stations: PathBuf,

    /// OpenRouteService API key
    #[arg(long, env = "ORS_API_KEY", hide_env_values = true, default_value = "")]
    pub ors_api_key: String,

    /// Serve places and route from a JSON fixture instead of the network
    #[arg(long)]
    pub route_fixture: Option<PathBuf>,

    /// Vehicle fuel efficiency in miles per gallon
    #[arg(long, default_value_t = 10.0)]
    pub mpg: f64,

    /// Distance covered on a full tank, in miles
    #[arg(long, default_value_t = 500.0)]
    pub range: f64,

    /// Spacing between refuelling checkpoints, in miles
    #[arg(long, default_value_t = 450.0)]
    pub interval: f64,

    /// Station search radius around each checkpoint, in miles
    #[arg(long, default_value_t = 20.0)]
    pub radius: f64,

    /// Miles added to every segment for leaving the route
    #[arg(long, default_value_t = 10.0)]
    pub detour: f64,

    /// Dollars per gallon knocked off highway-accessible stations
    #[arg(long, default_value_t = 0.05)]
    pub highway_discount: f64,

    /// Address substring marking highway access
    #[arg(long, default_value = "I-")]
    pub highway_marker: String,

    /// How segment fuel is priced into the total
    #[arg(long, value_enum, default_value_t = PolicyArg::Paired)]
    pub cost_policy: PolicyArg,

    /// Print the full plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Command-line spelling of [`CostPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Price segment i at stop i; final leg uncosted
    Paired,
    /// Also price the final leg at the last stop
    FinalLeg,
}

impl From<PolicyArg> for CostPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Paired => CostPolicy::PairedByIndex,
            PolicyArg::FinalLeg => CostPolicy::FinalLegAtLastStop,
        }
    }
}

impl Cli {
    /// Planner parameters from the flags.
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::default()
            .with_fuel_efficiency(self.mpg)
            .with_vehicle_range(self.range)
            .with_waypoint_interval(self.interval)
            .with_search_radius(self.radius)
            .with_detour_allowance(self.detour)
            .with_highway_discount(self.highway_discount)
            .with_highway_marker(self.highway_marker.clone())
            .with_cost_policy(self.cost_policy.into())
    }

    /// Routing client settings from the flags.
    pub fn routing_config(&self) -> RoutingConfig {
        RoutingConfig::new(self.ors_api_key.clone())
    }
}

/// Errors that end a command-line run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] InvalidConfig),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    #[error("failed to serialise plan: {0}")]
    Output(#[from] serde_json::Error),
}

/// Human-readable plan summary.
pub fn render_summary(origin: &str, destination: &str, plan: &OptimalRoute) -> String {
    let mut lines = vec![
        format!("{origin} -> {destination}"),
        format!("Distance:   {:.2} mi", plan.total_distance_miles),
        format!("Fuel:       {:.2} gal", plan.total_fuel_gallons()),
        format!("Fuel cost:  ${:.2}", plan.total_fuel_cost),
    ];

    if plan.gas_stops.is_empty() {
        lines.push("No fuel stops needed.".to_string());
    } else {
        lines.push("Stops:".to_string());
    }
    for (idx, stop) in plan.gas_stops.iter().enumerate() {
        let station = &stop.station;
        let mut line = format!(
            "  {}. {} ({}, {} {}) ${:.3}/gal",
            idx + 1,
            station.name.trim(),
            station.address.trim(),
            station.city.trim(),
            station.state.trim(),
            stop.effective_price
        );
        if stop.discount() > 0.0 {
            let list_price = format!(" [highway, list ${:.3}]", station.price_per_gallon);
            line.push_str(&list_price);
        }
        lines.push(line);
    }

    lines.push("Segments:".to_string());
    for segment in &plan.segments {
        lines.push(format!(
            "  {} -> {}  {:.2} mi  {:.2} gal",
            segment.start, segment.end, segment.distance_miles, segment.fuel_gallons
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
