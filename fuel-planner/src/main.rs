use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fuel_planner::cli::{Cli, CliError, render_summary};
use fuel_planner::planner::{Optimizer, RouteProvider};
use fuel_planner::routing::{
    CachedRouteProvider, GeocodeCacheConfig, MockRouteProvider, RoutingClient,
};
use fuel_planner::stations::SharedCatalog;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.route_fixture {
        Some(path) => match MockRouteProvider::from_fixture(path) {
            Ok(mock) => {
                info!(fixture = %path.display(), "using route fixture");
                run(mock, &cli).await
            }
            Err(e) => Err(e.into()),
        },
        None => {
            if cli.ors_api_key.is_empty() {
                warn!("ORS_API_KEY not set. Directions requests will fail.");
            }
            match RoutingClient::new(cli.routing_config()) {
                Ok(client) => {
                    let provider = CachedRouteProvider::new(client, &GeocodeCacheConfig::default());
                    run(provider, &cli).await
                }
                Err(e) => Err(e.into()),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run<P: RouteProvider>(provider: P, cli: &Cli) -> Result<(), CliError> {
    let catalog = SharedCatalog::new(cli.stations.clone());
    let optimizer = Optimizer::new(provider, catalog, cli.planner_config())?;

    let plan = optimizer.optimize(&cli.origin, &cli.destination).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_summary(&cli.origin, &cli.destination, &plan));
    }
    Ok(())
}
