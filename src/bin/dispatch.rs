use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::info;

use u_dispatch::constructive::{AssignmentConfig, ExhaustionPolicy, RouteAssignmentEngine};
use u_dispatch::demo_data::{demo_fleet, generate_requests, DemoConfig};
use u_dispatch::evaluation::PlanEvaluator;
use u_dispatch::models::{DeliveryPlan, DeliveryRequest, Vehicle};
use u_dispatch::render::route_feature_collection;
use u_dispatch::validation::validate_input;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a random batch for the built-in Berlin fleet
    Demo {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Maximum number of generated requests
        #[arg(long, default_value_t = 100)]
        requests: usize,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Plan a batch read from a JSON file
    Solve {
        /// JSON file with `vehicles` and `requests` arrays
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Keep assigning after a request finds no vehicle
    #[arg(long)]
    skip_unservable: bool,

    /// Rank requests by demand * weight * location friction
    #[arg(long)]
    location_friction: bool,

    /// Attach a GeoJSON line string per route
    #[arg(long)]
    geojson: bool,
}

impl OutputArgs {
    fn config(&self) -> AssignmentConfig {
        let exhaustion = if self.skip_unservable {
            ExhaustionPolicy::Skip
        } else {
            ExhaustionPolicy::Stop
        };
        AssignmentConfig::default()
            .with_exhaustion(exhaustion)
            .with_location_friction(self.location_friction)
    }
}

#[derive(Deserialize)]
struct DispatchInput {
    vehicles: Vec<Vehicle>,
    requests: Vec<DeliveryRequest>,
}

#[derive(Serialize)]
struct DispatchReport<'a> {
    plan: &'a DeliveryPlan,
    fleet: &'a [Vehicle],
    distance_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    routes_geojson: Option<Vec<geojson::FeatureCollection>>,
}

fn run(
    mut vehicles: Vec<Vehicle>,
    requests: Vec<DeliveryRequest>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    validate_input(&vehicles, &requests).context("invalid dispatch input")?;

    let initial = vehicles.clone();
    let engine = RouteAssignmentEngine::new(output.config());
    let plan = engine.optimize(&mut vehicles, requests);
    let (distance_km, _) = PlanEvaluator::new(&initial).evaluate(&plan);

    info!(
        routes = plan.num_routes(),
        pending = plan.num_pending(),
        distance_km,
        "plan ready"
    );

    let routes_geojson = output.geojson.then(|| {
        plan.routes()
            .iter()
            .map(|route| route_feature_collection(&route.positions()))
            .collect()
    });
    let report = DispatchReport {
        plan: &plan,
        fleet: &vehicles,
        distance_km,
        routes_geojson,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Demo {
            seed,
            requests,
            output,
        } => {
            let fleet = demo_fleet();
            let capacity = fleet.iter().map(|v| v.capacity()).sum();
            let config = DemoConfig::default()
                .with_seed(seed)
                .with_request_count(requests);
            let batch = generate_requests(&config, capacity);
            run(fleet, batch, &output)
        }
        Commands::Solve { input, output } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let DispatchInput { vehicles, requests } =
                serde_json::from_str(&raw).context("failed to parse dispatch input")?;
            run(vehicles, requests, &output)
        }
    }
}
