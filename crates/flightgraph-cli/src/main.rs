mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::airports::handle_airports_command;
use commands::route::{handle_route_command, RouteCommandArgs};
use commands::{load_graph, DatasetOptions};
use flightgraph_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Airline route finder")]
struct Cli {
    /// Directory containing airports.csv and routes.csv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the airports table path.
    #[arg(long, global = true)]
    airports: Option<PathBuf>,

    /// Override the routes table path.
    #[arg(long, global = true)]
    routes: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a route between two airports, optionally through intermediate stops.
    Route(RouteCommandArgs),
    /// List known airports grouped by country.
    Airports {
        /// Only list airports in this country (case-insensitive).
        #[arg(long)]
        country: Option<String>,
    },
}

impl Cli {
    fn dataset_options(&self) -> DatasetOptions {
        DatasetOptions {
            data_dir: self.data_dir.clone(),
            airports: self.airports.clone(),
            routes: self.routes.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Step 1: logging goes to stderr so stdout stays machine-readable.
    init_tracing();
    let cli = Cli::parse();

    // Step 2: load the dataset once for whichever subcommand runs.
    let graph = load_graph(&cli.dataset_options())?;

    // Step 3: dispatch.
    match &cli.command {
        Command::Route(args) => handle_route_command(&graph, cli.format, args),
        Command::Airports { country } => {
            handle_airports_command(&graph, cli.format, country.as_deref())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
