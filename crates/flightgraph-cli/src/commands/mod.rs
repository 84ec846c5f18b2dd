// Module exports for CLI subcommands.
//
// Each module handles one subcommand. main.rs parses arguments, loads the
// dataset once and dispatches here.

pub mod airports;
pub mod route;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use flightgraph_cli::output::format_dataset_warning;
use flightgraph_cli::terminal::ColorPalette;
use flightgraph_lib::{load_dataset, resolve_dataset_paths, DatasetPaths, FlightGraph};

/// Dataset location flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct DatasetOptions {
    pub data_dir: Option<PathBuf>,
    pub airports: Option<PathBuf>,
    pub routes: Option<PathBuf>,
}

impl DatasetOptions {
    /// Individual file flags win over the directory chosen by
    /// `--data-dir`, `FLIGHTGRAPH_DATA_DIR` or the platform default.
    pub fn resolve(&self) -> Result<DatasetPaths> {
        if let (Some(airports), Some(routes)) = (&self.airports, &self.routes) {
            return Ok(DatasetPaths {
                airports: airports.clone(),
                routes: routes.clone(),
            });
        }

        let mut paths = resolve_dataset_paths(self.data_dir.as_deref())
            .context("failed to resolve the dataset location")?;
        if let Some(airports) = &self.airports {
            paths.airports = airports.clone();
        }
        if let Some(routes) = &self.routes {
            paths.routes = routes.clone();
        }
        Ok(paths)
    }
}

/// Load the flight graph, warning about skipped entries on stderr.
pub fn load_graph(options: &DatasetOptions) -> Result<FlightGraph> {
    let paths = options.resolve()?;
    let dataset = load_dataset(&paths);

    if let Some(warning) = format_dataset_warning(&dataset.issues, ColorPalette::detect()) {
        eprintln!("{warning}");
    }
    if dataset.graph.is_empty() {
        bail!(
            "No airports could be loaded from {}. Point --data-dir (or FLIGHTGRAPH_DATA_DIR) at a directory containing airports.csv and routes.csv.",
            paths.airports.display()
        );
    }

    Ok(dataset.graph)
}
