use std::env;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::airport::{Airport, RouteWeights};
use crate::error::{Error, Result};
use crate::estimate::{estimate_cost, estimate_duration};
use crate::geo::Coordinates;
use crate::graph::{normalize_iata, FlightGraph, FlightGraphBuilder};

/// Default filename for the airport table.
pub const AIRPORTS_FILENAME: &str = "airports.csv";

/// Default filename for the route table.
pub const ROUTES_FILENAME: &str = "routes.csv";

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "FLIGHTGRAPH_DATA_DIR";

/// Locations of the two dataset tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airports: PathBuf,
    pub routes: PathBuf,
}

impl DatasetPaths {
    /// Both tables under their default names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            airports: dir.join(AIRPORTS_FILENAME),
            routes: dir.join(ROUTES_FILENAME),
        }
    }
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "flightgraph", "flightgraph")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Work out where the dataset lives.
///
/// The resolution order is:
/// 1. Explicit `data_dir` argument when provided.
/// 2. `FLIGHTGRAPH_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_dataset_paths(data_dir: Option<&Path>) -> Result<DatasetPaths> {
    if let Some(explicit) = data_dir {
        return Ok(DatasetPaths::in_dir(explicit));
    }

    if let Some(env_dir) = env::var_os(DATA_DIR_ENV) {
        debug!(dir = ?env_dir, "using dataset directory from {DATA_DIR_ENV}");
        return Ok(DatasetPaths::in_dir(PathBuf::from(env_dir)));
    }

    Ok(DatasetPaths::in_dir(default_data_dir()?))
}

/// Problem found while loading the dataset. Loading continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetIssue {
    pub path: PathBuf,
    /// 1-based line of the offending row, when the issue concerns a row.
    pub line: Option<u64>,
    pub message: String,
}

impl DatasetIssue {
    fn new(path: &Path, line: Option<u64>, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.path.display(), line, self.message),
            None => write!(f, "{}: {}", self.path.display(), self.message),
        }
    }
}

/// Graph built from whatever loaded, plus everything that was skipped.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub graph: FlightGraph,
    pub issues: Vec<DatasetIssue>,
}

impl LoadedDataset {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct AirportRecord {
    #[serde(rename = "IATA")]
    iata: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

impl AirportRecord {
    fn into_airport(self) -> std::result::Result<Airport, String> {
        let iata = normalize_iata(&self.iata);
        if iata.is_empty() {
            return Err("airport row has an empty IATA code".to_string());
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} of {iata} is out of range", self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!(
                "longitude {} of {iata} is out of range",
                self.longitude
            ));
        }
        Ok(Airport::new(
            iata,
            self.name,
            self.city,
            self.country,
            Coordinates::new(self.latitude, self.longitude),
        ))
    }
}

#[derive(Debug, Deserialize)]
struct RouteRecord {
    #[serde(rename = "Source Airport IATA")]
    source: String,
    #[serde(rename = "Destination Airport IATA")]
    destination: String,
    #[serde(rename = "Distance")]
    distance: f64,
    #[serde(rename = "Estimated Cost", default)]
    cost: Option<f64>,
    #[serde(rename = "Estimated Duration", default)]
    duration: Option<f64>,
}

impl RouteRecord {
    /// Validated endpoints and weights, estimating missing cost or duration.
    fn into_parts(self) -> std::result::Result<(String, String, RouteWeights), String> {
        let source = normalize_iata(&self.source);
        let destination = normalize_iata(&self.destination);
        if source.is_empty() || destination.is_empty() {
            return Err("route row has an empty airport code".to_string());
        }
        if source == destination {
            return Err(format!("route from {source} to itself"));
        }

        let cost = self.cost.unwrap_or_else(|| estimate_cost(self.distance));
        let duration = self
            .duration
            .unwrap_or_else(|| estimate_duration(self.distance));
        for (label, value) in [
            ("distance", self.distance),
            ("cost", cost),
            ("duration", duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "route {source}->{destination} has invalid {label} {value}"
                ));
            }
        }

        Ok((
            source,
            destination,
            RouteWeights::new(self.distance, cost, duration),
        ))
    }
}

/// Load both tables and build the flight graph.
///
/// Missing files, malformed rows and routes naming unknown airports are
/// skipped, logged and returned as [`DatasetIssue`]s; the graph holds
/// everything else.
pub fn load_dataset(paths: &DatasetPaths) -> LoadedDataset {
    let mut builder = FlightGraph::builder();
    let mut issues = Vec::new();

    let airports = match open_table(&paths.airports) {
        Ok(reader) => read_airports(reader, &paths.airports, &mut builder, &mut issues),
        Err(err) => Err(err),
    }
    .unwrap_or_else(|err| {
        issues.push(DatasetIssue::new(&paths.airports, None, err.to_string()));
        0
    });

    let routes = match open_table(&paths.routes) {
        Ok(reader) => read_routes(reader, &paths.routes, &mut builder, &mut issues),
        Err(err) => Err(err),
    }
    .unwrap_or_else(|err| {
        issues.push(DatasetIssue::new(&paths.routes, None, err.to_string()));
        0
    });

    for issue in &issues {
        warn!(
            path = %issue.path.display(),
            line = ?issue.line,
            "skipped dataset entry: {}",
            issue.message
        );
    }

    let graph = builder.build();
    info!(
        airports,
        routes,
        issues = issues.len(),
        "loaded flight dataset"
    );

    LoadedDataset { graph, issues }
}

fn open_table(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(err.into()),
    }
}

fn read_airports<R: Read>(
    reader: R,
    path: &Path,
    builder: &mut FlightGraphBuilder,
    issues: &mut Vec<DatasetIssue>,
) -> Result<usize> {
    let mut loaded = 0usize;
    for_each_row(reader, path, issues, |record, headers| {
        let airport = record
            .deserialize::<AirportRecord>(Some(headers))
            .map_err(|err| err.to_string())?
            .into_airport()?;
        builder.add_airport(airport);
        loaded += 1;
        Ok(())
    })?;
    Ok(loaded)
}

fn read_routes<R: Read>(
    reader: R,
    path: &Path,
    builder: &mut FlightGraphBuilder,
    issues: &mut Vec<DatasetIssue>,
) -> Result<usize> {
    let mut loaded = 0usize;
    for_each_row(reader, path, issues, |record, headers| {
        let (source, destination, weights) = record
            .deserialize::<RouteRecord>(Some(headers))
            .map_err(|err| err.to_string())?
            .into_parts()?;
        for endpoint in [&source, &destination] {
            if !builder.contains_airport(endpoint) {
                return Err(format!("route references unknown airport {endpoint}"));
            }
        }
        builder.add_route(source, destination, weights);
        loaded += 1;
        Ok(())
    })?;
    Ok(loaded)
}

/// Feed every data row to `handle`, turning row-level failures into issues.
///
/// Only an unreadable header or an I/O failure aborts the table.
fn for_each_row<R, F>(
    reader: R,
    path: &Path,
    issues: &mut Vec<DatasetIssue>,
    mut handle: F,
) -> Result<()>
where
    R: Read,
    F: FnMut(&StringRecord, &StringRecord) -> std::result::Result<(), String>,
{
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    for row in csv_reader.records() {
        let record = match row {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                let line = err.position().map(|position| position.line());
                issues.push(DatasetIssue::new(path, line, err.to_string()));
                continue;
            }
        };

        if let Err(message) = handle(&record, &headers) {
            let line = record.position().map(|position| position.line());
            issues.push(DatasetIssue::new(path, line, message));
        }
    }

    Ok(())
}
