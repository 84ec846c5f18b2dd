//! Flightgraph library entry points.
//!
//! This crate exposes helpers to locate and load an airport/route dataset,
//! build the in-memory flight graph, and run the route searches (distance,
//! cost, duration, layovers and the combined "optimal" score). Higher-level
//! consumers (the CLI, a UI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

pub mod airport;
pub mod dataset;
pub mod error;
pub mod estimate;
pub mod geo;
pub mod graph;
pub mod itinerary;
pub mod output;
pub mod path;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use airport::{Airport, Route, RouteWeights, WeightKind};
pub use dataset::{
    default_data_dir, load_dataset, resolve_dataset_paths, DatasetIssue, DatasetPaths,
    LoadedDataset,
};
pub use error::{Error, Result};
pub use estimate::{estimate_cost, estimate_duration};
pub use geo::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use graph::{FlightGraph, FlightGraphBuilder};
pub use itinerary::{format_duration, Reroute, RouteInformation, Segment, LAYOVER_HOURS};
pub use output::{RouteRenderMode, RouteStop, RouteSummary};
pub use path::EdgeCost;
pub use routing::{find_route, select_planner, RouteCriterion, RoutePlanner, RouteRequest};
