//! Route queries over a [`FlightGraph`].
//!
//! This module provides:
//! - [`RouteCriterion`] - What a query minimises
//! - [`RouteRequest`] - Source, destination, criterion and intermediate stops
//! - [`find_route`] - Main entry point for computing itineraries
//!
//! Each criterion is served by a [`RoutePlanner`] strategy. The rerouting
//! fallback and the multi-leg composition live here and are shared by all
//! of them.
//!
//! # Example
//!
//! ```ignore
//! use flightgraph_lib::{find_route, load_dataset, DatasetPaths, RouteCriterion, RouteRequest};
//!
//! let dataset = load_dataset(&DatasetPaths::in_dir("data"));
//! let request = RouteRequest::new("LHR", "SUF", RouteCriterion::LeastCost).with_stops(["AMS"]);
//! let route = find_route(&dataset.graph, &request)?;
//! println!("{} for {}", route.formatted_duration(), route.total_cost);
//! ```

mod planner;

pub use planner::{select_planner, CombinedPlanner, LayoverPlanner, RoutePlanner, WeightedPlanner};

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::itinerary::{compose_legs, Reroute, RouteInformation};

/// Quantity a route query minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteCriterion {
    /// Balance of distance, price and time (combined-score search).
    #[default]
    Optimal,
    ShortestDistance,
    LeastCost,
    /// Flight time plus two hours per connection.
    ShortestDuration,
    /// Fewest connections.
    LeastLayovers,
}

impl RouteCriterion {
    pub const ALL: [RouteCriterion; 5] = [
        RouteCriterion::Optimal,
        RouteCriterion::ShortestDistance,
        RouteCriterion::LeastCost,
        RouteCriterion::ShortestDuration,
        RouteCriterion::LeastLayovers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteCriterion::Optimal => "optimal",
            RouteCriterion::ShortestDistance => "shortest-distance",
            RouteCriterion::LeastCost => "least-cost",
            RouteCriterion::ShortestDuration => "shortest-duration",
            RouteCriterion::LeastLayovers => "least-layovers",
        }
    }
}

impl fmt::Display for RouteCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteCriterion {
    type Err = Error;

    /// Accepts `shortest distance`, `shortest-distance` and `shortest_distance`,
    /// in any letter case.
    fn from_str(value: &str) -> Result<Self> {
        let normalized = value
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|word| !word.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-");

        RouteCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == normalized)
            .ok_or_else(|| Error::InvalidCriterion {
                value: value.to_string(),
            })
    }
}

/// High-level route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub source: String,
    pub destination: String,
    pub criterion: RouteCriterion,
    /// Intermediate stops visited in order between source and destination.
    pub via: Vec<String>,
}

impl RouteRequest {
    /// Direct query without intermediate stops.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        criterion: RouteCriterion,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            criterion,
            via: Vec::new(),
        }
    }

    /// Append intermediate stops to the request.
    pub fn with_stops<I, S>(mut self, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.via.extend(stops.into_iter().map(Into::into));
        self
    }

    /// Source, intermediate stops and destination in travel order.
    fn waypoints(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.source.as_str())
            .chain(self.via.iter().map(String::as_str))
            .chain(std::iter::once(self.destination.as_str()))
    }
}

impl FlightGraph {
    /// Convenience wrapper around [`find_route`] taking the criterion by name.
    pub fn find_route(
        &self,
        source: &str,
        destination: &str,
        criterion: &str,
        via: &[&str],
    ) -> Result<RouteInformation> {
        let criterion: RouteCriterion = criterion.parse()?;
        let request =
            RouteRequest::new(source, destination, criterion).with_stops(via.iter().copied());
        find_route(self, &request)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Resolve every waypoint to its canonical IATA code.
fn resolve_waypoints(graph: &FlightGraph, request: &RouteRequest) -> Result<Vec<String>> {
    request
        .waypoints()
        .map(|code| graph.resolve(code).map(|airport| airport.iata.clone()))
        .collect()
}

/// Plan a single leg, rerouting to the nearest airport while the goal stays
/// unreachable.
///
/// Every substitute is chosen among airports not tried yet (the source
/// included), so the chain always ends: either a path is found or
/// [`Error::NoRoute`] is returned.
fn plan_leg(
    graph: &FlightGraph,
    planner: &dyn RoutePlanner,
    source: &str,
    destination: &str,
) -> Result<RouteInformation> {
    if !graph.has_outbound_routes(source) {
        return Err(Error::UnknownSource {
            iata: source.to_string(),
        });
    }

    let mut tried: HashSet<String> = HashSet::from([source.to_string(), destination.to_string()]);
    let mut reroutes = Vec::new();
    let mut goal = destination.to_string();

    let path = loop {
        if let Some(path) = planner.find_path(graph, source, &goal) {
            break path;
        }

        let Some(substitute) = graph
            .nearest_airport_excluding(&goal, &tried)
            .filter(|candidate| graph.has_inbound_routes(candidate))
        else {
            warn!(
                source,
                destination,
                attempts = reroutes.len() + 1,
                "no reachable substitute airport"
            );
            return Err(Error::NoRoute {
                origin: source.to_string(),
                destination: destination.to_string(),
            });
        };

        info!(
            requested = %goal,
            substitute,
            "destination unreachable; rerouting to nearest airport"
        );
        tried.insert(substitute.to_string());
        reroutes.push(Reroute {
            requested: goal,
            substitute: substitute.to_string(),
        });
        goal = substitute.to_string();
    };

    let mut leg = graph.route_information(&path)?;
    leg.reroutes = reroutes;
    Ok(leg)
}

// =============================================================================
// Main Entry Point
// =============================================================================

/// Compute an itinerary for the request.
///
/// This is the main entry point for route queries. It:
/// 1. Resolves and normalises every airport code
/// 2. Rejects consecutive identical waypoints
/// 3. Plans one leg per consecutive pair with the request's criterion
/// 4. Joins the legs into a single [`RouteInformation`]
///
/// A rerouted leg hands its actual arrival airport to the next leg as the
/// departure. Any leg that cannot be completed fails the whole query.
pub fn find_route(graph: &FlightGraph, request: &RouteRequest) -> Result<RouteInformation> {
    // Step 1: Resolve airport codes
    let waypoints = resolve_waypoints(graph, request)?;

    // Step 2: Validate consecutive waypoints
    if let Some(pair) = waypoints.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(Error::SameEndpoints {
            iata: pair[0].clone(),
        });
    }

    // Step 3: Plan each leg
    let planner = select_planner(request.criterion);
    debug!(
        criterion = %planner.criterion(),
        legs = waypoints.len() - 1,
        "planning route"
    );

    let mut legs = Vec::with_capacity(waypoints.len() - 1);
    let mut departure = waypoints[0].clone();
    for (index, goal) in waypoints.iter().enumerate().skip(1) {
        if departure == *goal {
            debug!(airport = %goal, "stop already reached by a rerouted leg");
            continue;
        }

        let leg = plan_leg(graph, planner.as_ref(), &departure, goal).map_err(|err| match err {
            Error::UnknownSource { iata } if index > 1 => Error::NoRoute {
                origin: iata,
                destination: goal.clone(),
            },
            other => other,
        })?;

        if let Some(reached) = leg.destination() {
            departure = reached.to_string();
        }
        legs.push(leg);
    }

    // Step 4: Join the legs
    compose_legs(legs)
}
