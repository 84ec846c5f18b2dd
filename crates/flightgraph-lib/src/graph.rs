use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::airport::{Airport, Route, RouteWeights, WeightKind};
use crate::error::{Error, Result};
use crate::itinerary::{RouteInformation, Segment, LAYOVER_HOURS};

/// Minimum Jaro-Winkler similarity for an airport to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Immutable airport network used by the route searches.
///
/// Cloning is cheap: the airport table is shared behind an [`Arc`], so one
/// graph can be handed to several threads without locking.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    airports: Arc<HashMap<String, Airport>>,
    inbound: Arc<HashMap<String, Vec<String>>>,
}

/// Collects airports and routes before freezing them into a [`FlightGraph`].
#[derive(Debug, Default)]
pub struct FlightGraphBuilder {
    airports: HashMap<String, Airport>,
    routes: Vec<Route>,
}

impl FlightGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an airport. A later airport with the same IATA code replaces the earlier one.
    pub fn add_airport(&mut self, airport: Airport) -> &mut Self {
        self.airports.insert(airport.iata.clone(), airport);
        self
    }

    /// `true` when an airport with this IATA code has been added.
    pub fn contains_airport(&self, iata: &str) -> bool {
        self.airports.contains_key(iata)
    }

    /// Queue a directed route. Endpoints are checked when the graph is built.
    pub fn add_route(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
        weights: RouteWeights,
    ) -> &mut Self {
        self.routes.push(Route {
            source: source.into(),
            destination: destination.into(),
            weights,
        });
        self
    }

    /// Freeze the collected records into a graph.
    ///
    /// Routes whose source or destination is not a known airport are dropped.
    /// A route repeating an earlier (source, destination) pair replaces it.
    pub fn build(self) -> FlightGraph {
        let mut airports = self.airports;
        let queued = self.routes.len();
        let mut dropped = 0usize;
        let mut replaced = 0usize;

        for route in self.routes {
            if !airports.contains_key(&route.destination) {
                dropped += 1;
                continue;
            }
            match airports.get_mut(&route.source) {
                Some(airport) => {
                    if airport.upsert_route(route) {
                        replaced += 1;
                    }
                }
                None => dropped += 1,
            }
        }

        let mut inbound: HashMap<String, Vec<String>> = HashMap::new();
        for airport in airports.values() {
            for route in airport.routes() {
                inbound
                    .entry(route.destination.clone())
                    .or_default()
                    .push(route.source.clone());
            }
        }
        for sources in inbound.values_mut() {
            sources.sort();
        }

        debug!(
            airports = airports.len(),
            routes = queued - dropped - replaced,
            dropped,
            replaced,
            "built flight graph"
        );

        FlightGraph {
            airports: Arc::new(airports),
            inbound: Arc::new(inbound),
        }
    }
}

impl FlightGraph {
    pub fn builder() -> FlightGraphBuilder {
        FlightGraphBuilder::new()
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Number of routes across all airports.
    pub fn route_count(&self) -> usize {
        self.airports.values().map(|a| a.routes().len()).sum()
    }

    pub fn contains(&self, iata: &str) -> bool {
        self.airports.contains_key(iata)
    }

    pub fn airport(&self, iata: &str) -> Option<&Airport> {
        self.airports.get(iata)
    }

    /// Iterate over all airports in no particular order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Look up an airport from user input, trimming and upper-casing the code.
    ///
    /// Unknown codes fail with [`Error::UnknownAirport`] carrying close matches.
    pub fn resolve(&self, code: &str) -> Result<&Airport> {
        let normalized = normalize_iata(code);
        self.airports
            .get(&normalized)
            .ok_or_else(|| Error::UnknownAirport {
                suggestions: self.fuzzy_airport_matches(code, 3),
                iata: normalized,
            })
    }

    /// IATA codes of the airports that most resemble `query`.
    ///
    /// The query is compared against codes, cities and airport names.
    pub fn fuzzy_airport_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let code = normalize_iata(query);
        let lowered = query.trim().to_lowercase();

        let mut scored: Vec<(f64, &str)> = self
            .airports
            .values()
            .map(|airport| {
                let score = strsim::jaro_winkler(&code, &airport.iata)
                    .max(strsim::jaro_winkler(&lowered, &airport.city.to_lowercase()))
                    .max(strsim::jaro_winkler(&lowered, &airport.name.to_lowercase()));
                (score, airport.iata.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, iata)| iata.to_string())
            .collect()
    }

    /// Outbound routes of an airport.
    pub fn routes_from(&self, iata: &str) -> Result<&[Route]> {
        self.airports
            .get(iata)
            .map(Airport::routes)
            .ok_or_else(|| Error::UnknownAirport {
                iata: iata.to_string(),
                suggestions: Vec::new(),
            })
    }

    /// Destinations reachable with one direct flight.
    pub fn neighbors(&self, iata: &str) -> Result<Vec<&str>> {
        Ok(self
            .routes_from(iata)?
            .iter()
            .map(|route| route.destination.as_str())
            .collect())
    }

    /// All routes arriving at `iata`, ordered by source code.
    pub fn routes_to(&self, iata: &str) -> Vec<&Route> {
        self.inbound
            .get(iata)
            .into_iter()
            .flatten()
            .filter_map(|source| self.route(source, iata))
            .collect()
    }

    /// `true` when at least one route arrives at `iata`.
    pub fn has_inbound_routes(&self, iata: &str) -> bool {
        self.inbound
            .get(iata)
            .is_some_and(|sources| !sources.is_empty())
    }

    /// `true` when at least one route departs from `iata`.
    pub fn has_outbound_routes(&self, iata: &str) -> bool {
        self.airports
            .get(iata)
            .is_some_and(|airport| !airport.routes().is_empty())
    }

    /// Direct route between two airports, if scheduled.
    pub fn route(&self, source: &str, destination: &str) -> Option<&Route> {
        self.airports.get(source)?.route_to(destination)
    }

    /// Weight of the direct route, or `+inf` when there is no scheduled connection.
    pub fn weight(&self, source: &str, destination: &str, kind: WeightKind) -> f64 {
        self.route(source, destination)
            .map(|route| route.weight(kind))
            .unwrap_or(f64::INFINITY)
    }

    /// Distance of the direct route, else the great-circle distance between
    /// the two airports. `+inf` only when either airport is unknown.
    pub fn distance(&self, source: &str, destination: &str) -> f64 {
        if let Some(route) = self.route(source, destination) {
            return route.weights.distance;
        }
        match (self.airports.get(source), self.airports.get(destination)) {
            (Some(from), Some(to)) => from.position.distance_to(&to.position),
            _ => f64::INFINITY,
        }
    }

    /// Closest other airport to `target`, measured with [`FlightGraph::distance`].
    pub fn nearest_airport(&self, target: &str) -> Option<&str> {
        self.nearest_airport_excluding(target, &HashSet::new())
    }

    /// Like [`FlightGraph::nearest_airport`], skipping the airports in `excluded`.
    ///
    /// Equal distances are broken by IATA code so the answer is stable.
    pub fn nearest_airport_excluding(
        &self,
        target: &str,
        excluded: &HashSet<String>,
    ) -> Option<&str> {
        let mut nearest: Option<(f64, &str)> = None;
        for iata in self.airports.keys() {
            if iata == target || excluded.contains(iata) {
                continue;
            }
            let distance = self.distance(iata, target);
            if !distance.is_finite() {
                continue;
            }
            let closer = match nearest {
                None => true,
                Some((best, best_iata)) => match distance.total_cmp(&best) {
                    Ordering::Less => true,
                    Ordering::Equal => iata.as_str() < best_iata,
                    Ordering::Greater => false,
                },
            };
            if closer {
                nearest = Some((distance, iata.as_str()));
            }
        }
        nearest.map(|(_, iata)| iata)
    }

    /// Describe a path hop by hop.
    ///
    /// Cost and duration come from the scheduled routes (`+inf` for a hop
    /// without one); distance falls back to the great-circle distance. Every
    /// hop except the last is charged a [`LAYOVER_HOURS`] connection.
    pub fn route_information(&self, path: &[String]) -> Result<RouteInformation> {
        if path.len() < 2 {
            return Err(Error::InvalidPath { len: path.len() });
        }

        let last_hop = path.len() - 2;
        let segments = path
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                let (from, to) = (pair[0].as_str(), pair[1].as_str());
                Segment {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance: self.distance(from, to),
                    cost: self.weight(from, to, WeightKind::Cost),
                    duration: self.weight(from, to, WeightKind::Duration),
                    layover: if index < last_hop { LAYOVER_HOURS } else { 0.0 },
                }
            })
            .collect();

        Ok(RouteInformation::from_segments(path.to_vec(), segments))
    }

    /// Airports grouped by country as sorted `Name (IATA)` labels.
    pub fn airports_by_country(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for airport in self.airports.values() {
            grouped
                .entry(airport.country.clone())
                .or_default()
                .push(airport.label());
        }
        for labels in grouped.values_mut() {
            labels.sort();
        }
        grouped
    }
}

/// Canonical form of a user-supplied IATA code.
pub(crate) fn normalize_iata(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
