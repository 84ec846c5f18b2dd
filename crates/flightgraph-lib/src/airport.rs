//! Airport nodes and the directed routes they own.

use std::fmt;

use serde::Serialize;

use crate::geo::Coordinates;

/// Attribute of a route that searches can minimise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightKind {
    /// Flown distance in kilometres.
    Distance,
    /// Ticket cost in currency units.
    Cost,
    /// Flight time in hours.
    Duration,
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            WeightKind::Distance => "distance",
            WeightKind::Cost => "cost",
            WeightKind::Duration => "duration",
        };
        f.write_str(value)
    }
}

/// Numeric weights carried by every route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteWeights {
    pub distance: f64,
    pub cost: f64,
    pub duration: f64,
}

impl RouteWeights {
    pub fn new(distance: f64, cost: f64, duration: f64) -> Self {
        Self {
            distance,
            cost,
            duration,
        }
    }

    /// Look up a weight by kind.
    pub fn get(&self, kind: WeightKind) -> f64 {
        match kind {
            WeightKind::Distance => self.distance,
            WeightKind::Cost => self.cost,
            WeightKind::Duration => self.duration,
        }
    }
}

/// Directed scheduled connection owned by its source airport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub source: String,
    pub destination: String,
    pub weights: RouteWeights,
}

impl Route {
    pub fn weight(&self, kind: WeightKind) -> f64 {
        self.weights.get(kind)
    }
}

/// Airport node together with its outbound routes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub position: Coordinates,
    #[serde(skip)]
    pub(crate) routes: Vec<Route>,
}

impl Airport {
    /// Create an airport without any routes. Routes are attached by the graph builder.
    pub fn new(
        iata: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        position: Coordinates,
    ) -> Self {
        Self {
            iata: iata.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            position,
            routes: Vec::new(),
        }
    }

    /// Outbound routes in the order they were loaded.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Direct route to `destination`, if one is scheduled.
    pub fn route_to(&self, destination: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.destination == destination)
    }

    /// Label used by airport pickers, e.g. `Zurich Airport (ZRH)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.iata)
    }

    /// Insert a route, replacing an existing one to the same destination.
    ///
    /// Returns `true` when an earlier route was replaced.
    pub(crate) fn upsert_route(&mut self, route: Route) -> bool {
        if let Some(existing) = self
            .routes
            .iter_mut()
            .find(|existing| existing.destination == route.destination)
        {
            *existing = route;
            return true;
        }
        self.routes.push(route);
        false
    }
}
