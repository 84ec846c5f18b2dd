//! Route descriptions returned to callers and the multi-leg composer.
//!
//! A [`RouteInformation`] is built from a raw path by
//! [`FlightGraph::route_information`](crate::graph::FlightGraph::route_information)
//! and, for itineraries with intermediate stops, several single-leg results
//! are chained together with [`compose_legs`].

use serde::Serialize;

use crate::error::{Error, Result};

/// Fixed connection time charged at every intermediate airport, in hours.
pub const LAYOVER_HOURS: f64 = 2.0;

/// One direct hop of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    /// Kilometres flown on this hop.
    pub distance: f64,
    pub cost: f64,
    /// Flight time in hours, excluding the layover.
    pub duration: f64,
    /// Connection time spent at `to` before the next hop (zero on a final hop).
    pub layover: f64,
}

/// Destination substitution applied by the rerouting fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reroute {
    pub requested: String,
    pub substitute: String,
}

/// Fully described route between two airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInformation {
    pub path: Vec<String>,
    pub segments: Vec<Segment>,
    pub total_stops: usize,
    pub total_distance: f64,
    pub total_cost: f64,
    /// Flight time plus layovers, in hours.
    pub total_duration: f64,
    pub total_layover_time: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reroutes: Vec<Reroute>,
}

impl RouteInformation {
    /// Build a route from its path and per-hop segments, computing the totals.
    pub(crate) fn from_segments(path: Vec<String>, segments: Vec<Segment>) -> Self {
        let total_distance = segments.iter().map(|s| s.distance).sum();
        let total_cost = segments.iter().map(|s| s.cost).sum();
        let total_layover_time: f64 = segments.iter().map(|s| s.layover).sum();
        let flight_time: f64 = segments.iter().map(|s| s.duration).sum();

        Self {
            total_stops: path.len().saturating_sub(2),
            path,
            segments,
            total_distance,
            total_cost,
            total_duration: flight_time + total_layover_time,
            total_layover_time,
            reroutes: Vec::new(),
        }
    }

    /// First airport of the route.
    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Airport the route actually arrives at (after any rerouting).
    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of direct hops.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `true` when the fallback replaced the requested destination.
    pub fn was_rerouted(&self) -> bool {
        !self.reroutes.is_empty()
    }

    /// Total duration rendered as `HH:MM`.
    pub fn formatted_duration(&self) -> String {
        format_duration(self.total_duration)
    }

    /// Total layover time rendered as `HH:MM`.
    pub fn formatted_layover_time(&self) -> String {
        format_duration(self.total_layover_time)
    }
}

/// Chain single-leg results into one itinerary.
///
/// Paths are joined without repeating the junction airport, segments are
/// concatenated and totals summed. Stops are counted on the joined path, so
/// every intermediate stop counts once.
pub fn compose_legs(legs: Vec<RouteInformation>) -> Result<RouteInformation> {
    let mut legs = legs.into_iter();
    let Some(first) = legs.next() else {
        return Err(Error::InvalidPath { len: 0 });
    };

    let mut itinerary = first;
    for leg in legs {
        itinerary.path.extend(leg.path.into_iter().skip(1));
        itinerary.segments.extend(leg.segments);
        itinerary.total_distance += leg.total_distance;
        itinerary.total_cost += leg.total_cost;
        itinerary.total_duration += leg.total_duration;
        itinerary.total_layover_time += leg.total_layover_time;
        itinerary.reroutes.extend(leg.reroutes);
    }

    if itinerary.path.len() < 2 {
        return Err(Error::InvalidPath {
            len: itinerary.path.len(),
        });
    }
    itinerary.total_stops = itinerary.path.len() - 2;
    Ok(itinerary)
}

/// Render a duration in hours as `HH:MM`, truncating partial minutes.
pub fn format_duration(hours: f64) -> String {
    if !hours.is_finite() || hours < 0.0 {
        return "--:--".to_string();
    }
    let whole = hours.trunc();
    let minutes = ((hours - whole) * 60.0).trunc();
    format!("{:02}:{:02}", whole as u64, minutes as u64)
}
