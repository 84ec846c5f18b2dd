use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::itinerary::{format_duration, Reroute, RouteInformation, Segment};
use crate::routing::RouteCriterion;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Airport visited by a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStop {
    pub index: usize,
    pub iata: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl RouteStop {
    fn display_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{name} ({})", self.iata),
            None => self.iata.clone(),
        }
    }
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub criterion: RouteCriterion,
    pub stops: Vec<RouteStop>,
    pub segments: Vec<Segment>,
    pub total_stops: usize,
    pub total_distance: f64,
    pub total_cost: f64,
    pub total_duration: f64,
    pub total_layover_time: f64,
    /// `total_duration` as `HH:MM`.
    pub formatted_duration: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reroutes: Vec<Reroute>,
}

impl RouteSummary {
    /// Convert a [`RouteInformation`] into a summary with resolved airport names.
    pub fn from_route(
        criterion: RouteCriterion,
        graph: &FlightGraph,
        route: &RouteInformation,
    ) -> Result<Self> {
        if route.path.len() < 2 {
            return Err(Error::InvalidPath {
                len: route.path.len(),
            });
        }

        let stops = route
            .path
            .iter()
            .enumerate()
            .map(|(index, iata)| {
                let airport = graph.airport(iata);
                RouteStop {
                    index,
                    iata: iata.clone(),
                    name: airport.map(|a| a.name.clone()),
                    city: airport.map(|a| a.city.clone()),
                }
            })
            .collect();

        Ok(Self {
            criterion,
            stops,
            segments: route.segments.clone(),
            total_stops: route.total_stops,
            total_distance: route.total_distance,
            total_cost: route.total_cost,
            total_duration: route.total_duration,
            total_layover_time: route.total_layover_time,
            formatted_duration: route.formatted_duration(),
            reroutes: route.reroutes.clone(),
        })
    }

    fn endpoint_codes(&self) -> (&str, &str) {
        let origin = self.stops.first().map_or("?", |stop| stop.iata.as_str());
        let destination = self.stops.last().map_or("?", |stop| stop.iata.as_str());
        (origin, destination)
    }

    fn endpoint_names(&self) -> (String, String) {
        let origin = self.stops.first().map(RouteStop::display_name);
        let destination = self.stops.last().map(RouteStop::display_name);
        (
            origin.unwrap_or_else(|| "?".to_string()),
            destination.unwrap_or_else(|| "?".to_string()),
        )
    }

    fn stops_label(&self) -> String {
        match self.total_stops {
            0 => "direct".to_string(),
            1 => "1 stop".to_string(),
            n => format!("{n} stops"),
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let (origin, destination) = self.endpoint_codes();
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route ({}): {} -> {} ({})",
            self.criterion,
            origin,
            destination,
            self.stops_label()
        );

        for segment in &self.segments {
            let _ = writeln!(
                buffer,
                "  {} -> {}  {:>8.1} km  {:>8.2}  {}",
                segment.from,
                segment.to,
                segment.distance,
                segment.cost,
                format_duration(segment.duration)
            );
        }

        let _ = writeln!(
            buffer,
            "Total: {:.1} km, cost {:.2}, duration {} (layovers {})",
            self.total_distance,
            self.total_cost,
            self.formatted_duration,
            format_duration(self.total_layover_time)
        );
        for reroute in &self.reroutes {
            let _ = writeln!(
                buffer,
                "Note: {} is unreachable; rerouted to {}",
                reroute.requested, reroute.substitute
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let (origin, destination) = self.endpoint_names();
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({}, criterion: `{}`)",
            origin,
            destination,
            self.stops_label(),
            self.criterion
        );
        for stop in &self.stops {
            let city = stop.city.as_deref().unwrap_or("");
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** {}",
                stop.index,
                stop.display_name(),
                city
            );
        }
        let _ = writeln!(
            buffer,
            "\n| Distance | Cost | Duration | Layovers |\n|---:|---:|---:|---:|\n| {:.1} km | {:.2} | {} | {} |",
            self.total_distance,
            self.total_cost,
            self.formatted_duration,
            format_duration(self.total_layover_time)
        );
        for reroute in &self.reroutes {
            let _ = writeln!(
                buffer,
                "> `{}` is unreachable; rerouted to `{}`",
                reroute.requested, reroute.substitute
            );
        }
        buffer
    }
}
