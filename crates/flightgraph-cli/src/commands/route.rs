//! Route command handler for computing itineraries between airports.

use anyhow::{Context, Result};
use clap::Args;

use flightgraph_cli::output::OutputFormat;
use flightgraph_lib::{
    find_route, Error as RouteError, FlightGraph, RouteCriterion, RouteRequest, RouteSummary,
};

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteCommandArgs {
    /// Departure airport IATA code.
    #[arg(long = "from")]
    pub from: String,
    /// Arrival airport IATA code.
    #[arg(long = "to")]
    pub to: String,
    /// What to minimise: optimal, shortest-distance, least-cost,
    /// shortest-duration or least-layovers.
    #[arg(long, default_value = "optimal", value_parser = parse_criterion)]
    pub criterion: RouteCriterion,
    /// Intermediate stops visited in order (repeat the flag or separate with commas).
    #[arg(long = "via", value_delimiter = ',')]
    pub via: Vec<String>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(&self.from, &self.to, self.criterion).with_stops(self.via.iter().cloned())
    }
}

fn parse_criterion(value: &str) -> std::result::Result<RouteCriterion, String> {
    value.parse().map_err(|err: RouteError| err.to_string())
}

/// Handle the route subcommand.
pub fn handle_route_command(
    graph: &FlightGraph,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let request = args.to_request();
    let route = match find_route(graph, &request) {
        Ok(route) => route,
        Err(err) => return Err(handle_route_failure(&request, err)),
    };

    let summary = RouteSummary::from_route(request.criterion, graph, &route)
        .context("failed to build route summary for display")?;
    print!("{}", format.render_route(&summary)?);
    Ok(())
}

fn handle_route_failure(request: &RouteRequest, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownAirport { iata, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&iata, &suggestions))
        }
        RouteError::UnknownSource { iata } => {
            anyhow::anyhow!("No flights depart from {iata}. Choose another departure airport.")
        }
        RouteError::SameEndpoints { iata } => {
            anyhow::anyhow!("The itinerary visits {iata} twice in a row. Remove the repeated stop.")
        }
        RouteError::NoRoute {
            origin,
            destination,
        } => anyhow::anyhow!(format_route_not_found_message(
            &origin,
            &destination,
            request
        )),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_airport_message(iata: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{iata}'.");
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {joined}?"));
        }
    }
    message
}

fn format_route_not_found_message(origin: &str, destination: &str, request: &RouteRequest) -> String {
    let mut message = format!(
        "No route found between {origin} and {destination}, and no nearby airport could be reached instead."
    );
    if request.via.is_empty() {
        message.push_str(" Try a different destination.");
    } else {
        message.push_str(" Try removing or changing the --via stops.");
    }
    message
}
