// Test-only helpers for `flightgraph-lib` unit tests
#![allow(dead_code)]

use crate::airport::{Airport, RouteWeights};
use crate::geo::Coordinates;
use crate::graph::FlightGraph;

/// Airport with placeholder metadata at the given position.
pub fn airport(iata: &str, latitude: f64, longitude: f64) -> Airport {
    Airport::new(
        iata,
        format!("{iata} Airport"),
        format!("{iata} City"),
        "Testland",
        Coordinates::new(latitude, longitude),
    )
}

/// Route weights derived from a distance the same way the fixture dataset was.
pub fn weights(distance: f64) -> RouteWeights {
    RouteWeights::new(
        distance,
        crate::estimate::estimate_cost(distance),
        crate::estimate::estimate_duration(distance),
    )
}

/// In-memory copy of `docs/fixtures`: a small European network.
///
/// `UHE` and `BOJ` have no inbound routes, `KIR` has no routes at all.
pub fn sample_graph() -> FlightGraph {
    let airports = [
        ("LHR", 51.4706, -0.461941),
        ("AMS", 52.308601, 4.76389),
        ("ZRH", 47.464699, 8.54917),
        ("SUF", 38.905399, 16.2423),
        ("MXP", 45.6306, 8.72811),
        ("CDG", 49.012798, 2.55),
        ("FCO", 41.8002778, 12.2388889),
        ("VIE", 48.110298, 16.5697),
        ("UHE", 49.029499, 17.4397),
        ("BOJ", 42.569599, 27.5152),
        ("KIR", 52.180901, -9.52378),
    ];
    let routes = [
        ("LHR", "AMS", 370.4488),
        ("AMS", "LHR", 370.4488),
        ("AMS", "ZRH", 602.8329),
        ("ZRH", "AMS", 602.8329),
        ("ZRH", "SUF", 1136.6474),
        ("LHR", "MXP", 936.3762),
        ("MXP", "SUF", 969.4031),
        ("LHR", "CDG", 347.1675),
        ("CDG", "LHR", 347.1675),
        ("CDG", "FCO", 1100.6940),
        ("FCO", "SUF", 467.5528),
        ("CDG", "ZRH", 476.3092),
        ("MXP", "FCO", 510.7765),
        ("ZRH", "VIE", 603.2165),
        ("VIE", "ZRH", 603.2165),
        ("BOJ", "FCO", 1259.8541),
        ("SUF", "FCO", 467.5528),
        ("FCO", "CDG", 1100.6940),
    ];

    let mut builder = FlightGraph::builder();
    for (iata, latitude, longitude) in airports {
        builder.add_airport(airport(iata, latitude, longitude));
    }
    for (source, destination, distance) in routes {
        builder.add_route(source, destination, weights(distance));
    }
    builder.build()
}
