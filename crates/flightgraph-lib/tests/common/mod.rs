#![allow(dead_code)]

use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use flightgraph_lib::{
    load_dataset, Airport, Coordinates, DatasetPaths, FlightGraph, RouteWeights, LAYOVER_HOURS,
};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Graph loaded from the checked-in fixture dataset.
pub fn fixture_graph() -> FlightGraph {
    let dataset = load_dataset(&DatasetPaths::in_dir(fixtures_dir()));
    assert!(
        dataset.is_clean(),
        "fixture dataset has issues: {:?}",
        dataset.issues
    );
    dataset.graph
}

pub fn path(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|code| code.to_string()).collect()
}

pub fn node_code(index: usize) -> String {
    format!("N{index:02}")
}

/// Random directed network with independent distance, cost and duration weights.
pub fn random_graph(seed: u64, nodes: usize, density: f64) -> FlightGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut builder = FlightGraph::builder();
    for index in 0..nodes {
        let position = Coordinates::new(
            rng.random_range(-60.0..60.0),
            rng.random_range(-150.0..150.0),
        );
        builder.add_airport(Airport::new(
            node_code(index),
            format!("Node {index}"),
            format!("City {index}"),
            "Testland",
            position,
        ));
    }
    for source in 0..nodes {
        for destination in 0..nodes {
            if source != destination && rng.random_bool(density) {
                let weights = RouteWeights::new(
                    rng.random_range(100.0..2000.0),
                    rng.random_range(20.0..500.0),
                    rng.random_range(0.5..6.0),
                );
                builder.add_route(node_code(source), node_code(destination), weights);
            }
        }
    }
    builder.build()
}

/// Best values over every simple path between two airports.
#[derive(Debug, Clone, Copy)]
pub struct Optimum {
    pub distance: f64,
    pub cost: f64,
    /// Flight time plus a layover at every connection.
    pub duration: f64,
    pub hops: usize,
}

/// Enumerate all simple paths from `start` to `goal`; `None` when unreachable.
pub fn brute_force_optimum(graph: &FlightGraph, start: &str, goal: &str) -> Option<Optimum> {
    let mut best: Option<Optimum> = None;
    let mut stack = vec![start.to_string()];
    explore(graph, goal, &mut stack, &mut best);
    best
}

fn explore(graph: &FlightGraph, goal: &str, stack: &mut Vec<String>, best: &mut Option<Optimum>) {
    let current = stack.last().cloned().unwrap_or_default();
    if current == goal {
        let totals = path_totals(graph, stack);
        *best = Some(match *best {
            None => totals,
            Some(previous) => Optimum {
                distance: previous.distance.min(totals.distance),
                cost: previous.cost.min(totals.cost),
                duration: previous.duration.min(totals.duration),
                hops: previous.hops.min(totals.hops),
            },
        });
        return;
    }

    let neighbors: Vec<String> = graph
        .neighbors(&current)
        .unwrap_or_default()
        .into_iter()
        .map(str::to_string)
        .collect();
    for next in neighbors {
        if stack.contains(&next) {
            continue;
        }
        stack.push(next);
        explore(graph, goal, stack, best);
        stack.pop();
    }
}

/// Totals of an existing path, weighted the way the searches weigh it.
pub fn path_totals(graph: &FlightGraph, path: &[String]) -> Optimum {
    let mut totals = Optimum {
        distance: 0.0,
        cost: 0.0,
        duration: 0.0,
        hops: path.len().saturating_sub(1),
    };
    for pair in path.windows(2) {
        let route = graph
            .route(&pair[0], &pair[1])
            .unwrap_or_else(|| panic!("no route {} -> {}", pair[0], pair[1]));
        totals.distance += route.weights.distance;
        totals.cost += route.weights.cost;
        totals.duration += route.weights.duration;
    }
    totals.duration += LAYOVER_HOURS * path.len().saturating_sub(2) as f64;
    totals
}
