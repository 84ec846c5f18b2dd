mod common;

use common::{brute_force_optimum, node_code, path_totals, random_graph};
use flightgraph_lib::{select_planner, FlightGraph, RouteCriterion, RoutePlanner};

const EPSILON: f64 = 1e-9;

fn assert_valid_path(graph: &FlightGraph, path: &[String], start: &str, goal: &str) {
    assert_eq!(path.first().map(String::as_str), Some(start));
    assert_eq!(path.last().map(String::as_str), Some(goal));
    for pair in path.windows(2) {
        assert!(
            graph.route(&pair[0], &pair[1]).is_some(),
            "path {path:?} uses missing route {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

/// Runs `check` for every ordered pair of distinct airports in a batch of
/// random graphs with up to ten airports.
fn for_each_query(mut check: impl FnMut(&FlightGraph, &str, &str)) {
    for seed in 1..=40u64 {
        let nodes = 4 + (seed as usize % 7);
        let graph = random_graph(seed, nodes, 0.3);
        for source in 0..nodes {
            for destination in 0..nodes {
                if source != destination {
                    check(&graph, &node_code(source), &node_code(destination));
                }
            }
        }
    }
}

#[test]
fn weighted_searches_match_exhaustive_minimum() {
    let criteria = [
        RouteCriterion::ShortestDistance,
        RouteCriterion::LeastCost,
        RouteCriterion::ShortestDuration,
    ];

    for_each_query(|graph, start, goal| {
        let optimum = brute_force_optimum(graph, start, goal);
        for criterion in criteria {
            let found = select_planner(criterion).find_path(graph, start, goal);
            match (optimum, found) {
                (None, None) => {}
                (Some(best), Some(path)) => {
                    assert_valid_path(graph, &path, start, goal);
                    let totals = path_totals(graph, &path);
                    let (got, expected) = match criterion {
                        RouteCriterion::ShortestDistance => (totals.distance, best.distance),
                        RouteCriterion::LeastCost => (totals.cost, best.cost),
                        _ => (totals.duration, best.duration),
                    };
                    assert!(
                        got <= expected + EPSILON,
                        "{criterion} {start}->{goal}: found {got}, best {expected}"
                    );
                }
                (optimum, found) => panic!(
                    "{criterion} {start}->{goal}: reachability mismatch ({optimum:?} vs {found:?})"
                ),
            }
        }
    });
}

#[test]
fn layover_search_uses_fewest_hops() {
    for_each_query(|graph, start, goal| {
        let optimum = brute_force_optimum(graph, start, goal);
        let found = select_planner(RouteCriterion::LeastLayovers).find_path(graph, start, goal);
        match (optimum, found) {
            (None, None) => {}
            (Some(best), Some(path)) => {
                assert_valid_path(graph, &path, start, goal);
                assert_eq!(path.len() - 1, best.hops, "{start}->{goal}: {path:?}");
            }
            (optimum, found) => panic!("{start}->{goal}: {optimum:?} vs {found:?}"),
        }
    });
}

#[test]
fn combined_search_finds_a_path_whenever_one_exists() {
    for_each_query(|graph, start, goal| {
        let reachable = brute_force_optimum(graph, start, goal).is_some();
        let found = select_planner(RouteCriterion::Optimal).find_path(graph, start, goal);
        assert_eq!(found.is_some(), reachable, "{start}->{goal}");
        if let Some(path) = found {
            assert_valid_path(graph, &path, start, goal);
            let mut seen = std::collections::HashSet::new();
            assert!(
                path.iter().all(|code| seen.insert(code)),
                "combined search revisited an airport: {path:?}"
            );
        }
    });
}

#[test]
fn duration_results_charge_one_layover_per_stop() {
    for_each_query(|graph, start, goal| {
        let Some(path) = select_planner(RouteCriterion::ShortestDuration).find_path(graph, start, goal)
        else {
            return;
        };
        let info = graph.route_information(&path).expect("valid path");
        assert_eq!(info.total_stops, path.len() - 2);
        assert!(
            (info.total_layover_time - 2.0 * info.total_stops as f64).abs() < EPSILON,
            "{info:?}"
        );
        let flight_time: f64 = info.segments.iter().map(|s| s.duration).sum();
        assert!((info.total_duration - flight_time - info.total_layover_time).abs() < EPSILON);
    });
}
