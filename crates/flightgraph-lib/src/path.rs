use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::airport::{Route, WeightKind};
use crate::graph::FlightGraph;
use crate::itinerary::LAYOVER_HOURS;

/// Weight a search assigns to a single hop.
///
/// The optional layover is added to every hop whose target is not the goal,
/// so a path with `n` stops carries exactly `n` layovers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCost {
    pub kind: WeightKind,
    pub layover: Option<f64>,
}

impl EdgeCost {
    /// Plain route weight with no per-hop penalty.
    pub fn of(kind: WeightKind) -> Self {
        Self {
            kind,
            layover: None,
        }
    }

    /// Flight time plus the standard layover at every connection.
    pub fn duration_with_layovers() -> Self {
        Self {
            kind: WeightKind::Duration,
            layover: Some(LAYOVER_HOURS),
        }
    }

    fn hop_weight(&self, route: &Route, goal: &str) -> f64 {
        let penalty = match self.layover {
            Some(hours) if route.destination != goal => hours,
            _ => 0.0,
        };
        route.weight(self.kind) + penalty
    }
}

/// Find the path with the fewest hops using breadth-first search.
///
/// Returns `None` when `start` is unknown or `goal` is unreachable.
pub fn find_route_bfs(graph: &FlightGraph, start: &str, goal: &str) -> Option<Vec<String>> {
    let start = graph.airport(start)?.iata.as_str();
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for route in outbound(graph, current) {
            let next = route.destination.as_str();
            if visited.insert(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Run Dijkstra's algorithm minimising the accumulated [`EdgeCost`].
///
/// Stale frontier entries are skipped when popped and the search stops as
/// soon as the goal leaves the frontier.
pub fn find_route_dijkstra(
    graph: &FlightGraph,
    start: &str,
    goal: &str,
    cost: &EdgeCost,
) -> Option<Vec<String>> {
    let start = graph.airport(start)?.iata.as_str();
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current_distance = entry.cost.0;
        if distances
            .get(entry.node)
            .is_some_and(|best| *best < current_distance)
        {
            continue;
        }

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for route in outbound(graph, entry.node) {
            let next = route.destination.as_str();
            let next_cost = current_distance + cost.hop_weight(route, goal);
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// Run the combined-score search used for "optimal" routes.
///
/// Each frontier entry carries a priority `g + h`, where `h` is the hop's
/// cost plus its duration (plus a layover unless the hop reaches the goal).
/// A neighbour's `g` is the popped priority plus the hop distance, so the
/// cost and duration scores of every earlier hop stay in the running total.
/// Entries are expanded even when a better `g` was recorded after they were
/// queued. The result balances distance, price and time rather than
/// minimising any one of them.
pub fn find_route_combined(graph: &FlightGraph, start: &str, goal: &str) -> Option<Vec<String>> {
    let start = graph.airport(start)?.iata.as_str();
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut g_score: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start, 0.0);
    queue.push(AStarEntry::new(start, 0.0, 0.0));

    while let Some(entry) = queue.pop() {
        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        let current_priority = entry.priority.0;
        for route in outbound(graph, entry.node) {
            let next = route.destination.as_str();
            let tentative_g = current_priority + route.weights.distance;
            if tentative_g < *g_score.get(next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative_g);
                parents.insert(next, entry.node);
                queue.push(AStarEntry::new(
                    next,
                    tentative_g,
                    combined_heuristic(route, goal),
                ));
            }
        }
    }

    None
}

fn combined_heuristic(route: &Route, goal: &str) -> f64 {
    let mut duration = route.weights.duration;
    if route.destination != goal {
        duration += LAYOVER_HOURS;
    }
    route.weights.cost + duration
}

fn outbound<'a>(graph: &'a FlightGraph, iata: &str) -> &'a [Route] {
    graph
        .airport(iata)
        .map(|airport| airport.routes())
        .unwrap_or(&[])
}

fn reconstruct_path(parents: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.to_string());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry<'a> {
    node: &'a str,
    priority: FloatOrd,
}

impl<'a> AStarEntry<'a> {
    fn new(node: &'a str, g: f64, heuristic: f64) -> Self {
        Self {
            node,
            priority: FloatOrd(g + heuristic),
        }
    }
}

impl Ord for AStarEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for AStarEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
