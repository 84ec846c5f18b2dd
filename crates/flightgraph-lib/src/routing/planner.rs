//! Search strategies behind the [`RoutePlanner`] trait.
//!
//! Each criterion maps to one planner; [`select_planner`] is the only place
//! that knows the mapping, so the leg orchestration in the parent module
//! never branches on the criterion itself.

use crate::airport::WeightKind;
use crate::graph::FlightGraph;
use crate::path::{find_route_bfs, find_route_combined, find_route_dijkstra, EdgeCost};

use super::RouteCriterion;

/// Trait for route search strategies.
pub trait RoutePlanner: Send + Sync {
    /// The criterion this planner optimises.
    fn criterion(&self) -> RouteCriterion;

    /// Search for a path from `start` to `goal`.
    ///
    /// Returns `Some(path)` if `goal` is reachable, `None` otherwise.
    fn find_path(&self, graph: &FlightGraph, start: &str, goal: &str) -> Option<Vec<String>>;
}

/// Dijkstra planner minimising one route weight.
#[derive(Debug, Clone, Copy)]
pub struct WeightedPlanner {
    criterion: RouteCriterion,
    cost: EdgeCost,
}

impl WeightedPlanner {
    /// Minimise flown kilometres.
    pub fn distance() -> Self {
        Self {
            criterion: RouteCriterion::ShortestDistance,
            cost: EdgeCost::of(WeightKind::Distance),
        }
    }

    /// Minimise the summed ticket price.
    pub fn cost() -> Self {
        Self {
            criterion: RouteCriterion::LeastCost,
            cost: EdgeCost::of(WeightKind::Cost),
        }
    }

    /// Minimise flight time including a layover at every connection.
    pub fn duration() -> Self {
        Self {
            criterion: RouteCriterion::ShortestDuration,
            cost: EdgeCost::duration_with_layovers(),
        }
    }

    pub fn edge_cost(&self) -> EdgeCost {
        self.cost
    }
}

impl RoutePlanner for WeightedPlanner {
    fn criterion(&self) -> RouteCriterion {
        self.criterion
    }

    fn find_path(&self, graph: &FlightGraph, start: &str, goal: &str) -> Option<Vec<String>> {
        find_route_dijkstra(graph, start, goal, &self.cost)
    }
}

/// Breadth-first planner minimising the number of connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoverPlanner;

impl RoutePlanner for LayoverPlanner {
    fn criterion(&self) -> RouteCriterion {
        RouteCriterion::LeastLayovers
    }

    fn find_path(&self, graph: &FlightGraph, start: &str, goal: &str) -> Option<Vec<String>> {
        find_route_bfs(graph, start, goal)
    }
}

/// Combined distance/cost/duration planner behind the "optimal" criterion.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedPlanner;

impl RoutePlanner for CombinedPlanner {
    fn criterion(&self) -> RouteCriterion {
        RouteCriterion::Optimal
    }

    fn find_path(&self, graph: &FlightGraph, start: &str, goal: &str) -> Option<Vec<String>> {
        find_route_combined(graph, start, goal)
    }
}

/// Select the planner for a criterion.
pub fn select_planner(criterion: RouteCriterion) -> Box<dyn RoutePlanner> {
    match criterion {
        RouteCriterion::Optimal => Box::new(CombinedPlanner),
        RouteCriterion::ShortestDistance => Box::new(WeightedPlanner::distance()),
        RouteCriterion::LeastCost => Box::new(WeightedPlanner::cost()),
        RouteCriterion::ShortestDuration => Box::new(WeightedPlanner::duration()),
        RouteCriterion::LeastLayovers => Box::new(LayoverPlanner),
    }
}
