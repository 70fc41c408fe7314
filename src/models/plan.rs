//! Complete result of one optimization run.

use super::{Leg, RouteMetrics};
use crate::graph::SpanningTree;

/// The unrounded output of the MST routing pipeline.
///
/// Holds the visiting order, its legs, the aggregate metrics, and the
/// spanning tree the order was derived from.
///
/// # Examples
///
/// ```
/// use eco_route::config::OptimizerConfig;
/// use eco_route::models::Point;
/// use eco_route::optimizer::MstOptimizer;
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 0.01)];
/// let plan = MstOptimizer::new(OptimizerConfig::default()).optimize(&points);
/// assert_eq!(plan.order(), &[0, 1]);
/// assert_eq!(plan.num_legs(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    order: Vec<usize>,
    legs: Vec<Leg>,
    metrics: RouteMetrics,
    tree: SpanningTree,
}

impl RoutePlan {
    /// Creates a plan from its computed parts.
    pub fn new(order: Vec<usize>, legs: Vec<Leg>, metrics: RouteMetrics, tree: SpanningTree) -> Self {
        Self {
            order,
            legs,
            metrics,
            tree,
        }
    }

    /// Visiting order as point indices, starting at the depot.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Legs in travel order, including the closing leg if requested.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn num_legs(&self) -> usize {
        self.legs.len()
    }

    pub fn metrics(&self) -> &RouteMetrics {
        &self.metrics
    }

    /// Spanning tree the order was linearized from.
    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    pub fn total_distance_km(&self) -> f64 {
        self.metrics.total_distance_km
    }

    pub fn total_duration_min(&self) -> f64 {
        self.metrics.total_duration_min
    }

    pub fn co2_kg(&self) -> f64 {
        self.metrics.co2_kg
    }

    /// Returns `true` if the last leg returns to the first point of the order.
    pub fn is_closed(&self) -> bool {
        match (self.order.first(), self.legs.last()) {
            (Some(&first), Some(last)) => self.order.len() > 1 && last.to_index == first,
            _ => false,
        }
    }
}
