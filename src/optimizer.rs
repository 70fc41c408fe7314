//! MST routing pipeline.
//!
//! # Algorithm
//!
//! 1. Build the haversine distance matrix over depot + stops.
//! 2. Build the minimum spanning tree of the complete graph (Kruskal).
//! 3. Linearize the tree by DFS preorder from the depot.
//! 4. Walk the order to produce legs, durations, totals and CO2.
//!
//! Shortcutting a preorder walk of an MST is the classic 2-approximation for
//! metric TSP: the route is at most twice the optimal tour length.
//!
//! # Complexity
//!
//! O(n² log n) time and O(n²) memory for n points.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use log::debug;

use crate::config::OptimizerConfig;
use crate::distance::DistanceMatrix;
use crate::evaluation::RouteAssembler;
use crate::geometry::{mst_geojson, route_geojson, FeatureCollection};
use crate::graph::{dfs_preorder, SpanningTree};
use crate::models::{Point, RouteMetrics, RoutePlan};

/// Runs the MST routing pipeline with a fixed configuration.
///
/// Stateless between runs; one instance may be shared across threads.
///
/// # Examples
///
/// ```
/// use eco_route::config::OptimizerConfig;
/// use eco_route::models::Point;
/// use eco_route::optimizer::MstOptimizer;
///
/// let points = vec![
///     Point::new(0.0, 0.0), // depot
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let optimizer = MstOptimizer::new(OptimizerConfig::default().with_average_speed_kmh(30.0));
/// let plan = optimizer.optimize(&points);
///
/// assert_eq!(plan.order()[0], 0);
/// assert_eq!(plan.order().len(), 4);
/// assert_eq!(plan.num_legs(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MstOptimizer {
    config: OptimizerConfig,
}

impl MstOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Computes the route over `points`, with the depot at index 0.
    ///
    /// An empty point set yields an empty plan.
    pub fn optimize(&self, points: &[Point]) -> RoutePlan {
        let n = points.len();
        if n == 0 {
            return RoutePlan::new(
                Vec::new(),
                Vec::new(),
                RouteMetrics::default(),
                SpanningTree::empty(0),
            );
        }

        let distances = DistanceMatrix::from_points(points);
        let tree = SpanningTree::from_matrix(&distances);
        let order = dfs_preorder(&tree.adjacency(), 0);
        let (legs, metrics) = RouteAssembler::new(&distances, &self.config).assemble(&order);

        debug!(
            "route over {} points: {} legs, {:.4} km, {:.2} min, {:.3} kg CO2",
            n,
            legs.len(),
            metrics.total_distance_km,
            metrics.total_duration_min,
            metrics.co2_kg
        );
        RoutePlan::new(order, legs, metrics, tree)
    }

    /// Route geometry for a plan computed over the same `points`.
    pub fn route_geometry(&self, points: &[Point], plan: &RoutePlan) -> FeatureCollection {
        route_geojson(points, plan.order(), self.config.return_to_depot())
    }

    /// Spanning tree geometry for a plan computed over the same `points`.
    pub fn mst_geometry(&self, points: &[Point], plan: &RoutePlan) -> FeatureCollection {
        mst_geojson(points, plan.tree())
    }
}
