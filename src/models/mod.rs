//! Domain model types for MST-based route planning.
//!
//! Provides the geographic input points, the legs of a computed route,
//! aggregate route metrics, and the plan that ties a run's results together.

mod leg;
mod plan;
mod point;

pub use leg::{Leg, RouteMetrics};
pub use plan::RoutePlan;
pub use point::Point;
