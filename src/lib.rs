//! # eco-route
//!
//! Approximate delivery routes over geographic stops: a haversine distance
//! matrix, a Kruskal minimum spanning tree, and a DFS preorder walk of that
//! tree from the depot, with per-leg durations, totals, a CO2 estimate, and
//! GeoJSON views of both the route and the tree.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Leg, RouteMetrics, RoutePlan)
//! - [`distance`] — Haversine distance and the dense distance matrix
//! - [`graph`] — Union-find, Kruskal MST, DFS preorder linearization
//! - [`evaluation`] — Leg and total computation from a visiting order
//! - [`geometry`] — GeoJSON export of the route and the spanning tree
//! - [`optimizer`] — The end-to-end pipeline
//! - [`config`] — Run options and their defaults
//! - [`request`] — Request validation and the rounded response contract
//! - [`error`] — Errors raised at the request boundary

pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod geometry;
pub mod graph;
pub mod models;
pub mod optimizer;
pub mod request;

pub use error::{Result, RouteError};
