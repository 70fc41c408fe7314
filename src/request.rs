//! Request/response contract around the routing pipeline.
//!
//! A request is validated here, before the pipeline runs; the pipeline
//! itself never fails. Response values are rounded for display, while the
//! underlying [`RoutePlan`] keeps full precision.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{OptimizerConfig, DEFAULT_LITERS_PER_KM, DEFAULT_SPEED_KMH};
use crate::error::{Result, RouteError};
use crate::geometry::FeatureCollection;
use crate::models::{Leg, Point, RoutePlan};
use crate::optimizer::MstOptimizer;

fn default_return_to_depot() -> bool {
    true
}

fn default_speed_kmh() -> f64 {
    DEFAULT_SPEED_KMH
}

fn default_liters_per_km() -> f64 {
    DEFAULT_LITERS_PER_KM
}

/// An optimization request: a depot, zero or more stops, and run options.
///
/// # Examples
///
/// ```
/// use eco_route::request::OptimizeRequest;
///
/// let req: OptimizeRequest = serde_json::from_str(r#"{
///     "depot": {"lat": -12.0464, "lng": -77.0428},
///     "stops": [{"lat": -12.1211, "lng": -77.0297}]
/// }"#).unwrap();
/// assert!(req.return_to_depot);
/// assert_eq!(req.average_speed_kmh, 25.0);
/// assert_eq!(req.points().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub depot: Point,
    #[serde(default)]
    pub stops: Vec<Point>,
    #[serde(default = "default_return_to_depot")]
    pub return_to_depot: bool,
    #[serde(default = "default_speed_kmh")]
    pub average_speed_kmh: f64,
    #[serde(default = "default_liters_per_km")]
    pub liters_per_km: f64,
}

impl OptimizeRequest {
    /// Creates a request with default options.
    pub fn new(depot: Point, stops: Vec<Point>) -> Self {
        Self {
            depot,
            stops,
            return_to_depot: default_return_to_depot(),
            average_speed_kmh: DEFAULT_SPEED_KMH,
            liters_per_km: DEFAULT_LITERS_PER_KM,
        }
    }

    /// The point set: depot at index 0, then the stops in request order.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.stops.len() + 1);
        points.push(self.depot.clone());
        points.extend(self.stops.iter().cloned());
        points
    }

    /// Optimizer configuration for this request.
    pub fn config(&self) -> OptimizerConfig {
        OptimizerConfig::default()
            .with_return_to_depot(self.return_to_depot)
            .with_average_speed_kmh(self.average_speed_kmh)
            .with_liters_per_km(self.liters_per_km)
    }

    /// Checks coordinate ranges and option values.
    ///
    /// A non-positive speed is accepted; the assembler clamps it.
    pub fn validate(&self) -> Result<()> {
        validate_point(&self.depot, 0)?;
        for (i, stop) in self.stops.iter().enumerate() {
            validate_point(stop, i + 1)?;
        }
        if !self.liters_per_km.is_finite() || self.liters_per_km < 0.0 {
            return Err(RouteError::invalid_input(format!(
                "liters_per_km must be a non-negative number, got {}",
                self.liters_per_km
            )));
        }
        Ok(())
    }
}

fn validate_point(point: &Point, index: usize) -> Result<()> {
    let label = if index == 0 {
        "depot".to_string()
    } else {
        format!("stop {index}")
    };
    let (lat, lng) = (point.lat(), point.lng());
    if !lat.is_finite() || !lng.is_finite() {
        return Err(RouteError::invalid_input(format!(
            "{label} has a non-finite coordinate"
        )));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(RouteError::invalid_input(format!(
            "{label} latitude {lat} is outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(RouteError::invalid_input(format!(
            "{label} longitude {lng} is outside [-180, 180]"
        )));
    }
    Ok(())
}

/// The serialized result of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub order: Vec<usize>,
    pub legs: Vec<Leg>,
    pub total_distance_km: f64,
    pub total_duration_min: f64,
    pub co2_kg: f64,
    /// Route geometry.
    pub geojson: FeatureCollection,
    /// Spanning tree geometry.
    pub mst_geojson: FeatureCollection,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl OptimizeResponse {
    /// Builds the display response for `plan`, computed over `points` with `optimizer`.
    ///
    /// Distances are rounded to 4 decimals, durations to 2 and CO2 to 3.
    pub fn from_plan(optimizer: &MstOptimizer, points: &[Point], plan: &RoutePlan) -> Self {
        let legs = plan
            .legs()
            .iter()
            .map(|l| Leg {
                from_index: l.from_index,
                to_index: l.to_index,
                distance_km: round_to(l.distance_km, 4),
                duration_min: round_to(l.duration_min, 2),
            })
            .collect();
        Self {
            order: plan.order().to_vec(),
            legs,
            total_distance_km: round_to(plan.total_distance_km(), 4),
            total_duration_min: round_to(plan.total_duration_min(), 2),
            co2_kg: round_to(plan.co2_kg(), 3),
            geojson: optimizer.route_geometry(points, plan),
            mst_geojson: optimizer.mst_geometry(points, plan),
        }
    }
}

/// Validates `request`, runs the pipeline once, and builds the response.
pub fn optimize(request: &OptimizeRequest) -> Result<OptimizeResponse> {
    request.validate()?;
    let points = request.points();
    let optimizer = MstOptimizer::new(request.config());
    debug!("optimizing {} stops", request.stops.len());
    let plan = optimizer.optimize(&points);
    let response = OptimizeResponse::from_plan(&optimizer, &points, &plan);
    info!(
        "optimized {} points: {:.4} km, {:.2} min",
        points.len(),
        response.total_distance_km,
        response.total_duration_min
    );
    Ok(response)
}

/// JSON in, JSON out: parses a request, optimizes it, and serializes the response.
///
/// # Examples
///
/// ```
/// let out = eco_route::request::optimize_json(
///     r#"{"depot": {"lat": 0, "lng": 0}, "stops": []}"#,
/// ).unwrap();
/// let value: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(value["order"], serde_json::json!([0]));
/// ```
pub fn optimize_json(input: &str) -> Result<String> {
    let request: OptimizeRequest = serde_json::from_str(input)?;
    let response = optimize(&request)?;
    Ok(serde_json::to_string(&response)?)
}
