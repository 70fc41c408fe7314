//! Route assembler that turns a visiting order into legs and totals.

use log::warn;

use crate::config::{OptimizerConfig, MIN_SPEED_KMH};
use crate::distance::DistanceMatrix;
use crate::models::{Leg, RouteMetrics};

/// Walks a visiting order over a distance matrix, producing one [`Leg`] per
/// consecutive pair (plus the closing leg back to the first point when the
/// configuration asks for it) and the aggregate [`RouteMetrics`].
///
/// # Examples
///
/// ```
/// use eco_route::config::OptimizerConfig;
/// use eco_route::distance::DistanceMatrix;
/// use eco_route::evaluation::RouteAssembler;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 10.0, 20.0,
///     10.0, 0.0, 15.0,
///     20.0, 15.0, 0.0,
/// ]).unwrap();
/// let config = OptimizerConfig::default().with_average_speed_kmh(30.0);
///
/// let assembler = RouteAssembler::new(&dm, &config);
/// let (legs, metrics) = assembler.assemble(&[0, 1, 2]);
/// assert_eq!(legs.len(), 3);
/// assert!((metrics.total_distance_km - 45.0).abs() < 1e-12);
/// assert!((metrics.total_duration_min - 90.0).abs() < 1e-12);
/// ```
pub struct RouteAssembler<'a> {
    distances: &'a DistanceMatrix,
    config: &'a OptimizerConfig,
}

impl<'a> RouteAssembler<'a> {
    /// Creates a new assembler for the given matrix and configuration.
    pub fn new(distances: &'a DistanceMatrix, config: &'a OptimizerConfig) -> Self {
        Self { distances, config }
    }

    /// Travel time in minutes for `distance_km` at the effective speed.
    pub fn duration_min(&self, distance_km: f64) -> f64 {
        distance_km / self.config.effective_speed_kmh() * 60.0
    }

    fn leg(&self, from_index: usize, to_index: usize) -> Leg {
        let distance_km = self.distances.get(from_index, to_index);
        Leg {
            from_index,
            to_index,
            distance_km,
            duration_min: self.duration_min(distance_km),
        }
    }

    /// Builds the legs for `order` and sums them into route metrics.
    ///
    /// Aggregates are not rounded.
    pub fn assemble(&self, order: &[usize]) -> (Vec<Leg>, RouteMetrics) {
        let speed = self.config.average_speed_kmh();
        if speed.is_nan() || speed <= 0.0 {
            warn!("average speed {speed} km/h is not positive, clamping to {MIN_SPEED_KMH} km/h");
        }

        let closes = self.config.return_to_depot() && order.len() > 1;
        let mut legs = Vec::with_capacity(order.len());
        for pair in order.windows(2) {
            legs.push(self.leg(pair[0], pair[1]));
        }
        if closes {
            legs.push(self.leg(order[order.len() - 1], order[0]));
        }

        let metrics = RouteMetrics::from_legs(
            &legs,
            self.config.liters_per_km(),
            self.config.co2_kg_per_liter(),
        );
        (legs, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn setup() -> DistanceMatrix {
        #[rustfmt::skip]
        let dm = DistanceMatrix::from_data(4, vec![
            0.0, 3.0, 4.0, 5.0,
            3.0, 0.0, 5.0, 4.0,
            4.0, 5.0, 0.0, 3.0,
            5.0, 4.0, 3.0, 0.0,
        ]).expect("valid");
        dm
    }

    #[test]
    fn test_single_point_no_legs() {
        let dm = DistanceMatrix::new(1);
        let config = OptimizerConfig::default();
        let (legs, metrics) = RouteAssembler::new(&dm, &config).assemble(&[0]);
        assert!(legs.is_empty());
        assert_eq!(metrics, RouteMetrics::default());
    }

    #[test]
    fn test_closed_route() {
        let dm = setup();
        let config = OptimizerConfig::default().with_average_speed_kmh(60.0);
        let (legs, metrics) = RouteAssembler::new(&dm, &config).assemble(&[0, 1, 3, 2]);
        assert_eq!(legs.len(), 4);
        let pairs: Vec<(usize, usize)> = legs.iter().map(|l| (l.from_index, l.to_index)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 3), (3, 2), (2, 0)]);
        // 3 + 4 + 3 + 4
        assert!((metrics.total_distance_km - 14.0).abs() < 1e-12);
        // 60 km/h -> one minute per km
        assert!((metrics.total_duration_min - 14.0).abs() < 1e-12);
        assert!((metrics.co2_kg - 14.0 * 0.4 * 2.68).abs() < 1e-12);
    }

    #[test]
    fn test_open_route() {
        let dm = setup();
        let config = OptimizerConfig::default().with_return_to_depot(false);
        let (legs, metrics) = RouteAssembler::new(&dm, &config).assemble(&[0, 1, 3, 2]);
        assert_eq!(legs.len(), 3);
        assert!((metrics.total_distance_km - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_duration_formula() {
        let dm = setup();
        let config = OptimizerConfig::default().with_average_speed_kmh(25.0);
        let (legs, _) = RouteAssembler::new(&dm, &config).assemble(&[0, 2]);
        // 4 km at 25 km/h = 9.6 min
        assert!((legs[0].duration_min - 9.6).abs() < 1e-12);
        assert!((legs[1].duration_min - 9.6).abs() < 1e-12);
    }

    #[test]
    fn test_zero_speed_clamped() {
        let dm = setup();
        let config = OptimizerConfig::default().with_average_speed_kmh(0.0);
        let (legs, metrics) = RouteAssembler::new(&dm, &config).assemble(&[0, 1]);
        for leg in &legs {
            assert!(leg.duration_min.is_finite());
            assert!((leg.duration_min - 3.0 / MIN_SPEED_KMH * 60.0).abs() < 1e-3);
        }
        assert!(metrics.total_duration_min.is_finite());
    }

    #[test]
    fn test_coincident_points_zero_leg() {
        let dm = DistanceMatrix::from_points(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)]);
        let config = OptimizerConfig::default();
        let (legs, metrics) = RouteAssembler::new(&dm, &config).assemble(&[0, 1]);
        assert_eq!(legs.len(), 2);
        for leg in &legs {
            assert_eq!(leg.distance_km, 0.0);
            assert_eq!(leg.duration_min, 0.0);
        }
        assert_eq!(metrics.co2_kg, 0.0);
        assert!(!metrics.total_duration_min.is_nan());
    }

    #[test]
    fn test_totals_equal_leg_sums() {
        let dm = setup();
        let config = OptimizerConfig::default();
        let (legs, metrics) = RouteAssembler::new(&dm, &config).assemble(&[0, 3, 1, 2]);
        let d: f64 = legs.iter().map(|l| l.distance_km).sum();
        let t: f64 = legs.iter().map(|l| l.duration_min).sum();
        assert!((metrics.total_distance_km - d).abs() < 1e-12);
        assert!((metrics.total_duration_min - t).abs() < 1e-12);
    }
}
