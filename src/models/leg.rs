//! Leg and aggregate metric types.

use serde::{Deserialize, Serialize};

/// One directed traversal step between two consecutive points of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Index of the point the leg starts at.
    pub from_index: usize,
    /// Index of the point the leg ends at.
    pub to_index: usize,
    /// Great-circle length in kilometers.
    pub distance_km: f64,
    /// Travel time in minutes at the configured average speed.
    pub duration_min: f64,
}

/// Aggregate totals over all legs of a route.
///
/// # Examples
///
/// ```
/// use eco_route::models::{Leg, RouteMetrics};
///
/// let legs = [
///     Leg { from_index: 0, to_index: 1, distance_km: 2.0, duration_min: 4.8 },
///     Leg { from_index: 1, to_index: 0, distance_km: 2.0, duration_min: 4.8 },
/// ];
/// let metrics = RouteMetrics::from_legs(&legs, 0.4, 2.68);
/// assert!((metrics.total_distance_km - 4.0).abs() < 1e-12);
/// assert!((metrics.co2_kg - 4.0 * 0.4 * 2.68).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub total_distance_km: f64,
    pub total_duration_min: f64,
    /// Estimated emissions: distance × fuel consumption × emission factor.
    pub co2_kg: f64,
}

impl RouteMetrics {
    /// Sums the legs and derives the CO2 estimate.
    pub fn from_legs(legs: &[Leg], liters_per_km: f64, co2_kg_per_liter: f64) -> Self {
        let total_distance_km: f64 = legs.iter().map(|l| l.distance_km).sum();
        let total_duration_min: f64 = legs.iter().map(|l| l.duration_min).sum();
        Self {
            total_distance_km,
            total_duration_min,
            co2_kg: total_distance_km * liters_per_km * co2_kg_per_liter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_empty() {
        let m = RouteMetrics::from_legs(&[], 0.4, 2.68);
        assert_eq!(m, RouteMetrics::default());
    }

    #[test]
    fn test_metrics_sum() {
        let legs = [
            Leg {
                from_index: 0,
                to_index: 2,
                distance_km: 1.5,
                duration_min: 3.0,
            },
            Leg {
                from_index: 2,
                to_index: 1,
                distance_km: 2.5,
                duration_min: 5.0,
            },
        ];
        let m = RouteMetrics::from_legs(&legs, 0.5, 2.0);
        assert!((m.total_distance_km - 4.0).abs() < 1e-12);
        assert!((m.total_duration_min - 8.0).abs() < 1e-12);
        assert!((m.co2_kg - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_leg_serialize_field_names() {
        let leg = Leg {
            from_index: 0,
            to_index: 1,
            distance_km: 1.0,
            duration_min: 2.0,
        };
        let v = serde_json::to_value(leg).expect("serializable");
        assert_eq!(v["from_index"], 0);
        assert_eq!(v["to_index"], 1);
        assert_eq!(v["distance_km"], 1.0);
        assert_eq!(v["duration_min"], 2.0);
    }
}
