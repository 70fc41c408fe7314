//! Optimizer configuration.

use serde::{Deserialize, Serialize};

/// Default average travel speed in km/h.
pub const DEFAULT_SPEED_KMH: f64 = 25.0;
/// Default fuel consumption in liters per km.
pub const DEFAULT_LITERS_PER_KM: f64 = 0.4;
/// Default emission factor in kg of CO2 per liter of fuel.
pub const DEFAULT_CO2_KG_PER_LITER: f64 = 2.68;
/// Lower bound applied to the average speed before dividing by it.
pub const MIN_SPEED_KMH: f64 = 1e-6;

/// Parameters of one optimization run.
///
/// Every field has a default, so partial JSON is accepted.
///
/// # Examples
///
/// ```
/// use eco_route::config::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_return_to_depot(false)
///     .with_average_speed_kmh(30.0);
/// assert!(!config.return_to_depot());
/// assert_eq!(config.average_speed_kmh(), 30.0);
/// assert_eq!(config.liters_per_km(), 0.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    return_to_depot: bool,
    average_speed_kmh: f64,
    liters_per_km: f64,
    co2_kg_per_liter: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            return_to_depot: true,
            average_speed_kmh: DEFAULT_SPEED_KMH,
            liters_per_km: DEFAULT_LITERS_PER_KM,
            co2_kg_per_liter: DEFAULT_CO2_KG_PER_LITER,
        }
    }
}

impl OptimizerConfig {
    /// Sets whether the route closes with a leg back to the depot.
    pub fn with_return_to_depot(mut self, value: bool) -> Self {
        self.return_to_depot = value;
        self
    }

    /// Sets the average travel speed (km/h).
    pub fn with_average_speed_kmh(mut self, speed: f64) -> Self {
        self.average_speed_kmh = speed;
        self
    }

    /// Sets fuel consumption (liters per km).
    pub fn with_liters_per_km(mut self, liters: f64) -> Self {
        self.liters_per_km = liters;
        self
    }

    /// Sets the emission factor (kg CO2 per liter).
    pub fn with_co2_kg_per_liter(mut self, factor: f64) -> Self {
        self.co2_kg_per_liter = factor;
        self
    }

    pub fn return_to_depot(&self) -> bool {
        self.return_to_depot
    }

    /// Average speed as configured, which may be non-positive.
    pub fn average_speed_kmh(&self) -> f64 {
        self.average_speed_kmh
    }

    /// Average speed clamped to at least [`MIN_SPEED_KMH`]; NaN maps to the floor.
    pub fn effective_speed_kmh(&self) -> f64 {
        if self.average_speed_kmh.is_nan() {
            MIN_SPEED_KMH
        } else {
            self.average_speed_kmh.max(MIN_SPEED_KMH)
        }
    }

    pub fn liters_per_km(&self) -> f64 {
        self.liters_per_km
    }

    pub fn co2_kg_per_liter(&self) -> f64 {
        self.co2_kg_per_liter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = OptimizerConfig::default();
        assert!(c.return_to_depot());
        assert_eq!(c.average_speed_kmh(), 25.0);
        assert_eq!(c.liters_per_km(), 0.4);
        assert_eq!(c.co2_kg_per_liter(), 2.68);
    }

    #[test]
    fn test_builder() {
        let c = OptimizerConfig::default()
            .with_return_to_depot(false)
            .with_average_speed_kmh(40.0)
            .with_liters_per_km(0.1)
            .with_co2_kg_per_liter(3.0);
        assert!(!c.return_to_depot());
        assert_eq!(c.average_speed_kmh(), 40.0);
        assert_eq!(c.liters_per_km(), 0.1);
        assert_eq!(c.co2_kg_per_liter(), 3.0);
    }

    #[test]
    fn test_effective_speed_clamp() {
        let c = OptimizerConfig::default();
        assert_eq!(c.effective_speed_kmh(), 25.0);
        assert_eq!(c.with_average_speed_kmh(0.0).effective_speed_kmh(), MIN_SPEED_KMH);
        assert_eq!(c.with_average_speed_kmh(-5.0).effective_speed_kmh(), MIN_SPEED_KMH);
        assert_eq!(c.with_average_speed_kmh(f64::NAN).effective_speed_kmh(), MIN_SPEED_KMH);
    }

    #[test]
    fn test_partial_json() {
        let c: OptimizerConfig =
            serde_json::from_str(r#"{"average_speed_kmh": 12.5}"#).expect("valid");
        assert_eq!(c.average_speed_kmh(), 12.5);
        assert!(c.return_to_depot());
        assert_eq!(c.co2_kg_per_liter(), DEFAULT_CO2_KG_PER_LITER);
    }
}
