//! Geographic point type.

use serde::{Deserialize, Serialize};

/// A geographic location (depot or stop) in decimal degrees.
///
/// Index position in the point set is the point's identity for a run; the
/// optional metadata (`id`, `address`, `district`, `priority`) is carried
/// through untouched and never affects the computed route.
///
/// # Examples
///
/// ```
/// use eco_route::models::Point;
///
/// let depot = Point::new(-12.0464, -77.0428).with_id("depot");
/// assert_eq!(depot.lat(), -12.0464);
/// assert_eq!(depot.lng(), -77.0428);
/// assert_eq!(depot.id(), Some("depot"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(
        default,
        rename = "distrito",
        alias = "district",
        skip_serializing_if = "Option::is_none"
    )]
    district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<f64>,
}

impl Point {
    /// Creates a point with no metadata.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            id: None,
            address: None,
            district: None,
            priority: None,
        }
    }

    /// Sets the caller-supplied identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the district name.
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Sets the priority hint.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn priority(&self) -> Option<f64> {
        self.priority
    }

    /// Coordinate pair in GeoJSON order: `[lng, lat]`.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_to(&self, other: &Point) -> f64 {
        crate::distance::haversine_km(self.lat, self.lng, other.lat, other.lng)
    }
}
