//! GeoJSON views of a route and its spanning tree.

use serde::{Deserialize, Serialize};

use crate::graph::SpanningTree;
use crate::models::Point;

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// A GeoJSON `Feature` with a line geometry and a layer-tagged property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

/// Geometry of a feature. Coordinates are `[lng, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<[f64; 2]> },
}

/// Feature properties, tagged by map layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layer")]
pub enum Properties {
    /// The visiting path.
    #[serde(rename = "ROUTE")]
    Route { ordered_indices: Vec<usize> },
    /// One spanning tree edge between points `u` and `v` with weight `w` (km).
    #[serde(rename = "MST")]
    Mst { u: usize, v: usize, w: f64 },
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Geometry {
    pub fn coordinates(&self) -> &[[f64; 2]] {
        match self {
            Geometry::LineString { coordinates } => coordinates.as_slice(),
        }
    }
}

/// Renders the visiting order as a single `LineString` feature.
///
/// The depot coordinate is appended again at the end when `return_to_depot`
/// is set and the route has more than one point.
///
/// # Examples
///
/// ```
/// use eco_route::geometry::route_geojson;
/// use eco_route::models::Point;
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)];
/// let fc = route_geojson(&points, &[0, 1], true);
/// let coords = fc.features[0].geometry.coordinates();
/// assert_eq!(coords, &[[0.0, 0.0], [2.0, 1.0], [0.0, 0.0]]);
/// ```
pub fn route_geojson(points: &[Point], order: &[usize], return_to_depot: bool) -> FeatureCollection {
    let mut coordinates: Vec<[f64; 2]> = order.iter().map(|&i| points[i].lng_lat()).collect();
    if return_to_depot && order.len() > 1 {
        coordinates.push(points[order[0]].lng_lat());
    }
    FeatureCollection {
        features: vec![Feature {
            geometry: Geometry::LineString { coordinates },
            properties: Properties::Route {
                ordered_indices: order.to_vec(),
            },
        }],
    }
}

/// Renders every spanning tree edge as a two-point `LineString` feature.
pub fn mst_geojson(points: &[Point], tree: &SpanningTree) -> FeatureCollection {
    let features = tree
        .edges()
        .iter()
        .map(|e| Feature {
            geometry: Geometry::LineString {
                coordinates: vec![points[e.u].lng_lat(), points[e.v].lng_lat()],
            },
            properties: Properties::Mst {
                u: e.u,
                v: e.v,
                w: e.weight,
            },
        })
        .collect();
    FeatureCollection { features }
}
