//! Geometry export for map rendering.
//!
//! Both views are plain serde structures that serialize to GeoJSON
//! `FeatureCollection`s with `LineString` features.

mod geojson;

pub use geojson::{mst_geojson, route_geojson, Feature, FeatureCollection, Geometry, Properties};
