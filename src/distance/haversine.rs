//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance between two coordinates given in decimal degrees.
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)
/// d = 2·R·atan2(√a, √(1−a))
/// ```
///
/// `a` is clamped to `[0, 1]` so nearly antipodal inputs stay finite.
///
/// # Examples
///
/// ```
/// use eco_route::distance::haversine_km;
///
/// // One degree of longitude on the equator.
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.195).abs() < 1e-3);
/// ```
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lng2 - lng1).to_radians();

    let sin_dphi = (dphi / 2.0).sin();
    let sin_dlambda = (dlambda / 2.0).sin();
    let a = sin_dphi * sin_dphi + phi1.cos() * phi2.cos() * sin_dlambda * sin_dlambda;
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}
