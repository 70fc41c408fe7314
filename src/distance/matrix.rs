//! Dense distance matrix.

use crate::graph::Edge;
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from great-circle distances between geographic points, or from
/// explicit data.
///
/// # Examples
///
/// ```
/// use eco_route::models::Point;
/// use eco_route::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert_eq!(dm.get(0, 2), dm.get(2, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the haversine distance matrix (km) from point coordinates.
    ///
    /// Each unordered pair is computed once and mirrored, so the result is
    /// exactly symmetric with a zero diagonal.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Enumerates the complete graph's edges, lexicographic on `(u, v)` with `u < v`.
    ///
    /// The weight of each edge is taken from the upper triangle.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.size;
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for u in 0..n {
            for v in (u + 1)..n {
                edges.push(Edge::new(u, v, self.get(u, v)));
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!((dm.get(0, 1) - 111.195).abs() < 1e-3);
        assert!(dm.get(0, 3) > dm.get(0, 1));
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_single_point() {
        let dm = DistanceMatrix::from_points(&[Point::new(45.0, 7.0)]);
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!(dm.edges().is_empty());
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_points(&[]);
        assert_eq!(dm.size(), 0);
        assert!(dm.edges().is_empty());
    }

    #[test]
    fn test_coincident_points() {
        let dm = DistanceMatrix::from_points(&[Point::new(5.0, 5.0), Point::new(5.0, 5.0)]);
        assert_eq!(dm.get(0, 1), 0.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_antipodal_finite() {
        let dm = DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(0.0, 180.0)]);
        assert!(dm.get(0, 1).is_finite());
        assert!(dm.get(0, 1) > 20_000.0);
    }

    #[test]
    fn test_edges_lexicographic() {
        let dm = DistanceMatrix::from_points(&sample_points());
        let pairs: Vec<(usize, usize)> = dm.edges().iter().map(|e| (e.u, e.v)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        for e in dm.edges() {
            assert_eq!(e.weight, dm.get(e.u, e.v));
        }
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    fn arb_points() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-90.0..=90.0f64, -180.0..=180.0f64), 1..20)
            .prop_map(|coords| coords.into_iter().map(|(lat, lng)| Point::new(lat, lng)).collect())
    }

    proptest! {
        #[test]
        fn prop_symmetric_zero_diagonal_non_negative(points in arb_points()) {
            let dm = DistanceMatrix::from_points(&points);
            for i in 0..dm.size() {
                prop_assert_eq!(dm.get(i, i), 0.0);
                for j in 0..dm.size() {
                    let d = dm.get(i, j);
                    prop_assert!(d.is_finite());
                    prop_assert!(d >= 0.0);
                    prop_assert_eq!(d, dm.get(j, i));
                }
            }
        }
    }
}
