//! Kruskal minimum spanning tree.
//!
//! # Algorithm
//!
//! Sort every edge of the complete graph ascending by weight, then scan in
//! that order and keep an edge whenever its endpoints are still in different
//! components of a [`UnionFind`]. The scan stops once `n - 1` edges have
//! been accepted.
//!
//! Equal weights are ordered by `(u, v)`, so the tree is reproducible
//! regardless of the sort implementation's stability.
//!
//! # Complexity
//!
//! O(E log E) with E = n(n-1)/2 for the complete graph.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and the
//! traveling salesman problem", *Proceedings of the AMS* 7(1), 48-50.

use std::cmp::Ordering;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::UnionFind;
use crate::distance::DistanceMatrix;

/// An undirected weighted edge, stored with `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Smaller endpoint index.
    pub u: usize,
    /// Larger endpoint index.
    pub v: usize,
    /// Edge weight (km).
    pub weight: f64,
}

impl Edge {
    /// Creates an edge, normalizing the endpoints so that `u < v`.
    pub fn new(a: usize, b: usize, weight: f64) -> Self {
        debug_assert_ne!(a, b, "self-loops are not edges");
        let (u, v) = if a <= b { (a, b) } else { (b, a) };
        Self { u, v, weight }
    }

    /// Deterministic ordering: weight, then `u`, then `v`.
    fn kruskal_cmp(&self, other: &Edge) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.u.cmp(&other.u))
            .then(self.v.cmp(&other.v))
    }
}

/// A spanning tree over vertices `0..num_vertices`.
///
/// Edges are kept in acceptance order (ascending weight).
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    num_vertices: usize,
    edges: Vec<Edge>,
}

impl SpanningTree {
    /// A tree with no edges; only spanning when `num_vertices <= 1`.
    pub fn empty(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
        }
    }

    /// Builds the minimum spanning tree of the complete graph over `distances`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eco_route::distance::DistanceMatrix;
    /// use eco_route::graph::SpanningTree;
    ///
    /// // Path 0 - 1 - 2 is cheaper than the 0 - 2 shortcut.
    /// let dm = DistanceMatrix::from_data(3, vec![
    ///     0.0, 1.0, 5.0,
    ///     1.0, 0.0, 2.0,
    ///     5.0, 2.0, 0.0,
    /// ]).unwrap();
    /// let tree = SpanningTree::from_matrix(&dm);
    /// assert_eq!(tree.len(), 2);
    /// assert!((tree.total_weight() - 3.0).abs() < 1e-12);
    /// ```
    pub fn from_matrix(distances: &DistanceMatrix) -> Self {
        kruskal(distances.size(), &distances.edges())
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Per-vertex neighbor lists, each sorted ascending by vertex index.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.num_vertices];
        for e in &self.edges {
            adj[e.u].push(e.v);
            adj[e.v].push(e.u);
        }
        for neighbors in &mut adj {
            neighbors.sort_unstable();
        }
        adj
    }
}

/// Runs Kruskal's algorithm over `edges` on vertices `0..n`.
///
/// `edges` is expected to describe a connected graph (the complete graph in
/// this crate); on a disconnected input the result is a spanning forest.
pub fn kruskal(n: usize, edges: &[Edge]) -> SpanningTree {
    let target = n.saturating_sub(1);
    let mut tree = SpanningTree {
        num_vertices: n,
        edges: Vec::with_capacity(target),
    };
    if target == 0 {
        return tree;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by(Edge::kruskal_cmp);

    let mut uf = UnionFind::new(n);
    for edge in sorted {
        if uf.union(edge.u, edge.v) {
            trace!("mst accept ({}, {}) w={:.6}", edge.u, edge.v, edge.weight);
            tree.edges.push(edge);
            if tree.edges.len() == target {
                break;
            }
        }
    }

    debug!(
        "mst built: {} vertices, {} edges, weight {:.4} km",
        n,
        tree.edges.len(),
        tree.total_weight()
    );
    tree
}
