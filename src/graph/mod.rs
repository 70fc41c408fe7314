//! Graph algorithms over the complete distance graph.
//!
//! - [`UnionFind`] — Disjoint-set forest with path compression and union by rank
//! - [`kruskal()`] — Kruskal minimum spanning tree with deterministic tie-breaking
//! - [`dfs_preorder`] — Explicit-stack DFS preorder used to linearize the tree

mod kruskal;
mod traversal;
mod union_find;

pub use kruskal::{kruskal, Edge, SpanningTree};
pub use traversal::dfs_preorder;
pub use union_find::UnionFind;
