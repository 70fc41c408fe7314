//! Tree linearization by depth-first preorder.

/// Depth-first preorder over an adjacency list, starting at `start`.
///
/// Uses an explicit stack. Neighbors are pushed in descending index order so
/// they pop, and are therefore visited, in ascending order. A vertex is
/// emitted the first time it is popped; later pops of the same vertex are
/// skipped.
///
/// On a tree this yields every vertex exactly once: each subtree is finished
/// before the next sibling starts.
///
/// # Panics
///
/// Panics if `start` or any neighbor index is out of bounds.
///
/// # Examples
///
/// ```
/// use eco_route::graph::dfs_preorder;
///
/// //     0
/// //    / \
/// //   1   2
/// //   |
/// //   3
/// let adjacency = vec![vec![1, 2], vec![0, 3], vec![0], vec![1]];
/// assert_eq!(dfs_preorder(&adjacency, 0), vec![0, 1, 3, 2]);
/// ```
pub fn dfs_preorder(adjacency: &[Vec<usize>], start: usize) -> Vec<usize> {
    let n = adjacency.len();
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut stack = vec![start];

    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        order.push(u);

        let mut neighbors: Vec<usize> = adjacency[u]
            .iter()
            .copied()
            .filter(|&v| !visited[v])
            .collect();
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
        stack.extend(neighbors);
    }

    order
}
