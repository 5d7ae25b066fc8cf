//! Classical reference algorithms.
//!
//! These are the trusted, problem-specific implementations the generalized
//! core is diffed against. They share the core's matrix and edge shapes and
//! its conventions for the shortest-path domain: `∞` marks "no edge" and the
//! diagonal carries the distance to self.

use common::types::{DistanceMatrix, Edge, SquareMatrix};

/// Floyd-Warshall all-pairs shortest paths, O(n³).
pub fn floyd_warshall(w: &SquareMatrix<f64>) -> DistanceMatrix<f64> {
    let n = w.n();
    let mut dist = w.clone();

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist.get(i, k) + dist.get(k, j);
                if through < dist.get(i, j) {
                    dist.set(i, j, through);
                }
            }
        }
    }

    DistanceMatrix::from_square(dist)
}

/// Dijkstra single-source shortest paths, dense O(n²) selection.
/// Requires nonnegative weights.
pub fn dijkstra(w: &SquareMatrix<f64>, source: usize) -> Vec<f64> {
    let n = w.n();
    let mut distances = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    distances[source] = 0.0;

    for _ in 0..n {
        let mut u = None;
        let mut best = f64::INFINITY;
        for v in 0..n {
            if !visited[v] && distances[v] < best {
                best = distances[v];
                u = Some(v);
            }
        }
        // Everything still unvisited is unreachable.
        let Some(u) = u else {
            break;
        };
        visited[u] = true;

        for v in 0..n {
            if visited[v] {
                continue;
            }
            let weight = w.get(u, v);
            if weight.is_finite() && distances[u] + weight < distances[v] {
                distances[v] = distances[u] + weight;
            }
        }
    }

    distances
}

/// Bellman-Ford single-source shortest paths: n−1 relaxation rounds over
/// every edge, stopping early once a round changes nothing.
pub fn bellman_ford(w: &SquareMatrix<f64>, source: usize) -> Vec<f64> {
    let n = w.n();
    let mut distances = vec![f64::INFINITY; n];
    if n == 0 {
        return distances;
    }
    distances[source] = 0.0;

    for _ in 1..n {
        let mut updated = false;
        for u in 0..n {
            for v in 0..n {
                let weight = w.get(u, v);
                if weight.is_finite() && distances[u] + weight < distances[v] {
                    distances[v] = distances[u] + weight;
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }

    distances
}

/// Disjoint-set forest with path compression, used by the Kruskal oracle.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `a` and `b`; false if already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        true
    }
}

/// Kruskal minimum spanning tree over a symmetric weight matrix.
pub fn kruskal(w: &SquareMatrix<f64>) -> Vec<Edge<f64>> {
    let n = w.n();
    let mut candidates: Vec<Edge<f64>> = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let weight = w.get(i, j);
            if weight.is_finite() {
                candidates.push((i, j, weight));
            }
        }
    }
    candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut sets = DisjointSet::new(n);
    let mut mst_edges = Vec::new();
    for (u, v, weight) in candidates {
        if sets.union(u, v) {
            mst_edges.push((u, v, weight));
            if mst_edges.len() + 1 == n {
                break;
            }
        }
    }

    mst_edges
}

/// Prim minimum spanning tree over a symmetric weight matrix, grown from
/// vertex 0. On a disconnected graph only vertex 0's component is spanned.
pub fn prim(w: &SquareMatrix<f64>) -> Vec<Edge<f64>> {
    let n = w.n();
    let mut mst_edges = Vec::new();
    if n == 0 {
        return mst_edges;
    }

    let mut visited = vec![false; n];
    let mut min_edge = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    min_edge[0] = 0.0;

    for _ in 0..n {
        let mut u = None;
        let mut best = f64::INFINITY;
        for v in 0..n {
            if !visited[v] && min_edge[v] < best {
                best = min_edge[v];
                u = Some(v);
            }
        }
        let Some(u) = u else {
            break;
        };
        visited[u] = true;

        if let Some(p) = parent[u] {
            mst_edges.push((p, u, w.get(p, u)));
        }

        for v in 0..n {
            let weight = w.get(u, v);
            if !visited[v] && weight.is_finite() && weight < min_edge[v] {
                min_edge[v] = weight;
                parent[v] = Some(u);
            }
        }
    }

    mst_edges
}

/// Widest-path (maximum bottleneck capacity) between all pairs, the max-min
/// Floyd variant. Expects capacity 0 for "no edge" and ∞ on the diagonal.
pub fn widest_path(w: &SquareMatrix<f64>) -> DistanceMatrix<f64> {
    let n = w.n();
    let mut capacity = w.clone();

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = capacity.get(i, k).min(capacity.get(k, j));
                if through > capacity.get(i, j) {
                    capacity.set(i, j, through);
                }
            }
        }
    }

    DistanceMatrix::from_square(capacity)
}

#[cfg(test)]
mod oracle_tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn cycle_matrix() -> SquareMatrix<f64> {
        SquareMatrix::from_rows(vec![
            vec![0.0, 3.0, INF, INF],
            vec![INF, 0.0, 1.0, INF],
            vec![INF, INF, 0.0, 7.0],
            vec![2.0, INF, INF, 0.0],
        ])
        .unwrap()
    }

    fn mst_matrix() -> SquareMatrix<f64> {
        SquareMatrix::from_rows(vec![
            vec![INF, 2.0, INF, 6.0],
            vec![2.0, INF, 3.0, 8.0],
            vec![INF, 3.0, INF, INF],
            vec![6.0, 8.0, INF, INF],
        ])
        .unwrap()
    }

    #[test]
    fn floyd_warshall_on_directed_cycle() {
        let dist = floyd_warshall(&cycle_matrix());
        assert_eq!(dist.row(0), &[0.0, 3.0, 4.0, 11.0]);
        assert_eq!(dist.row(3), &[2.0, 5.0, 6.0, 0.0]);
    }

    #[test]
    fn dijkstra_on_directed_cycle() {
        assert_eq!(dijkstra(&cycle_matrix(), 0), vec![0.0, 3.0, 4.0, 11.0]);
        assert_eq!(dijkstra(&cycle_matrix(), 2), vec![9.0, 12.0, 0.0, 7.0]);
    }

    #[test]
    fn bellman_ford_on_directed_cycle() {
        assert_eq!(bellman_ford(&cycle_matrix(), 0), vec![0.0, 3.0, 4.0, 11.0]);
    }

    #[test]
    fn bellman_ford_handles_a_negative_edge() {
        let w = SquareMatrix::from_rows(vec![
            vec![0.0, 4.0, INF],
            vec![INF, 0.0, -2.0],
            vec![INF, INF, 0.0],
        ])
        .unwrap();
        assert_eq!(bellman_ford(&w, 0), vec![0.0, 4.0, 2.0]);
    }

    #[test]
    fn kruskal_and_prim_agree_on_the_square_example() {
        let w = mst_matrix();

        let kruskal_edges = kruskal(&w);
        let prim_edges = prim(&w);

        let total = |edges: &[Edge<f64>]| edges.iter().map(|&(_, _, x)| x).sum::<f64>();
        assert_eq!(total(&kruskal_edges), 11.0);
        assert_eq!(total(&prim_edges), 11.0);
        assert_eq!(kruskal_edges.len(), 3);
        assert_eq!(prim_edges.len(), 3);
    }

    #[test]
    fn prim_stops_at_the_component_boundary() {
        let w = SquareMatrix::from_rows(vec![
            vec![INF, 1.0, INF, INF],
            vec![1.0, INF, INF, INF],
            vec![INF, INF, INF, 2.0],
            vec![INF, INF, 2.0, INF],
        ])
        .unwrap();

        let edges = prim(&w);
        assert_eq!(edges, vec![(0, 1, 1.0)]);
    }

    #[test]
    fn widest_path_prefers_the_fat_detour() {
        let w = SquareMatrix::from_rows(vec![
            vec![INF, 5.0, 2.0],
            vec![5.0, INF, 3.0],
            vec![2.0, 3.0, INF],
        ])
        .unwrap();

        let capacity = widest_path(&w);
        assert_eq!(capacity.get(0, 2), 3.0);
        assert_eq!(capacity.get(2, 0), 3.0);
    }

    #[test]
    fn empty_matrix_is_a_no_op_for_every_oracle() {
        let w = SquareMatrix::from_rows(vec![]).unwrap();
        assert_eq!(floyd_warshall(&w).rows(), 0);
        assert!(bellman_ford(&w, 0).is_empty());
        assert!(kruskal(&w).is_empty());
        assert!(prim(&w).is_empty());
    }
}
