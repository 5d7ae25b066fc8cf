use common::types::{Edge, SquareMatrix};

use crate::semiring::Semiring;

/// Minimum spanning tree by Prim-like greedy growth, generalized so the
/// semiring's `add` decides which candidate edge "improves upon" another.
/// Intended for the shortest-path semiring, where `add` is `min`.
///
/// Growth starts at vertex 0. Each round selects the best reached,
/// untreated vertex (ties keep the first-encountered index in a
/// left-to-right scan), emits its parent edge, and relaxes its neighbors:
/// a candidate `W[u][v]` replaces `best[v]` when `v` is unreached
/// (`best[v] == zero`) or `add(W[u][v], best[v]) == W[u][v]` (at least as
/// good).
///
/// On a connected n-vertex graph this emits exactly n−1 edges whose total
/// weight equals any minimum spanning tree's; the edge set itself may differ
/// from Kruskal's or Prim's under weight ties. On a disconnected graph
/// growth stops at the component boundary: only vertex 0's component is
/// spanned, fewer than n−1 edges come back, and no edge crosses components.
///
/// O(n²): n selection rounds of an O(n) scan and relax.
pub fn generalized_mst<T: Copy + PartialEq>(
    w: &SquareMatrix<T>,
    semiring: &Semiring<T>,
) -> Vec<Edge<T>> {
    let n = w.n();
    let mut edges = Vec::new();
    if n == 0 {
        return edges;
    }

    let mut in_tree = vec![false; n];
    // `zero` means unreached; vertex 0 is seeded as the root.
    let mut best = vec![semiring.zero(); n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    best[0] = semiring.one();

    for _ in 0..n {
        let mut selected: Option<usize> = None;
        for v in 0..n {
            if in_tree[v] || best[v] == semiring.zero() {
                continue;
            }
            match selected {
                None => selected = Some(v),
                Some(u) => {
                    // Replace only when strictly better, so the first
                    // tied index stands.
                    let folded = semiring.add(best[v], best[u]);
                    if folded == best[v] && best[v] != best[u] {
                        selected = Some(v);
                    }
                }
            }
        }
        // Every remaining vertex is unreached: the rest of the graph lies
        // in other components.
        let Some(u) = selected else {
            break;
        };

        in_tree[u] = true;
        if let Some(p) = parent[u] {
            edges.push((p, u, w.get(p, u)));
        }

        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            let candidate = w.get(u, v);
            if candidate == semiring.zero() {
                continue;
            }
            if best[v] == semiring.zero() || semiring.add(candidate, best[v]) == candidate {
                best[v] = candidate;
                parent[v] = Some(u);
            }
        }
    }

    edges
}
