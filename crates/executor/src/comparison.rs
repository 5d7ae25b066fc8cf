//! Runs the generalized core against the classical oracles.
//!
//! Each run records wall-clock time for both sides and the element-wise
//! maximum absolute difference of the results, so a report line says both
//! "is it right" and "what did the generality cost".

use std::time::{Duration, Instant};

use common::error::Error as PathAlgebraError;
use common::numeric::abs_diff;
use common::types::{DistanceMatrix, Edge, SquareMatrix};
use path_algebra_core::Semiring;
use path_algebra_core::closure::{apsp_sssp, slow_apsp};
use path_algebra_core::mst::generalized_mst;

use super::oracles;

/// Outcome of one generalized-vs-oracle run.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub name: &'static str,
    pub generalized_time: Duration,
    pub oracle_time: Duration,
    pub max_abs_diff: f64,
    pub matches: bool,
}

impl Comparison {
    fn new(
        name: &'static str,
        generalized_time: Duration,
        oracle_time: Duration,
        max_abs_diff: f64,
        tolerance: f64,
    ) -> Self {
        Self {
            name,
            generalized_time,
            oracle_time,
            max_abs_diff,
            matches: max_abs_diff <= tolerance,
        }
    }
}

/// Element-wise maximum difference between two equally-shaped results.
pub fn matrix_max_diff(a: &DistanceMatrix<f64>, b: &DistanceMatrix<f64>) -> f64 {
    assert_eq!(a.rows(), b.rows(), "comparison shapes mismatch");
    assert_eq!(a.n(), b.n(), "comparison shapes mismatch");

    let mut max = 0.0f64;
    for i in 0..a.rows() {
        for (x, y) in a.row(i).iter().zip(b.row(i)) {
            max = max.max(abs_diff(*x, *y));
        }
    }
    max
}

pub fn row_max_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "comparison shapes mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| abs_diff(*x, *y))
        .fold(0.0, f64::max)
}

fn total_weight(edges: &[Edge<f64>]) -> f64 {
    edges.iter().map(|&(_, _, w)| w).sum()
}

/// Generalized APSP (and its transparent power-iteration twin) against
/// Floyd-Warshall.
pub fn compare_apsp(
    w: &SquareMatrix<f64>,
    tolerance: f64,
) -> Result<Vec<Comparison>, PathAlgebraError> {
    let sr = Semiring::shortest_path();

    let start = Instant::now();
    let generalized = apsp_sssp(w, &sr, None)?;
    let generalized_time = start.elapsed();

    let start = Instant::now();
    let slow = slow_apsp(w, &sr);
    let slow_time = start.elapsed();

    let start = Instant::now();
    let oracle = oracles::floyd_warshall(w);
    let oracle_time = start.elapsed();

    Ok(vec![
        Comparison::new(
            "APSP closure vs Floyd-Warshall",
            generalized_time,
            oracle_time,
            matrix_max_diff(&generalized, &oracle),
            tolerance,
        ),
        Comparison::new(
            "slow APSP vs Floyd-Warshall",
            slow_time,
            oracle_time,
            matrix_max_diff(&slow, &oracle),
            tolerance,
        ),
    ])
}

/// Generalized SSSP against both single-source oracles.
pub fn compare_sssp(
    w: &SquareMatrix<f64>,
    source: usize,
    tolerance: f64,
) -> Result<Vec<Comparison>, PathAlgebraError> {
    let sr = Semiring::shortest_path();

    let start = Instant::now();
    let generalized = apsp_sssp(w, &sr, Some(source))?;
    let generalized_time = start.elapsed();

    let start = Instant::now();
    let dijkstra = oracles::dijkstra(w, source);
    let dijkstra_time = start.elapsed();

    let start = Instant::now();
    let bellman = oracles::bellman_ford(w, source);
    let bellman_time = start.elapsed();

    Ok(vec![
        Comparison::new(
            "SSSP closure vs Dijkstra",
            generalized_time,
            dijkstra_time,
            row_max_diff(generalized.row(0), &dijkstra),
            tolerance,
        ),
        Comparison::new(
            "SSSP closure vs Bellman-Ford",
            generalized_time,
            bellman_time,
            row_max_diff(generalized.row(0), &bellman),
            tolerance,
        ),
    ])
}

/// Generalized MST against Kruskal and Prim.
///
/// Compares total weight and edge count, not edge identity: under weight
/// ties the three algorithms may legitimately pick different trees of equal
/// total weight.
pub fn compare_mst(w: &SquareMatrix<f64>, tolerance: f64) -> Vec<Comparison> {
    let sr = Semiring::shortest_path();

    let start = Instant::now();
    let generalized = generalized_mst(w, &sr);
    let generalized_time = start.elapsed();

    let start = Instant::now();
    let kruskal = oracles::kruskal(w);
    let kruskal_time = start.elapsed();

    let start = Instant::now();
    let prim = oracles::prim(w);
    let prim_time = start.elapsed();

    let generalized_total = total_weight(&generalized);

    let against = |name, oracle_edges: &[Edge<f64>], oracle_time| {
        let diff = abs_diff(generalized_total, total_weight(oracle_edges));
        let mut comparison =
            Comparison::new(name, generalized_time, oracle_time, diff, tolerance);
        comparison.matches &= generalized.len() == oracle_edges.len();
        comparison
    };

    vec![
        against("MST total vs Kruskal", &kruskal, kruskal_time),
        against("MST total vs Prim", &prim, prim_time),
    ]
}

/// Generalized widest-path closure against the max-min Floyd oracle.
pub fn compare_widest(
    w: &SquareMatrix<f64>,
    tolerance: f64,
) -> Result<Comparison, PathAlgebraError> {
    let sr = Semiring::widest_path();

    let start = Instant::now();
    let generalized = apsp_sssp(w, &sr, None)?;
    let generalized_time = start.elapsed();

    let start = Instant::now();
    let oracle = oracles::widest_path(w);
    let oracle_time = start.elapsed();

    Ok(Comparison::new(
        "widest path vs max-min Floyd",
        generalized_time,
        oracle_time,
        matrix_max_diff(&generalized, &oracle),
        tolerance,
    ))
}
