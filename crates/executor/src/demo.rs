//! Worked example graphs, printed in full.
//!
//! Small fixed graphs with known answers, useful as a first smoke check and
//! as a readable tour of the generalized algorithms.

use common::types::SquareMatrix;
use path_algebra_core::Semiring;
use path_algebra_core::closure::apsp_sssp;
use path_algebra_core::mst::generalized_mst;

use super::report;

const INF: f64 = f64::INFINITY;

pub fn run_demos() {
    demo_closure();
    demo_mst();
    demo_disconnected_mst();
}

/// The directed 4-cycle 0→1→2→3→0: APSP row 0 and the SSSP vector from
/// vertex 0 are both [0, 3, 4, 11].
fn demo_closure() {
    let sr = Semiring::shortest_path();
    let w = SquareMatrix::from_rows(vec![
        vec![0.0, 3.0, INF, INF],
        vec![INF, 0.0, 1.0, INF],
        vec![INF, INF, 0.0, 7.0],
        vec![2.0, INF, INF, 0.0],
    ])
    .expect("demo matrix is square");

    let all_pairs = apsp_sssp(&w, &sr, None).expect("APSP never needs a source");
    report::print_distance_matrix("All-pairs distances (directed 4-cycle)", &all_pairs, 8);

    let from_zero = apsp_sssp(&w, &sr, Some(0)).expect("source 0 is in range");
    report::print_distance_matrix("Single-source distances from vertex 0", &from_zero, 8);
}

/// A 4-vertex weighted graph whose minimum spanning tree totals 11.
fn demo_mst() {
    let sr = Semiring::shortest_path();
    let w = SquareMatrix::from_rows(vec![
        vec![INF, 2.0, INF, 6.0],
        vec![2.0, INF, 3.0, 8.0],
        vec![INF, 3.0, INF, INF],
        vec![6.0, 8.0, INF, INF],
    ])
    .expect("demo matrix is square");

    let edges = generalized_mst(&w, &sr);
    report::print_edge_list("Minimum spanning tree", &edges);
}

/// Two 2-vertex components: growth from vertex 0 spans only its own
/// component, so exactly one edge comes back.
fn demo_disconnected_mst() {
    let sr = Semiring::shortest_path();
    let w = sr
        .dense_from_edges(4, &[(0, 1, 1.5), (1, 0, 1.5), (2, 3, 2.5), (3, 2, 2.5)])
        .expect("demo endpoints are in range");

    let edges = generalized_mst(&w, &sr);
    report::print_edge_list("Spanning edges of vertex 0's component", &edges);
}
