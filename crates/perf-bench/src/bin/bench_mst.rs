use std::hint::black_box;
use std::time::Instant;

use path_algebra_core::Semiring;
use path_algebra_core::mst::generalized_mst;
use perf_bench::*;

fn main() {
    let sr = Semiring::shortest_path();

    println!("--- Generalized MST Benchmark ---");
    for &n in BENCH_SIZES.iter() {
        let w = symmetric_mst_matrix(n);

        let start_time = Instant::now();
        let edges = generalized_mst(&w, &sr);
        let elapsed_time = start_time.elapsed();

        let total_weight: f64 = black_box(edges.iter().map(|&(_, _, weight)| weight).sum());

        println!(
            "n = {:>3}: {} edges in {:?}, total weight {:.1}",
            n,
            edges.len(),
            elapsed_time,
            total_weight
        );
    }
}
