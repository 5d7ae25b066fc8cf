use std::hint::black_box;
use std::time::Instant;

use path_algebra_core::Semiring;
use path_algebra_core::closure::apsp_sssp;
use perf_bench::*;

fn main() {
    let sr = Semiring::shortest_path();

    println!("--- Generalized Closure Benchmark ---");
    for &n in BENCH_SIZES.iter() {
        let w = dense_closure_matrix(n);

        let start_time = Instant::now();
        let all_pairs = apsp_sssp(&w, &sr, None).expect("APSP never needs a source");
        let apsp_time = start_time.elapsed();

        let start_time = Instant::now();
        let from_zero = apsp_sssp(&w, &sr, Some(0)).expect("source 0 is in range");
        let sssp_time = start_time.elapsed();

        // Checksums keep the optimizer honest and double as a drift alarm
        // between runs.
        let apsp_checksum: f64 = black_box(
            (0..n).map(|i| all_pairs.row(i).iter().sum::<f64>()).sum(),
        );
        let sssp_checksum: f64 = black_box(from_zero.row(0).iter().sum());

        println!(
            "n = {:>3}: APSP {:?} (checksum {:.1}), SSSP {:?} (checksum {:.1})",
            n, apsp_time, apsp_checksum, sssp_time, sssp_checksum
        );
    }
}
