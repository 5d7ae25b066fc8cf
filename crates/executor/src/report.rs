//! Console rendering for matrices, edge lists, and comparison summaries.

use common::types::{DistanceMatrix, Edge};

use super::comparison::Comparison;

/// Renders a single distance value, using `∞` for unreachable entries.
pub fn format_weight(value: f64) -> String {
    if value == f64::INFINITY {
        "∞".to_string()
    } else if value == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Prints a distance matrix, truncating rows and columns past `max_rows`.
pub fn print_distance_matrix(label: &str, matrix: &DistanceMatrix<f64>, max_rows: usize) {
    println!("\n{} ({}x{}):", label, matrix.rows(), matrix.n());

    let shown_rows = matrix.rows().min(max_rows);
    let shown_cols = matrix.n().min(max_rows);
    for i in 0..shown_rows {
        let cells: Vec<String> = matrix.row(i)[..shown_cols]
            .iter()
            .map(|&x| format_weight(x))
            .collect();
        let ellipsis = if matrix.n() > shown_cols { ", ..." } else { "" };
        println!("  Row {}: [{}{}]", i, cells.join(", "), ellipsis);
    }
    if matrix.rows() > shown_rows {
        println!("  ...");
    }
}

/// Prints an MST edge list with its total weight.
pub fn print_edge_list(label: &str, edges: &[Edge<f64>]) {
    let total: f64 = edges.iter().map(|&(_, _, w)| w).sum();
    println!("\n{} ({} edges, total weight {}):", label, edges.len(), format_weight(total));
    for &(u, v, weight) in edges {
        println!("  ({}, {}) with weight {}", u, v, format_weight(weight));
    }
}

/// Prints one summary line per generalized-vs-oracle run.
pub fn print_comparisons(results: &[Comparison]) {
    println!("\n{:-<78}", "");
    println!(
        "{:<32} {:>10} {:>12} {:>20}",
        "comparison", "status", "max diff", "generalized / oracle"
    );
    println!("{:-<78}", "");
    for result in results {
        println!(
            "{:<32} {:>10} {:>12} {:>20}",
            result.name,
            if result.matches { "OK" } else { "MISMATCH" },
            format_weight(result.max_abs_diff),
            format!(
                "{:?} / {:?}",
                result.generalized_time, result.oracle_time
            ),
        );
    }
    println!("{:-<78}", "");
}
