use common::types::SquareMatrix;

pub const BENCH_SIZES: [usize; 3] = [16, 32, 64];

/// Dense directed weight matrix with diagonal 0 and index-derived weights.
///
/// The weights vary with position so the compiler cannot fold the closure
/// work away, while runs stay byte-for-byte reproducible.
pub fn dense_closure_matrix(n: usize) -> SquareMatrix<f64> {
    let mut w = SquareMatrix::filled(n, 0.0);
    for i in 0..n {
        for j in 0..n {
            if i != j {
                w.set(i, j, 1.0 + ((i * 31 + j * 17) % 97) as f64);
            }
        }
    }
    w
}

/// Symmetric weight matrix with no self-distance (diagonal ∞), suitable for
/// spanning-tree runs. Weights depend only on the unordered pair.
pub fn symmetric_mst_matrix(n: usize) -> SquareMatrix<f64> {
    let mut w = SquareMatrix::filled(n, f64::INFINITY);
    for i in 0..n {
        for j in (i + 1)..n {
            let weight = 1.0 + ((i * 13 + j * 7) % 89) as f64;
            w.set(i, j, weight);
            w.set(j, i, weight);
        }
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_matrix_has_zero_diagonal() {
        let w = dense_closure_matrix(8);
        for i in 0..8 {
            assert_eq!(w.get(i, i), 0.0);
            for j in 0..8 {
                if i != j {
                    assert!(w.get(i, j) >= 1.0);
                }
            }
        }
    }

    #[test]
    fn mst_matrix_is_symmetric_with_open_diagonal() {
        let w = symmetric_mst_matrix(8);
        for i in 0..8 {
            assert_eq!(w.get(i, i), f64::INFINITY);
            for j in 0..8 {
                assert_eq!(w.get(i, j), w.get(j, i));
            }
        }
    }
}
