use crate::error::Error;

/// Type alias for a single weighted edge: (from, to, weight)
pub type Edge<T> = (usize, usize, T);

/// Dense, row-major n×n weight matrix.
///
/// Entry (i, j) holds the weight of edge i→j; the semiring's `zero`
/// conventionally marks "no edge". The side length `n` is fixed at
/// construction, so dimension mismatches between matrix and algorithms
/// cannot arise.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    n: usize,
    data: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Creates an n×n matrix with every entry set to `value`.
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    /// Returns `Error::NonSquareMatrix` if any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in &rows {
            if row.len() != n {
                return Err(Error::NonSquareMatrix);
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Side length of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i * self.n + j] = value;
    }

    /// Borrow row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// Result of a closure run.
///
/// All-pairs runs produce `n` rows; single-source runs are wrapped as a
/// one-row matrix for interface uniformity. An empty (n = 0) run has zero
/// rows. Accessors mirror `SquareMatrix` so results are directly diffable
/// against oracle output.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<T> {
    rows: usize,
    n: usize,
    data: Vec<T>,
}

impl<T: Copy> DistanceMatrix<T> {
    pub fn from_square(matrix: SquareMatrix<T>) -> Self {
        Self {
            rows: matrix.n,
            n: matrix.n,
            data: matrix.data,
        }
    }

    pub fn single_row(row: Vec<T>) -> Self {
        Self {
            rows: 1,
            n: row.len(),
            data: row,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (the vertex count of the underlying graph).
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Converts back to a square matrix, if this is an all-pairs result.
    pub fn into_square(self) -> Option<SquareMatrix<T>> {
        if self.rows == self.n {
            Some(SquareMatrix {
                n: self.n,
                data: self.data,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_square_input() {
        let m = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.n(), 2);
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m.row(0), &[1, 2]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = SquareMatrix::from_rows(vec![vec![1, 2], vec![3]]);
        assert!(matches!(result, Err(Error::NonSquareMatrix)));
    }

    #[test]
    fn from_rows_accepts_empty_input() {
        let m = SquareMatrix::<i32>::from_rows(vec![]).unwrap();
        assert_eq!(m.n(), 0);
    }

    #[test]
    fn distance_matrix_round_trips_square_results() {
        let m = SquareMatrix::filled(3, 7.0);
        let d = DistanceMatrix::from_square(m.clone());
        assert_eq!(d.rows(), 3);
        assert_eq!(d.into_square(), Some(m));
    }

    #[test]
    fn single_row_result_is_not_square() {
        let d = DistanceMatrix::single_row(vec![0.0, 1.0, 2.0]);
        assert_eq!(d.rows(), 1);
        assert_eq!(d.n(), 3);
        assert_eq!(d.row(0), &[0.0, 1.0, 2.0]);
        assert_eq!(d.into_square(), None);
    }
}
