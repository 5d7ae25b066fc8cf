use common::error::Error;
use common::types::{Edge, SquareMatrix};

/// Algebraic structure (S, ⊕, ⊗, 0̄, 1̄) driving every generalized algorithm.
///
/// `add` must be associative and commutative with identity `zero`;
/// `multiply` must be associative with identity `one` and distribute over
/// `add`; `zero` must absorb under `multiply`. [`Semiring::new`] trusts the
/// caller on all of this; violating the laws silently degrades results.
/// [`Semiring::checked`] validates them on a caller-supplied sample instead.
#[derive(Clone, Copy)]
pub struct Semiring<T: Copy + PartialEq> {
    add: fn(T, T) -> T,
    multiply: fn(T, T) -> T,
    zero: T,
    one: T,
}

impl<T: Copy + PartialEq> Semiring<T> {
    /// Constructs a semiring without checking the laws (a documented
    /// contract, not a runtime invariant).
    pub fn new(add: fn(T, T) -> T, multiply: fn(T, T) -> T, zero: T, one: T) -> Self {
        Self {
            add,
            multiply,
            zero,
            one,
        }
    }

    /// Constructs a semiring after verifying the laws on every triple drawn
    /// from `samples`.
    ///
    /// Sampled, not exhaustive: passing proves nothing beyond the sample,
    /// but a failure pinpoints the violated law instead of degrading results
    /// silently downstream.
    ///
    /// # Errors
    /// Returns `Error::SemiringLawViolation` naming the first law that fails.
    pub fn checked(
        add: fn(T, T) -> T,
        multiply: fn(T, T) -> T,
        zero: T,
        one: T,
        samples: &[T],
    ) -> Result<Self, Error> {
        let semiring = Self::new(add, multiply, zero, one);
        semiring.check_laws(samples)?;
        Ok(semiring)
    }

    fn check_laws(&self, samples: &[T]) -> Result<(), Error> {
        let add = self.add;
        let mul = self.multiply;

        for &a in samples {
            if add(a, self.zero) != a {
                return Err(Error::SemiringLawViolation("zero is not the identity of add"));
            }
            if mul(a, self.one) != a || mul(self.one, a) != a {
                return Err(Error::SemiringLawViolation(
                    "one is not the identity of multiply",
                ));
            }
            if mul(self.zero, a) != self.zero || mul(a, self.zero) != self.zero {
                return Err(Error::SemiringLawViolation(
                    "zero does not absorb under multiply",
                ));
            }
            for &b in samples {
                if add(a, b) != add(b, a) {
                    return Err(Error::SemiringLawViolation("add is not commutative"));
                }
                for &c in samples {
                    if add(a, add(b, c)) != add(add(a, b), c) {
                        return Err(Error::SemiringLawViolation("add is not associative"));
                    }
                    if mul(a, mul(b, c)) != mul(mul(a, b), c) {
                        return Err(Error::SemiringLawViolation("multiply is not associative"));
                    }
                    if mul(a, add(b, c)) != add(mul(a, b), mul(a, c)) {
                        return Err(Error::SemiringLawViolation(
                            "multiply does not left-distribute over add",
                        ));
                    }
                    if mul(add(a, b), c) != add(mul(a, c), mul(b, c)) {
                        return Err(Error::SemiringLawViolation(
                            "multiply does not right-distribute over add",
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn add(&self, a: T, b: T) -> T {
        (self.add)(a, b)
    }

    pub fn multiply(&self, a: T, b: T) -> T {
        (self.multiply)(a, b)
    }

    /// Additive identity; also the "no edge" marker in weight matrices.
    pub fn zero(&self) -> T {
        self.zero
    }

    /// Multiplicative identity; the closure's diagonal value.
    pub fn one(&self) -> T {
        self.one
    }

    /// Materializes a dense weight matrix from an edge list.
    ///
    /// Absent edges become this semiring's `zero`: the edge list is the
    /// explicit "edge exists" representation, so no universal missing-edge
    /// sentinel is ever hard-coded. A repeated (u, v) pair keeps the last
    /// weight.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` for an endpoint ≥ `n`.
    pub fn dense_from_edges(&self, n: usize, edges: &[Edge<T>]) -> Result<SquareMatrix<T>, Error> {
        let mut matrix = SquareMatrix::filled(n, self.zero);
        for &(u, v, weight) in edges {
            if u >= n {
                return Err(Error::NodeIndexOutOfBounds(u));
            }
            if v >= n {
                return Err(Error::NodeIndexOutOfBounds(v));
            }
            matrix.set(u, v, weight);
        }
        Ok(matrix)
    }

    /// Like [`dense_from_edges`](Self::dense_from_edges), then forces the
    /// diagonal to `one`, the closure's identity convention. Self-loops in
    /// the input are overridden.
    pub fn dense_with_identity(
        &self,
        n: usize,
        edges: &[Edge<T>],
    ) -> Result<SquareMatrix<T>, Error> {
        let mut matrix = self.dense_from_edges(n, edges)?;
        for i in 0..n {
            matrix.set(i, i, self.one);
        }
        Ok(matrix)
    }
}

impl Semiring<f64> {
    /// Shortest-path semiring (min, +, ∞, 0).
    pub fn shortest_path() -> Self {
        Self::new(f64::min, |a, b| a + b, f64::INFINITY, 0.0)
    }

    /// Longest-path semiring (max, +, −∞, 0).
    pub fn longest_path() -> Self {
        Self::new(f64::max, |a, b| a + b, f64::NEG_INFINITY, 0.0)
    }

    /// Widest-path (maximum capacity) semiring (max, min, 0, ∞).
    pub fn widest_path() -> Self {
        Self::new(f64::max, f64::min, 0.0, f64::INFINITY)
    }
}

impl Semiring<bool> {
    /// Reachability semiring (∨, ∧, false, true).
    pub fn reachability() -> Self {
        Self::new(|a, b| a || b, |a, b| a && b, false, true)
    }
}

impl Semiring<u64> {
    /// Path-count semiring (+, ×, 0, 1).
    pub fn path_count() -> Self {
        Self::new(|a, b| a + b, |a, b| a * b, 0, 1)
    }
}

#[cfg(test)]
mod semiring_tests {
    use super::*;

    // Integer-valued floats keep every law check exact in f64 arithmetic.
    const FLOAT_SAMPLES: [f64; 5] = [0.0, 1.0, 2.0, 5.0, f64::INFINITY];

    #[test]
    fn shortest_path_laws_hold_on_samples() {
        let sr = Semiring::shortest_path();
        assert!(
            Semiring::checked(f64::min, |a, b| a + b, sr.zero(), sr.one(), &FLOAT_SAMPLES).is_ok()
        );
    }

    #[test]
    fn longest_path_laws_hold_on_samples() {
        let samples = [0.0, 1.0, 3.0, f64::NEG_INFINITY];
        assert!(
            Semiring::checked(f64::max, |a, b| a + b, f64::NEG_INFINITY, 0.0, &samples).is_ok()
        );
    }

    #[test]
    fn widest_path_laws_hold_on_samples() {
        let samples = [0.0, 1.0, 4.0, f64::INFINITY];
        assert!(Semiring::checked(f64::max, f64::min, 0.0, f64::INFINITY, &samples).is_ok());
    }

    #[test]
    fn reachability_laws_hold_exhaustively() {
        assert!(
            Semiring::checked(|a, b| a || b, |a, b| a && b, false, true, &[false, true]).is_ok()
        );
    }

    #[test]
    fn path_count_laws_hold_on_samples() {
        assert!(Semiring::checked(|a, b| a + b, |a, b| a * b, 0u64, 1, &[0, 1, 2, 3, 7]).is_ok());
    }

    #[test]
    fn subtraction_is_rejected_as_add() {
        // (a - b) is neither commutative nor has 0 as a two-sided identity.
        let result = Semiring::checked(|a: i64, b| a - b, |a, b| a * b, 0, 1, &[1, 2, 3]);
        assert!(matches!(result, Err(Error::SemiringLawViolation(_))));
    }

    #[test]
    fn missing_absorption_is_named() {
        // max with zero = 0 does not absorb under + (0 + 5 = 5 ≠ 0).
        let result = Semiring::checked(
            |a: i64, b| a.max(b),
            |a, b| a + b,
            0,
            0,
            &[0, 5],
        );
        match result {
            Err(Error::SemiringLawViolation(law)) => {
                assert_eq!(law, "zero does not absorb under multiply")
            }
            other => panic!("expected a law violation, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn dense_from_edges_translates_absence_to_zero() {
        let sr = Semiring::shortest_path();
        let w = sr.dense_from_edges(3, &[(0, 1, 2.5), (2, 0, 4.0)]).unwrap();
        assert_eq!(w.get(0, 1), 2.5);
        assert_eq!(w.get(2, 0), 4.0);
        assert_eq!(w.get(1, 2), f64::INFINITY);
        assert_eq!(w.get(0, 0), f64::INFINITY);
    }

    #[test]
    fn dense_with_identity_sets_diagonal_to_one() {
        let sr = Semiring::shortest_path();
        let w = sr.dense_with_identity(2, &[(0, 1, 3.0), (1, 1, 9.0)]).unwrap();
        assert_eq!(w.get(0, 0), 0.0);
        assert_eq!(w.get(1, 1), 0.0); // explicit self-loop overridden
        assert_eq!(w.get(0, 1), 3.0);
    }

    #[test]
    fn dense_from_edges_rejects_out_of_range_endpoint() {
        let sr = Semiring::shortest_path();
        let result = sr.dense_from_edges(2, &[(0, 2, 1.0)]);
        assert!(matches!(result, Err(Error::NodeIndexOutOfBounds(2))));
    }

    #[test]
    fn reachability_zero_marks_no_edge() {
        let sr = Semiring::reachability();
        let w = sr.dense_with_identity(2, &[(0, 1, true)]).unwrap();
        assert!(w.get(0, 1));
        assert!(!w.get(1, 0));
        assert!(w.get(0, 0));
    }
}
