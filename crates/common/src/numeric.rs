/// Absolute difference between two distance values.
///
/// Two equal values (including two infinities of the same sign, the usual
/// "both unreachable" case) differ by 0. A finite value compared against an
/// infinity differs by infinity, so a reachability disagreement can never
/// slip under a tolerance.
pub fn abs_diff(a: f64, b: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    if a.is_infinite() || b.is_infinite() {
        return f64::INFINITY;
    }
    (a - b).abs()
}

/// True when `a` and `b` agree within `tolerance` under [`abs_diff`].
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    abs_diff(a, b) <= tolerance
}

#[cfg(test)]
mod numeric_tests {
    use super::*;

    #[test]
    fn equal_infinities_differ_by_zero() {
        assert_eq!(abs_diff(f64::INFINITY, f64::INFINITY), 0.0);
        assert_eq!(abs_diff(f64::NEG_INFINITY, f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn opposite_infinities_differ_by_infinity() {
        assert_eq!(abs_diff(f64::NEG_INFINITY, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn finite_vs_infinite_never_passes_tolerance() {
        assert!(!approx_eq(1.0e12, f64::INFINITY, 1.0e15));
    }

    #[test]
    fn finite_difference_is_symmetric() {
        assert_eq!(abs_diff(3.5, 1.0), 2.5);
        assert_eq!(abs_diff(1.0, 3.5), 2.5);
    }

    #[test]
    fn tolerance_is_inclusive() {
        assert!(approx_eq(1.0, 1.5, 0.5));
        assert!(!approx_eq(1.0, 1.5, 0.25));
    }
}
