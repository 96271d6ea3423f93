//! Approximate comparison functions.

pub use approx::AbsDiffEq;

use crate::{EPSILON, Float};

/// Compares two values, but considers them equal if they are separated by less
/// than `EPSILON`.
///
/// Handles infinity specially.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T) -> bool {
    approx_eq_within(a, b, EPSILON)
}

/// Compares two values, but considers them equal if they are separated by less
/// than `epsilon`.
///
/// Use this instead of [`approx_eq()`] for lengths, with `epsilon` scaled to
/// the size of the geometry being compared.
pub fn approx_eq_within<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T, epsilon: Float) -> bool {
    // use native float equality to handle infinities
    a == b || approx::abs_diff_eq!(a, b, epsilon = epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_tolerates_drift() {
        let drifted = 16.5 + 1e-12;
        assert!(approx_eq(&16.5, &drifted));
        assert!(!approx_eq(&16.5, &16.6));
        assert!(approx_eq(&Float::INFINITY, &Float::INFINITY));
    }

    #[test]
    fn test_approx_eq_within_scale() {
        // Tiny lengths need a tiny epsilon.
        assert!(approx_eq(&1.5e-7, &-1.5e-7));
        assert!(!approx_eq_within(&1.5e-7, &-1.5e-7, 1.5e-13));
        assert!(approx_eq_within(&1.5e-7, &(1.5e-7 + 1e-20), 1.5e-13));

        // Huge lengths need a huge one.
        assert!(!approx_eq(&1.6e9, &(1.6e9 + 1e-5)));
        assert!(approx_eq_within(&1.6e9, &(1.6e9 + 1e-5), 1.6e3));
    }
}
