//! Sign enum.

use crate::Float;

/// Positive or negative.
///
/// Used to tell which end of an axis something lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Positive.
    Pos = 1,
}
impl Sign {
    /// Returns an integer representation of the sign (either -1 or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0 or
    /// 1.0).
    pub const fn float(self) -> Float {
        self.int() as Float
    }

    /// Returns the more extreme of two values in the direction of the sign:
    /// the maximum for [`Sign::Pos`] and the minimum for [`Sign::Neg`].
    pub fn extremum(self, a: Float, b: Float) -> Float {
        match self {
            Sign::Neg => a.min(b),
            Sign::Pos => a.max(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sign_values() {
        assert_eq!(Sign::Pos.int(), 1);
        assert_eq!(Sign::Neg.float(), -1.0);
        assert_eq!(Sign::Pos.extremum(-3.0, 2.0), 2.0);
        assert_eq!(Sign::Neg.extremum(-3.0, 2.0), -3.0);
    }
}
