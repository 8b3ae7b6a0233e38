//! Curves usable only from tests, with parameters small enough to reach
//! signing paths the production curves cannot.

use super::{Curve, Point, Scalar};
use std::sync::LazyLock;

static TINY_PRIME: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(10007));

static TINY_A: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(1));

static TINY_B: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(28));

static TINY_ORDER: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(9851));

static TINY_GENERATOR: LazyLock<Point<Tiny>> =
    LazyLock::new(|| Point::from_coordinates(Scalar::from(2), Scalar::from(5425)).unwrap());

/// Curve over a 14-bit field whose group has prime order 9851.
///
/// The order is small enough that messages whose first signing attempt
/// degenerates (`r = 0` or `s = 0`) exist and are pinned in tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tiny;

impl Curve for Tiny {
    const NAME: &'static str = "tiny";

    const LOW_S: bool = false;

    fn prime() -> &'static Scalar {
        &TINY_PRIME
    }

    fn a() -> &'static Scalar {
        &TINY_A
    }

    fn b() -> &'static Scalar {
        &TINY_B
    }

    fn order() -> &'static Scalar {
        &TINY_ORDER
    }

    fn generator() -> &'static Point<Self> {
        &TINY_GENERATOR
    }
}

static DEGENERATE_PRIME: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(23));

static DEGENERATE_A: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(1));

static DEGENERATE_B: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(0));

static DEGENERATE_ORDER: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(5));

static DEGENERATE_GENERATOR: LazyLock<Point<Degenerate>> =
    LazyLock::new(|| Point::from_coordinates(Scalar::from(0), Scalar::from(0)).unwrap());

/// Curve whose generator `(0, 0)` has order two: every scalar multiple is the
/// point at infinity or reduces `r` to zero, so signing can never complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Degenerate;

impl Curve for Degenerate {
    const NAME: &'static str = "degenerate";

    const LOW_S: bool = false;

    fn prime() -> &'static Scalar {
        &DEGENERATE_PRIME
    }

    fn a() -> &'static Scalar {
        &DEGENERATE_A
    }

    fn b() -> &'static Scalar {
        &DEGENERATE_B
    }

    fn order() -> &'static Scalar {
        &DEGENERATE_ORDER
    }

    fn generator() -> &'static Point<Self> {
        &DEGENERATE_GENERATOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_generator_has_claimed_order() {
        let generator = Tiny::generator();
        assert!(generator.is_on_curve());
        let last = generator.mul(&(Tiny::order() - Scalar::from(1))).unwrap();
        assert_eq!(last, generator.negate());
        assert!(last.add(generator).is_none());
    }

    #[test]
    fn test_degenerate_generator_collapses() {
        let generator = Degenerate::generator();
        assert!(generator.is_on_curve());
        assert!(generator.double().is_none());
        assert_eq!(generator.mul(&Scalar::from(3)), Some(generator.clone()));
        assert!(generator.mul(&Scalar::from(4)).is_none());
    }
}
