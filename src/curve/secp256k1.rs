//! secp256k1 curve parameters (SEC 2, version 2.0, section 2.4.1).

use super::{Curve, Point, Scalar};
use std::sync::LazyLock;

static PRIME: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .unwrap()
});

static A: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(0));

static B: LazyLock<Scalar> = LazyLock::new(|| Scalar::from(7));

static ORDER: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        16,
    )
    .unwrap()
});

static GENERATOR: LazyLock<Point<Secp256k1>> = LazyLock::new(|| {
    let x = Scalar::parse_bytes(
        b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        16,
    )
    .unwrap();
    let y = Scalar::parse_bytes(
        b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        16,
    )
    .unwrap();
    Point::from_coordinates(x, y).unwrap()
});

/// [Curve] marker for secp256k1 (the Bitcoin curve).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    const NAME: &'static str = "secp256k1";

    // Bitcoin treats transactions carrying high-s signatures as non-standard.
    const LOW_S: bool = true;

    fn prime() -> &'static Scalar {
        &PRIME
    }

    fn a() -> &'static Scalar {
        &A
    }

    fn b() -> &'static Scalar {
        &B
    }

    fn order() -> &'static Scalar {
        &ORDER
    }

    fn generator() -> &'static Point<Self> {
        &GENERATOR
    }
}
