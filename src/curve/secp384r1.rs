//! secp384r1 curve parameters (SEC 2, version 2.0, section 2.5.1), better
//! known as NIST P-384.

use super::{Curve, Point, Scalar};
use std::sync::LazyLock;

static PRIME: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
          ffffffff0000000000000000ffffffff",
        16,
    )
    .unwrap()
});

static A: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
          ffffffff0000000000000000fffffffc",
        16,
    )
    .unwrap()
});

static B: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a\
          c656398d8a2ed19d2a85c8edd3ec2aef",
        16,
    )
    .unwrap()
});

static ORDER: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf\
          581a0db248b0a77aecec196accc52973",
        16,
    )
    .unwrap()
});

static GENERATOR: LazyLock<Point<Secp384r1>> = LazyLock::new(|| {
    let x = Scalar::parse_bytes(
        b"aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38\
          5502f25dbf55296c3a545e3872760ab7",
        16,
    )
    .unwrap();
    let y = Scalar::parse_bytes(
        b"3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0\
          0a60b1ce1d7e819d7a431d7c90ea0e5f",
        16,
    )
    .unwrap();
    Point::from_coordinates(x, y).unwrap()
});

/// [Curve] marker for secp384r1 (NIST P-384).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Secp384r1;

impl Curve for Secp384r1 {
    const NAME: &'static str = "secp384r1";

    // Like the other NIST curve, either half of the order verifies, so `s`
    // is left as derived.
    const LOW_S: bool = false;

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
