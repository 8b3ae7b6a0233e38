//! secp256r1 curve parameters (SEC 2, version 2.0, section 2.4.2), better
//! known as NIST P-256.

use super::{Curve, Point, Scalar};
use std::sync::LazyLock;

static PRIME: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        16,
    )
    .unwrap()
});

static A: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
        16,
    )
    .unwrap()
});

static B: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
        16,
    )
    .unwrap()
});

static ORDER: LazyLock<Scalar> = LazyLock::new(|| {
    Scalar::parse_bytes(
        b"ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        16,
    )
    .unwrap()
});

static GENERATOR: LazyLock<Point<Secp256r1>> = LazyLock::new(|| {
    let x = Scalar::parse_bytes(
        b"6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        16,
    )
    .unwrap();
    let y = Scalar::parse_bytes(
        b"4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
        16,
    )
    .unwrap();
    Point::from_coordinates(x, y).unwrap()
});

/// [Curve] marker for secp256r1 (NIST P-256).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Secp256r1;

impl Curve for Secp256r1 {
    const NAME: &'static str = "secp256r1";

    // FIPS 186-4 accepts either half of the order, so signatures are emitted
    // exactly as derived.
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
