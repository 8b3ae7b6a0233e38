//! Short-Weierstrass curve abstraction and affine point arithmetic.
//!
//! Curves are capability markers implementing [Curve], consumed as type
//! parameters by the signature operations in [crate::ecdsa]. A curve exposes
//! its field prime, coefficients, group order, base point, and the signature
//! conventions tied to its name (whether `s` must be canonicalized to the low
//! half of the order).
//!
//! Points are affine. The point at infinity has no representation of its own:
//! every operation that can produce it returns [Option::None] instead, and
//! callers treat absence as failure or identity as the math requires.
//!
//! # Warning
//!
//! Arithmetic is not constant time. Scalars and coordinates are
//! arbitrary-precision integers whose operation latency depends on their
//! values, so this module is unsuitable where timing side channels are a
//! concern.

use num_bigint::BigInt;
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Signed, Zero};
use std::{fmt::Debug, hash::Hash, marker::PhantomData};
use thiserror::Error;

pub mod secp256k1;
pub mod secp256r1;
pub mod secp384r1;
pub use secp256k1::Secp256k1;
pub use secp256r1::Secp256r1;
pub use secp384r1::Secp384r1;

#[cfg(test)]
pub(crate) mod mocks;

/// Big-integer residue used for private keys, nonces, coordinates, and
/// signature components.
pub type Scalar = BigInt;

/// Errors that can occur when constructing curve points.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("coordinate out of range")]
    CoordinateOutOfRange,
    #[error("not on curve")]
    NotOnCurve,
}

/// Parameters and conventions of a short-Weierstrass curve
/// `y² = x³ + ax + b (mod p)`.
///
/// Implementations are zero-sized markers selected at the type level (e.g.
/// [Secp256k1], [Secp256r1], [Secp384r1]).
pub trait Curve: Clone + Send + Sync + Hash + Eq + Debug + 'static {
    /// Human-readable identifier of the curve.
    const NAME: &'static str;

    /// Whether signatures over this curve must carry `s` in the low half of
    /// `[1, N−1]`.
    const LOW_S: bool;

    /// Field prime `p`.
    fn prime() -> &'static Scalar;

    /// Coefficient `a`.
    fn a() -> &'static Scalar;

    /// Coefficient `b`.
    fn b() -> &'static Scalar;

    /// Order `N` of the cyclic group generated by [Curve::generator].
    fn order() -> &'static Scalar;

    /// Base point `G`.
    fn generator() -> &'static Point<Self>;

    /// Reduces a value into `[0, N−1]`.
    fn reduce(value: &Scalar) -> Scalar {
        value.mod_floor(Self::order())
    }
}

/// Affine point on curve `C`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Point<C: Curve> {
    x: Scalar,
    y: Scalar,
    _curve: PhantomData<C>,
}

impl<C: Curve> Point<C> {
    /// Creates a point from affine coordinates, rejecting coordinates outside
    /// `[0, p−1]` and points that do not satisfy the curve equation.
    pub fn from_coordinates(x: Scalar, y: Scalar) -> Result<Self, Error> {
        let prime = C::prime();
        if x.is_negative() || &x >= prime || y.is_negative() || &y >= prime {
            return Err(Error::CoordinateOutOfRange);
        }
        let point = Self {
            x,
            y,
            _curve: PhantomData,
        };
        if !point.is_on_curve() {
            return Err(Error::NotOnCurve);
        }
        Ok(point)
    }

    /// Creates a point without validation. Coordinates must already be
    /// canonical field elements.
    pub(crate) fn new_unchecked(x: Scalar, y: Scalar) -> Self {
        Self {
            x,
            y,
            _curve: PhantomData,
        }
    }

    /// The x-coordinate.
    pub fn x(&self) -> &Scalar {
        &self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> &Scalar {
        &self.y
    }

    /// Whether the point satisfies `y² ≡ x³ + ax + b (mod p)`.
    pub fn is_on_curve(&self) -> bool {
        let prime = C::prime();
        let lhs = (&self.y * &self.y).mod_floor(prime);
        let x_squared = (&self.x * &self.x).mod_floor(prime);
        let rhs = (&x_squared * &self.x + C::a() * &self.x + C::b()).mod_floor(prime);
        lhs == rhs
    }

    /// Adds two points. [None] when the sum is the point at infinity.
    pub fn add(&self, other: &Self) -> Option<Self> {
        let prime = C::prime();
        if self.x == other.x {
            if (&self.y + &other.y).mod_floor(prime).is_zero() {
                return None;
            }
            return self.double();
        }
        let numerator = (&other.y - &self.y).mod_floor(prime);
        let denominator = (&other.x - &self.x).mod_floor(prime);
        let slope = (numerator * mod_inverse(&denominator, prime)?).mod_floor(prime);
        Some(self.third_point(&slope, &other.x))
    }

    /// Doubles the point. [None] when the tangent is vertical (`y = 0`).
    pub fn double(&self) -> Option<Self> {
        let prime = C::prime();
        if self.y.is_zero() {
            return None;
        }
        let numerator = (Scalar::from(3) * &self.x * &self.x + C::a()).mod_floor(prime);
        let denominator = (Scalar::from(2) * &self.y).mod_floor(prime);
        let slope = (numerator * mod_inverse(&denominator, prime)?).mod_floor(prime);
        Some(self.third_point(&slope, &self.x))
    }

    /// Reflects the point across the x-axis.
    pub fn negate(&self) -> Self {
        let y = (-&self.y).mod_floor(C::prime());
        Self {
            x: self.x.clone(),
            y,
            _curve: PhantomData,
        }
    }

    /// Multiplies the point by a scalar with double-and-add. The scalar is
    /// reduced modulo the curve order first. [None] when the product is the
    /// point at infinity.
    pub fn mul(&self, scalar: &Scalar) -> Option<Self> {
        let scalar = C::reduce(scalar);
        let magnitude = scalar.magnitude();
        let mut acc: Option<Self> = None;
        for i in (0..magnitude.bits()).rev() {
            acc = acc.and_then(|point| point.double());
            if magnitude.bit(i) {
                acc = match acc {
                    Some(point) => point.add(self),
                    None => Some(self.clone()),
                };
            }
        }
        acc
    }

    /// Third intersection of the line with the given slope through `self` and
    /// `x2`, reflected. Slope and coordinates must be canonical.
    fn third_point(&self, slope: &Scalar, x2: &Scalar) -> Self {
        let prime = C::prime();
        let x = (slope * slope - &self.x - x2).mod_floor(prime);
        let y = ((&self.x - &x) * slope - &self.y).mod_floor(prime);
        Self {
            x,
            y,
            _curve: PhantomData,
        }
    }
}

impl<C: Curve> Debug for Point<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:x}, {:x})", self.x, self.y)
    }
}

/// Computes the modular inverse of `a` modulo `modulus`. [None] when no
/// inverse exists.
pub fn mod_inverse(a: &Scalar, modulus: &Scalar) -> Option<Scalar> {
    let a = a.mod_floor(modulus);
    if a.is_zero() {
        return None;
    }
    let ExtendedGcd { gcd, x, .. } = a.extended_gcd(modulus);
    if !gcd.is_one() {
        return None;
    }
    Some(x.mod_floor(modulus))
}

/// Computes a square root of `value` modulo `prime`. Valid for
/// `prime ≡ 3 (mod 4)`; every supported curve qualifies. [None] when no root
/// exists or the prime is unsupported.
pub fn mod_sqrt(value: &Scalar, prime: &Scalar) -> Option<Scalar> {
    if prime.mod_floor(&Scalar::from(4)) != Scalar::from(3) {
        return None;
    }
    let value = value.mod_floor(prime);
    let exponent = (prime + Scalar::one()) >> 2;
    let root = value.modpow(&exponent, prime);
    if (&root * &root).mod_floor(prime) != value {
        return None;
    }
    Some(root)
}
