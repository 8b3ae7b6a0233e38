//! Signature operations over short-Weierstrass curves.
//!
//! Signing derives nonces deterministically per
//! [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979) and retries with
//! a fresh derivation whenever a candidate nonce yields a degenerate
//! signature component. Verification is total: malformed inputs return
//! `false` rather than an error.

use super::{nonce, Error};
use crate::{
    curve::{mod_inverse, mod_sqrt, Curve, Point, Scalar},
    Hasher,
};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use rand::RngCore;
use zeroize::Zeroize;

/// Number of nonce derivations attempted before signing reports a defect.
///
/// A degenerate candidate occurs with probability about `2/N` per attempt,
/// so exhausting the limit indicates a broken curve definition rather than
/// bad luck.
pub const MAX_NONCE_ATTEMPTS: u32 = 32;

/// Computes the public key from the private key.
pub fn compute_public<C: Curve>(private_key: &Scalar) -> Result<Point<C>, Error> {
    if !in_scalar_range::<C>(private_key) {
        return Err(Error::InvalidPrivateKey);
    }
    C::generator()
        .mul(private_key)
        .ok_or(Error::InvalidPrivateKey)
}

/// Returns a new keypair derived from the provided randomness.
///
/// Candidates are drawn over the byte width of the curve order and truncated
/// to its bit length; draws outside `[1, N−1]` are rejected.
pub fn keypair<R: RngCore, C: Curve>(rng: &mut R) -> (Scalar, Point<C>) {
    let length = nonce::octet_length(C::order());
    loop {
        let mut candidate = vec![0u8; length];
        rng.fill_bytes(&mut candidate);
        let private_key = nonce::bits2int::<C>(&candidate);
        candidate.zeroize();
        if !in_scalar_range::<C>(&private_key) {
            continue;
        }
        if let Some(public_key) = C::generator().mul(&private_key) {
            return (private_key, public_key);
        }
    }
}

/// Hashes a message and interprets the digest as a scalar modulo the curve
/// order.
fn message_scalar<C: Curve, H: Hasher>(message: &[u8]) -> Scalar {
    let mut hasher = H::new();
    hasher.update(message);
    let digest = hasher.finalize();
    C::reduce(&nonce::bits2int::<C>(digest.as_ref()))
}

/// Whether a scalar is in `[1, N−1]`.
pub(crate) fn in_scalar_range<C: Curve>(value: &Scalar) -> bool {
    value.is_positive() && value < C::order()
}

/// Sums two optional points, treating absence as the point at infinity.
fn linear_combination<C: Curve>(
    left: Option<Point<C>>,
    right: Option<Point<C>>,
) -> Option<Point<C>> {
    match (left, right) {
        (Some(left), Some(right)) => left.add(&right),
        (Some(left), None) => Some(left),
        (None, right) => right,
    }
}

/// Signs the provided message with the private key, deriving the nonce
/// deterministically.
///
/// `personalization` is mixed into nonce derivation (and only nonce
/// derivation): signatures produced with different personalization differ
/// but verify identically.
///
/// When the curve requires low-s signatures, `s` is folded into the low half
/// of the order before being returned.
pub fn sign_message<C: Curve, H: Hasher>(
    private_key: &Scalar,
    personalization: Option<&[u8]>,
    message: &[u8],
) -> Result<(Scalar, Scalar), Error> {
    if !in_scalar_range::<C>(private_key) {
        return Err(Error::InvalidPrivateKey);
    }
    let mut hasher = H::new();
    hasher.update(message);
    let digest = hasher.finalize();
    let z = C::reduce(&nonce::bits2int::<C>(digest.as_ref()));
    let order = C::order();
    let half = order >> 1;
    for attempt in 0..MAX_NONCE_ATTEMPTS {
        let k = nonce::derive::<C>(private_key, digest.as_ref(), personalization, attempt);
        let Some(point) = C::generator().mul(&k) else {
            continue;
        };
        let r = C::reduce(point.x());
        if r.is_zero() {
            continue;
        }
        let Some(k_inverse) = mod_inverse(&k, order) else {
            continue;
        };
        let mut s = (&k_inverse * (&z + &r * private_key)).mod_floor(order);
        if s.is_zero() {
            continue;
        }
        if C::LOW_S && s > half {
            s = order - &s;
        }
        return Ok((r, s));
    }
    Err(Error::NonceExhausted)
}

/// Recomputes the point whose x-coordinate a valid signature commits to.
fn verification_point<C: Curve, H: Hasher>(
    public_key: &Point<C>,
    message: &[u8],
    r: &Scalar,
    s: &Scalar,
) -> Option<Point<C>> {
    if !in_scalar_range::<C>(r) || !in_scalar_range::<C>(s) {
        return None;
    }
    if !public_key.is_on_curve() {
        return None;
    }
    let order = C::order();
    let s_inverse = mod_inverse(s, order)?;
    let u1 = (message_scalar::<C, H>(message) * &s_inverse).mod_floor(order);
    let u2 = (r * &s_inverse).mod_floor(order);
    linear_combination(C::generator().mul(&u1), public_key.mul(&u2))
}

/// Verifies the signature with the provided public key.
///
/// Returns `false` for any malformed input: out-of-range signature scalars, a
/// public key that does not satisfy the curve equation, or a degenerate
/// verification point. Both halves of the order are accepted for `s`,
/// regardless of how the signing side canonicalizes.
pub fn verify_message<C: Curve, H: Hasher>(
    public_key: &Point<C>,
    message: &[u8],
    r: &Scalar,
    s: &Scalar,
) -> bool {
    match verification_point::<C, H>(public_key, message, r, s) {
        Some(point) => C::reduce(point.x()) == *r,
        None => false,
    }
}

/// Computes the recovery identifier for a signature.
///
/// The signature is re-verified against the public key first; `0` is returned
/// when it does not check out. Otherwise the identifier is `27` plus the
/// parity bit of the verification point's y-coordinate, plus an overflow bit
/// recording whether the x-coordinate exceeded the order of the active curve.
pub fn recovery_id<C: Curve, H: Hasher>(
    public_key: &Point<C>,
    message: &[u8],
    r: &Scalar,
    s: &Scalar,
) -> u8 {
    let Some(point) = verification_point::<C, H>(public_key, message, r, s) else {
        return 0;
    };
    if C::reduce(point.x()) != *r {
        return 0;
    }
    let mut id = 27;
    if point.y().is_odd() {
        id += 1;
    }
    if point.x() >= C::order() {
        id += 2;
    }
    id
}

/// Recovers the public key a signature was produced with from its recovery
/// identifier.
pub fn recover_public_key<C: Curve, H: Hasher>(
    message: &[u8],
    r: &Scalar,
    s: &Scalar,
    recovery_id: u8,
) -> Result<Point<C>, Error> {
    if !(27..=30).contains(&recovery_id) {
        return Err(Error::InvalidRecovery);
    }
    if !in_scalar_range::<C>(r) || !in_scalar_range::<C>(s) {
        return Err(Error::InvalidSignature);
    }
    let bits = recovery_id - 27;
    let mut x = r.clone();
    if bits & 0x02 != 0 {
        x += C::order();
    }
    let prime = C::prime();
    if &x >= prime {
        return Err(Error::InvalidSignature);
    }
    let y_squared = (&x * &x * &x + C::a() * &x + C::b()).mod_floor(prime);
    let mut y = mod_sqrt(&y_squared, prime).ok_or(Error::InvalidSignature)?;
    if y.is_odd() != (bits & 0x01 != 0) {
        y = prime - &y;
    }
    let point = Point::<C>::from_coordinates(x, y).map_err(|_| Error::InvalidSignature)?;
    let order = C::order();
    let r_inverse = mod_inverse(r, order).ok_or(Error::NoInverse)?;
    let u1 = C::reduce(&(-(message_scalar::<C, H>(message) * &r_inverse)));
    let u2 = (s * &r_inverse).mod_floor(order);
    linear_combination(C::generator().mul(&u1), point.mul(&u2)).ok_or(Error::InvalidSignature)
}
