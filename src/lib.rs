//! Sign arbitrary messages over short-Weierstrass curves and deterministically
//! verify them.
//!
//! # Status
//!
//! `weierstrass-ecdsa` is **ALPHA** software and is not yet recommended for
//! production use. Developers should expect breaking changes and occasional
//! instability.
//!
//! # Warning
//!
//! Scalar and point arithmetic is implemented over arbitrary-precision
//! integers and is not constant time. Key material is held in allocations
//! that cannot be fully zeroized. Use a hardened implementation where side
//! channels are a concern.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::Deref,
};

pub mod curve;
pub use curve::{Curve, Point, Scalar, Secp256k1, Secp256r1, Secp384r1};
pub mod ecdsa;
pub use ecdsa::{PrivateKey, PublicKey, Signature};
pub mod sha256;
pub use sha256::{hash, Sha256};
pub mod utils;

/// A fixed-size cryptographic digest, cheap to copy and usable as a map key.
pub trait Digest:
    Clone
    + Copy
    + Eq
    + PartialEq
    + Ord
    + PartialOrd
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + AsRef<[u8]>
    + Deref<Target = [u8]>
    + for<'a> TryFrom<&'a [u8]>
    + 'static
{
    /// Number of bytes in the digest.
    const SIZE: usize;
}

/// Interface this crate relies on for hashing.
///
/// Signing and verification are not hardcoded to a specific algorithm because
/// different hash functions may work better with different deployments or
/// provide different levels of security (with some performance penalty).
///
/// This trait is required to implement the `Clone` trait because it is often
/// part of a struct that is cloned. In practice, implementations do not
/// actually clone the hasher state but users should not rely on this behavior
/// and call `reset` after cloning.
pub trait Hasher: Clone + Send + Sync + 'static {
    /// Digest generated by the hasher.
    type Digest: Digest;

    /// Create a new hasher.
    fn new() -> Self;

    /// Append message to previously recorded data.
    fn update(&mut self, message: &[u8]);

    /// Hash all recorded data and reset the hasher
    /// to the initial state.
    fn finalize(&mut self) -> Self::Digest;

    /// Reset the hasher without generating a hash.
    ///
    /// This function does not need to be called after `finalize`.
    fn reset(&mut self);

    /// Return result of hashing nothing.
    fn empty() -> Self::Digest;
}
