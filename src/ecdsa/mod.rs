//! ECDSA implementation over short-Weierstrass curves.
//!
//! Signatures are generated deterministically as specified in
//! [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979), with an optional
//! personalization string mixed into nonce derivation. Curves that demand it
//! normalize `s` into the lower half of the order, following
//! [BIP 62](https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki#low-s-values-in-signatures);
//! verification accepts either half. A signature can also be resolved back to
//! the public key that produced it through its recovery identifier.
//!
//! # Example
//! ```rust
//! use weierstrass_ecdsa::{PrivateKey, Secp256k1, Sha256};
//! use rand::rngs::OsRng;
//!
//! // Generate a new private key
//! let signer = PrivateKey::<Secp256k1>::from_rng(&mut OsRng);
//!
//! // Create a message to sign
//! let personalization = Some(&b"demo"[..]);
//! let msg = b"hello, world!";
//!
//! // Sign the message
//! let signature = signer.sign::<Sha256>(personalization, msg).unwrap();
//!
//! // Verify the signature (personalization only shapes the nonce)
//! assert!(signer.public_key().verify::<Sha256>(msg, &signature));
//! ```

mod nonce;
pub mod ops;

use crate::{
    curve::{Curve, Point, Scalar},
    utils::hex,
    Hasher,
};
use rand::{rngs::StdRng, CryptoRng, Rng, SeedableRng};
use std::{
    fmt::{Debug, Display},
    marker::PhantomData,
};
use thiserror::Error;

/// Errors that can occur when interacting with ECDSA.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid recovery")]
    InvalidRecovery,
    #[error("no inverse")]
    NoInverse,
    #[error("nonce attempts exhausted")]
    NonceExhausted,
}

/// ECDSA private key over curve `C`.
///
/// The corresponding public point is computed at construction, so deriving
/// the public key later never fails.
///
/// # Warning
///
/// The scalar lives in a heap allocation that cannot be zeroized on drop,
/// and arithmetic over it is not constant time.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey<C: Curve> {
    key: Scalar,
    public: Point<C>,
}

impl<C: Curve> PrivateKey<C> {
    /// Generates a new private key from the provided randomness.
    pub fn from_rng<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        let (key, public) = ops::keypair(rng);
        Self { key, public }
    }

    /// Creates a private key from a seed.
    ///
    /// # Warning
    ///
    /// This function is insecure and should only be used for examples
    /// and testing.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_rng(&mut rng)
    }

    /// Creates a private key from an existing scalar, rejecting values
    /// outside `[1, N−1]`.
    pub fn from_scalar(key: Scalar) -> Result<Self, Error> {
        let public = ops::compute_public(&key)?;
        Ok(Self { key, public })
    }

    /// Returns the public key corresponding to this private key.
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey {
            point: self.public.clone(),
        }
    }

    /// Signs the message, deriving the nonce deterministically from the key,
    /// the message digest, and the optional personalization string.
    ///
    /// Returns [Error::NonceExhausted] if every derivation attempt produced a
    /// degenerate signature component.
    pub fn sign<H: Hasher>(
        &self,
        personalization: Option<&[u8]>,
        message: &[u8],
    ) -> Result<Signature<C>, Error> {
        let (r, s) = ops::sign_message::<C, H>(&self.key, personalization, message)?;
        Ok(Signature {
            r,
            s,
            _curve: PhantomData,
        })
    }

    /// Returns the underlying scalar.
    pub fn as_scalar(&self) -> &Scalar {
        &self.key
    }
}

impl<C: Curve> Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&nonce::int2octets::<C>(&self.key)))
    }
}

impl<C: Curve> Display for PrivateKey<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&nonce::int2octets::<C>(&self.key)))
    }
}

/// ECDSA public key over curve `C`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey<C: Curve> {
    point: Point<C>,
}

impl<C: Curve> PublicKey<C> {
    /// Creates a public key from affine coordinates, rejecting points that do
    /// not satisfy the curve equation.
    pub fn from_coordinates(x: Scalar, y: Scalar) -> Result<Self, Error> {
        let point = Point::from_coordinates(x, y).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self { point })
    }

    /// Wraps a point without validating it. Verification re-checks the curve
    /// equation, so a bogus point fails there instead.
    pub(crate) fn from_point_unchecked(point: Point<C>) -> Self {
        Self { point }
    }

    /// Returns the public key of a private key.
    pub fn from_private(private_key: &PrivateKey<C>) -> Self {
        private_key.public_key()
    }

    /// Returns the underlying curve point.
    pub fn point(&self) -> &Point<C> {
        &self.point
    }

    /// Returns the x-coordinate.
    pub fn x(&self) -> &Scalar {
        self.point.x()
    }

    /// Returns the y-coordinate.
    pub fn y(&self) -> &Scalar {
        self.point.y()
    }

    /// Verifies the signature over the message.
    ///
    /// Never panics: malformed signatures and keys simply return `false`.
    pub fn verify<H: Hasher>(&self, message: &[u8], signature: &Signature<C>) -> bool {
        ops::verify_message::<C, H>(&self.point, message, &signature.r, &signature.s)
    }

    /// Computes the recovery identifier of a signature over the message,
    /// returning `0` when the signature does not verify under this key.
    pub fn recovery_id<H: Hasher>(&self, message: &[u8], signature: &Signature<C>) -> u8 {
        ops::recovery_id::<C, H>(&self.point, message, &signature.r, &signature.s)
    }

    /// Recovers the public key that produced a signature from its recovery
    /// identifier.
    pub fn recover<H: Hasher>(
        message: &[u8],
        signature: &Signature<C>,
        recovery_id: u8,
    ) -> Result<Self, Error> {
        let point =
            ops::recover_public_key::<C, H>(message, &signature.r, &signature.s, recovery_id)?;
        Ok(Self { point })
    }
}

impl<C: Curve> Debug for PublicKey<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<C: Curve> Display for PublicKey<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = nonce::octet_length(C::prime());
        write!(
            f,
            "{}{}",
            hex(&nonce::octets_be(self.point.x(), length)),
            hex(&nonce::octets_be(self.point.y(), length))
        )
    }
}

/// ECDSA signature over curve `C`, held as its `(r, s)` scalar pair.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature<C: Curve> {
    r: Scalar,
    s: Scalar,
    _curve: PhantomData<C>,
}

impl<C: Curve> Signature<C> {
    /// Creates a signature from its scalar pair, rejecting components outside
    /// `[1, N−1]`.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Result<Self, Error> {
        if !ops::in_scalar_range::<C>(&r) || !ops::in_scalar_range::<C>(&s) {
            return Err(Error::InvalidSignature);
        }
        Ok(Self {
            r,
            s,
            _curve: PhantomData,
        })
    }

    /// Returns the `r` component.
    pub fn r(&self) -> &Scalar {
        &self.r
    }

    /// Returns the `s` component.
    pub fn s(&self) -> &Scalar {
        &self.s
    }
}

impl<C: Curve> Debug for Signature<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<C: Curve> Display for Signature<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            hex(&nonce::int2octets::<C>(&self.r)),
            hex(&nonce::int2octets::<C>(&self.s))
        )
    }
}
