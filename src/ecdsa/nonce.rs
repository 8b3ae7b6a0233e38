//! Deterministic nonce derivation, following
//! [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979).

use crate::curve::{Curve, Scalar};
use num_bigint::Sign;
use num_traits::Zero;
use sha2::{Digest as _, Sha256 as ISha256};
use zeroize::Zeroize;

const BLOCK_LENGTH: usize = 64;
const DIGEST_LENGTH: usize = 32;

/// Computes HMAC-SHA256 over the concatenation of `parts`.
fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> [u8; DIGEST_LENGTH] {
    let mut block = [0u8; BLOCK_LENGTH];
    if key.len() > BLOCK_LENGTH {
        let digest = ISha256::digest(key);
        block[..DIGEST_LENGTH].copy_from_slice(&digest);
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    let mut pad = [0u8; BLOCK_LENGTH];
    for (i, byte) in block.iter().enumerate() {
        pad[i] = byte ^ 0x36;
    }
    let mut inner = ISha256::new();
    inner.update(pad);
    for part in parts {
        inner.update(part);
    }
    let inner_digest = inner.finalize();
    for (i, byte) in block.iter().enumerate() {
        pad[i] = byte ^ 0x5c;
    }
    let mut outer = ISha256::new();
    outer.update(pad);
    outer.update(inner_digest);
    let digest = outer.finalize().into();
    block.zeroize();
    pad.zeroize();
    digest
}

/// Number of octets spanned by values reduced modulo the given modulus.
pub(crate) fn octet_length(modulus: &Scalar) -> usize {
    ((modulus.bits() + 7) / 8) as usize
}

/// Encodes a non-negative value as fixed-width big-endian octets.
///
/// The value must fit in `length` octets.
pub(crate) fn octets_be(value: &Scalar, length: usize) -> Vec<u8> {
    let (_, bytes) = value.to_bytes_be();
    debug_assert!(bytes.len() <= length);
    let mut octets = vec![0u8; length];
    octets[length - bytes.len()..].copy_from_slice(&bytes);
    octets
}

/// Encodes a scalar over the byte width of the curve order (RFC 6979
/// `int2octets`).
pub(crate) fn int2octets<C: Curve>(value: &Scalar) -> Vec<u8> {
    octets_be(value, octet_length(C::order()))
}

/// Interprets bytes as a big-endian integer, keeping only the leftmost bits
/// up to the bit length of the curve order (RFC 6979 `bits2int`).
pub(crate) fn bits2int<C: Curve>(bytes: &[u8]) -> Scalar {
    let value = Scalar::from_bytes_be(Sign::Plus, bytes);
    let bits = 8 * bytes.len() as u64;
    let order_bits = C::order().bits();
    if bits > order_bits {
        value >> (bits - order_bits)
    } else {
        value
    }
}

/// Truncates, reduces modulo the order, and encodes (RFC 6979 `bits2octets`).
fn bits2octets<C: Curve>(digest: &[u8]) -> Vec<u8> {
    int2octets::<C>(&C::reduce(&bits2int::<C>(digest)))
}

/// Derives the nonce for one signing attempt (RFC 6979 section 3.2, with the
/// section 3.6 extra data slot).
///
/// `personalization` is fed into the derivation as extra data. `attempt` is
/// appended big-endian after it on retries so each attempt draws an unrelated
/// nonce; the first attempt omits it and reproduces the published vectors.
///
/// The returned nonce is always in `[1, N−1]`.
pub(crate) fn derive<C: Curve>(
    private_key: &Scalar,
    digest: &[u8],
    personalization: Option<&[u8]>,
    attempt: u32,
) -> Scalar {
    let mut key_octets = int2octets::<C>(private_key);
    let digest_octets = bits2octets::<C>(digest);
    let mut extra = Vec::new();
    if let Some(personalization) = personalization {
        extra.extend_from_slice(personalization);
    }
    if attempt > 0 {
        extra.extend_from_slice(&attempt.to_be_bytes());
    }

    let mut v = [0x01u8; DIGEST_LENGTH];
    let mut k = [0x00u8; DIGEST_LENGTH];
    k = hmac_sha256(&k, &[&v, &[0x00], &key_octets, &digest_octets, &extra]);
    v = hmac_sha256(&k, &[&v]);
    k = hmac_sha256(&k, &[&v, &[0x01], &key_octets, &digest_octets, &extra]);
    v = hmac_sha256(&k, &[&v]);

    let order_bits = C::order().bits();
    loop {
        let mut t = Vec::new();
        while 8 * (t.len() as u64) < order_bits {
            v = hmac_sha256(&k, &[&v]);
            t.extend_from_slice(&v);
        }
        let candidate = bits2int::<C>(&t);
        t.zeroize();
        if !candidate.is_zero() && &candidate < C::order() {
            key_octets.zeroize();
            v.zeroize();
            k.zeroize();
            return candidate;
        }
        k = hmac_sha256(&k, &[&v, &[0x00]]);
        v = hmac_sha256(&k, &[&v]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        curve::{mocks::Tiny, Secp256k1, Secp256r1, Secp384r1},
        sha256,
        utils::hex,
    };

    fn scalar(encoded: &str) -> Scalar {
        Scalar::parse_bytes(encoded.as_bytes(), 16).unwrap()
    }

    #[test]
    fn test_hmac_sha256() {
        // RFC 4231 test case 1.
        let digest = hmac_sha256(&[0x0b; 20], &[b"Hi There"]);
        assert_eq!(
            hex(&digest),
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
        );
        // RFC 4231 test case 2, split across parts.
        let digest = hmac_sha256(b"Jefe", &[b"what do ya want ", b"for nothing?"]);
        assert_eq!(
            hex(&digest),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_rfc6979_secp256r1_sample() {
        let private_key =
            scalar("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
        let digest = sha256::hash(b"sample");
        let nonce = derive::<Secp256r1>(&private_key, digest.as_ref(), None, 0);
        assert_eq!(
            nonce,
            scalar("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60")
        );
    }

    #[test]
    fn test_rfc6979_secp256r1_test() {
        let private_key =
            scalar("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
        let digest = sha256::hash(b"test");
        let nonce = derive::<Secp256r1>(&private_key, digest.as_ref(), None, 0);
        assert_eq!(
            nonce,
            scalar("d16b6ae827f17175e040871a1c7ec3500192c4c92677336ec2537acaee0008e0")
        );
    }

    #[test]
    fn test_rfc6979_secp384r1_sample() {
        let private_key = scalar(
            "6b9d3dad2e1b8c1c05b19875b6659f4de23c3b667bf297ba9aa47740787137d8\
             96d5724e4c70a825f872c9ea60d2edf5",
        );
        let digest = sha256::hash(b"sample");
        let nonce = derive::<Secp384r1>(&private_key, digest.as_ref(), None, 0);
        assert_eq!(
            nonce,
            scalar(
                "180ae9f9aec5438a44bc159a1fcb277c7be54fa20e7cf404b490650a8acc414e\
                 375572342863c899f9f2edf9747a9b60"
            )
        );
    }

    #[test]
    fn test_rfc6979_secp256k1() {
        let private_key = Scalar::from(1);
        let digest = sha256::hash(b"Satoshi Nakamoto");
        let nonce = derive::<Secp256k1>(&private_key, digest.as_ref(), None, 0);
        assert_eq!(
            nonce,
            scalar("8f8a276c19f4149656b280621e358cce24f5f52542772691ee69063b74f15d15")
        );
    }

    #[test]
    fn test_attempt_changes_nonce() {
        let private_key = Scalar::from(1);
        let digest = sha256::hash(b"retry");
        let first = derive::<Secp256k1>(&private_key, digest.as_ref(), None, 0);
        let second = derive::<Secp256k1>(&private_key, digest.as_ref(), None, 1);
        let third = derive::<Secp256k1>(&private_key, digest.as_ref(), None, 2);
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
        for nonce in [first, second, third] {
            assert!(!nonce.is_zero());
            assert!(&nonce < Secp256k1::order());
        }
    }

    #[test]
    fn test_personalization_changes_nonce() {
        let private_key = Scalar::from(1);
        let digest = sha256::hash(b"tagged");
        let plain = derive::<Secp256k1>(&private_key, digest.as_ref(), None, 0);
        let first = derive::<Secp256k1>(&private_key, digest.as_ref(), Some(b"a"), 0);
        let second = derive::<Secp256k1>(&private_key, digest.as_ref(), Some(b"b"), 0);
        assert_ne!(plain, first);
        assert_ne!(plain, second);
        assert_ne!(first, second);
    }

    #[test]
    fn test_bits2int_truncates() {
        // 33 bytes keep only the leftmost 256 bits.
        let value = bits2int::<Secp256k1>(&[0xff; 33]);
        assert_eq!(value.bits(), 256);
        assert_eq!(bits2int::<Secp256k1>(&[]), Scalar::from(0));
    }

    #[test]
    fn test_int2octets_tracks_order_width() {
        assert_eq!(
            hex(&int2octets::<Secp256k1>(&Scalar::from(1))),
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(int2octets::<Secp384r1>(&Scalar::from(1)).len(), 48);
        assert_eq!(hex(&int2octets::<Tiny>(&Scalar::from(258))), "0102");
    }
}
