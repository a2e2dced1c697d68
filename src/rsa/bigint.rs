// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::thread_rng;

use super::error::{RsaError, RsaResult};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Big-endian bytes of `n`, left-padded with zeros to exactly `width` bytes.
/// `n` must fit in `width` bytes.
pub fn to_fixed_width(n: &RsaBigInt, width: usize) -> Vec<u8> {
    let bytes = n.to_bytes_be();
    let mut out = vec![0u8; width];
    let start = width.saturating_sub(bytes.len());
    out[start..].copy_from_slice(&bytes);
    out
}

/// Modular exponentiation: base^exp mod modulus
/// Uses the square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaResult<RsaBigInt> {
    if modulus.is_zero() {
        return Err(RsaError::InvalidModulus);
    }
    if modulus.is_one() {
        return Ok(RsaBigInt::zero());
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    Ok(result)
}

/// Compute the modular inverse: a^(-1) mod modulus
///
/// Runs the extended Euclidean algorithm iteratively, tracking the Bezout
/// coefficient of `a` through successive quotient/remainder steps. Fails with
/// `InverseNotFound` when `a` and `modulus` are not coprime. The result is
/// normalized into `[0, modulus)`.
pub fn mod_inverse(a: &RsaBigInt, modulus: &RsaBigInt) -> RsaResult<RsaBigInt> {
    let mut r = BigInt::from(modulus.clone());
    let mut newr = BigInt::from(a % modulus);
    let mut t = BigInt::zero();
    let mut newt = BigInt::one();

    while !newr.is_zero() {
        let quo = &r / &newr;
        let next_r = &r - &quo * &newr;
        r = std::mem::replace(&mut newr, next_r);
        let next_t = &t - &quo * &newt;
        t = std::mem::replace(&mut newt, next_t);
    }

    if r > BigInt::one() {
        return Err(RsaError::InverseNotFound);
    }
    if t < BigInt::zero() {
        t += BigInt::from(modulus.clone());
    }

    Ok(t.magnitude().clone())
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Uniform random integer in [0, bound)
pub fn random_below(bound: &RsaBigInt) -> RsaBigInt {
    let mut rng = thread_rng();
    rng.gen_biguint_below(bound)
}

/// Uniform random integer of at most `bits` bits
pub fn random_bits(bits: u64) -> RsaBigInt {
    let mut rng = thread_rng();
    rng.gen_biguint(bits)
}
