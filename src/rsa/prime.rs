// Probabilistic Primality Testing
// Solovay-Strassen over the Jacobi symbol, plus prime search

use log::debug;
use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::thread_rng;

use super::bigint::{gcd, mod_pow, random_bits, RsaBigInt};
use super::error::{RsaError, RsaResult};

/// Outcome of a prime search: the prime and how many candidates were tried.
#[derive(Debug, Clone)]
pub struct PrimeSearch {
    pub prime: RsaBigInt,
    pub attempts: u64,
}

/// Jacobi symbol (a/n) for odd n > 0, in {-1, 0, 1}.
///
/// The symbol is only consulted here for operands with `gcd(a, n) == 1`;
/// anything else fails with `JacobiUndefined` instead of a sentinel.
pub fn jacobi(a: &RsaBigInt, n: &RsaBigInt) -> RsaResult<i8> {
    if !gcd(a, n).is_one() {
        return Err(RsaError::JacobiUndefined);
    }

    let mut a = a.clone();
    let mut n = n.clone();
    let mut sign = 1i8;

    loop {
        a %= &n;
        if a.is_zero() {
            return Ok(if n.is_one() { sign } else { 0 });
        }

        // factors of two: (2/n) = -1 when n = 3 or 5 (mod 8)
        while a.is_even() {
            a >>= 1;
            let n_mod_8 = (&n % 8u8).to_u8().unwrap_or(0);
            if n_mod_8 == 3 || n_mod_8 == 5 {
                sign = -sign;
            }
        }

        // quadratic reciprocity: flip when both are 3 (mod 4), then swap
        if (&a % 4u8).to_u8().unwrap_or(0) == 3 && (&n % 4u8).to_u8().unwrap_or(0) == 3 {
            sign = -sign;
        }
        std::mem::swap(&mut a, &mut n);
    }
}

/// Solovay-Strassen primality test.
///
/// Each trial draws a uniform witness `a` in `[1, p-1]` and checks Euler's
/// criterion: the Jacobi symbol of `a` over `p`, mapped into `[0, p)`, must
/// equal `a^((p-1)/2) mod p`. A witness sharing a factor with `p` proves `p`
/// composite outright. The probability that a composite survives all trials
/// is bounded by `2^-iterations`.
pub fn is_probable_prime(p: &RsaBigInt, iterations: u32) -> RsaResult<bool> {
    let two = RsaBigInt::from(2u8);
    if p < &two {
        return Ok(false);
    }
    if *p == two {
        return Ok(true);
    }
    if p.is_even() {
        return Ok(false);
    }

    let one = RsaBigInt::one();
    let exp = (p - &one) >> 1;
    let mut rng = thread_rng();

    for _ in 0..iterations {
        let a = rng.gen_biguint_range(&one, p);

        let symbol = match jacobi(&a, p) {
            Ok(s) => s,
            // the witness shares a factor with p, so p is composite
            Err(RsaError::JacobiUndefined) => return Ok(false),
            Err(e) => return Err(e),
        };
        let residue = match symbol {
            1 => one.clone(),
            -1 => p - &one,
            _ => RsaBigInt::zero(),
        };

        if residue.is_zero() || mod_pow(&a, &exp, p)? != residue {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Fermat primality test, kept as a faster but weaker alternative.
/// Carmichael numbers fool it; Solovay-Strassen is the default.
pub fn fermat(p: &RsaBigInt, iterations: u32) -> RsaResult<bool> {
    let two = RsaBigInt::from(2u8);
    if p < &two {
        return Ok(false);
    }
    if *p == two {
        return Ok(true);
    }
    if p.is_even() {
        return Ok(false);
    }

    let one = RsaBigInt::one();
    let exp = p - &one;
    let mut rng = thread_rng();

    for _ in 0..iterations {
        let a = rng.gen_biguint_range(&one, p);
        if !mod_pow(&a, &exp, p)?.is_one() {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Search for a probable prime of at most `bit_length` bits.
///
/// Samples uniform random integers until one passes the Solovay-Strassen
/// test. There is no iteration cap; the search runs until it succeeds.
pub fn find_prime(bit_length: u64, iterations: u32) -> RsaResult<PrimeSearch> {
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let candidate = random_bits(bit_length);
        if is_probable_prime(&candidate, iterations)? {
            debug!(
                "prime found after {} candidates ({} Solovay-Strassen trials each)",
                attempts, iterations
            );
            return Ok(PrimeSearch {
                prime: candidate,
                attempts,
            });
        }
    }
}

/// Search for a prime p such that 2p + 1 is also prime.
pub fn find_sophie_germain_prime(bit_length: u64, iterations: u32) -> RsaResult<RsaBigInt> {
    loop {
        let found = find_prime(bit_length, iterations)?;
        let safe = (&found.prime << 1u8) + 1u8;
        if is_probable_prime(&safe, iterations)? {
            return Ok(found.prime);
        }
    }
}

/// Estimated probability that `n` passed the test despite being composite,
/// after `iterations` trials: (ln n - 2) / (ln n - 2 + 2^(k-1)).
///
/// An estimate derived from the 2^-k error bound, not a guarantee.
pub fn composite_probability(n: &RsaBigInt, iterations: u32) -> f64 {
    let log_n = ln_biguint(n);
    (log_n - 2.0) / (log_n - 2.0 + 2f64.powi(iterations as i32 - 1))
}

/// Natural log of a big integer: shift down to a float-sized head, then add
/// back the shifted bits as multiples of ln 2.
fn ln_biguint(n: &RsaBigInt) -> f64 {
    if n.is_zero() {
        return f64::NEG_INFINITY;
    }
    let excess = n.bits().saturating_sub(512);
    let head = (n >> excess).to_f64().unwrap_or(f64::MAX);
    head.ln() + excess as f64 * std::f64::consts::LN_2
}
